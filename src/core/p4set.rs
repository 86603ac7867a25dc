// src/core/p4set.rs

//! Lectura de variables de Perforce a partir de la salida de `p4 set`.
//!
//! Gramática aceptada, una variable por línea:
//!
//! ```text
//! NAME=VALUE[ (SOURCE)]
//! ```
//!
//! `SOURCE` es la anotación que añade `p4` (`config`, `set`, `enviro`...).
//! Se elimina junto con los espacios sobrantes; los espacios internos del
//! valor se conservan (rutas de Windows, por ejemplo).

use crate::models::{P4Settings, P4Variable, SetEntry};
use crate::system::executor;
use std::path::Path;

/// Algo capaz de devolver el valor actual de una variable de Perforce.
pub trait VariableSource {
    /// `None` si la variable no está definida o la consulta falló.
    fn read_variable(&self, name: &str, cwd: &Path) -> Option<String>;
}

/// Consulta el cliente `p4` real.
#[derive(Debug, Clone)]
pub struct P4Client {
    executable: String,
}

impl P4Client {
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }
}

impl VariableSource for P4Client {
    fn read_variable(&self, name: &str, cwd: &Path) -> Option<String> {
        match executor::capture_output(&self.executable, &["set", name], cwd) {
            Ok(output) => {
                log::debug!("Salida de '{} set {}':\n{}", self.executable, name, output);
                let value = find_variable(&output, name);
                if value.is_none() {
                    log::warn!("La variable {} no aparece en la salida de 'p4 set'.", name);
                }
                value
            }
            Err(e) => {
                log::warn!("{}", e);
                None
            }
        }
    }
}

/// Parsea una línea `NAME=VALUE[ (SOURCE)]`. Devuelve `None` si no tiene esa forma.
pub fn parse_set_line(line: &str) -> Option<SetEntry> {
    let (name, rest) = line.split_once('=')?;
    let name = name.trim();
    if name.is_empty() || name.contains(char::is_whitespace) {
        return None;
    }

    let (value, source) = split_annotation(rest);
    Some(SetEntry {
        name: name.to_string(),
        value: value.trim().to_string(),
        source,
    })
}

/// Parsea toda la salida, ignorando las líneas que no son asignaciones.
pub fn parse_set_output(output: &str) -> Vec<SetEntry> {
    output.lines().filter_map(parse_set_line).collect()
}

/// Primer valor no vacío de `name` en la salida.
pub fn find_variable(output: &str, name: &str) -> Option<String> {
    parse_set_output(output)
        .into_iter()
        .find(|entry| entry.name == name && !entry.value.is_empty())
        .map(|entry| entry.value)
}

/// Consulta las tres variables necesarias. Si falta alguna, devuelve la lista de las que faltan.
pub fn read_settings(
    source: &dyn VariableSource,
    cwd: &Path,
) -> Result<P4Settings, Vec<P4Variable>> {
    let mut missing = Vec::new();
    let mut lookup = |var: P4Variable| {
        let value = source.read_variable(var.name(), cwd);
        if value.is_none() {
            missing.push(var);
        }
        value.unwrap_or_default()
    };

    let client = lookup(P4Variable::Client);
    let user = lookup(P4Variable::User);
    let port = lookup(P4Variable::Port);

    if !missing.is_empty() {
        return Err(missing);
    }
    Ok(P4Settings { client, user, port })
}

/// Separa la anotación final ` (SOURCE)` del valor. El `(` de apertura es el que
/// empareja con el `)` final, así que la anotación puede contener paréntesis.
fn split_annotation(raw: &str) -> (&str, Option<String>) {
    let trimmed = raw.trim_end();
    if !trimmed.ends_with(')') {
        return (trimmed, None);
    }

    let mut depth = 0usize;
    for (idx, ch) in trimmed.char_indices().rev() {
        match ch {
            ')' => depth += 1,
            '(' => {
                depth -= 1;
                if depth == 0 {
                    if !trimmed[..idx].ends_with(char::is_whitespace) {
                        break;
                    }
                    let source = trimmed[idx + 1..trimmed.len() - 1].trim().to_string();
                    return (&trimmed[..idx], Some(source));
                }
            }
            _ => {}
        }
    }
    (trimmed, None)
}
