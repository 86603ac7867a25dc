// src/core/templates.rs

use include_dir::{Dir, include_dir};
use thiserror::Error;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Reglas de ignorado para proyectos de Unreal. Se copia literal.
pub const IGNORE_TEMPLATE: &str = "p4ignore";

/// Plantilla de `.p4config` con tokens `{{client}}`, `{{user}}`, `{{port}}` y `{{ignore}}`.
pub const CONFIG_TEMPLATE: &str = "p4config.template";

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("No se encontró la plantilla '{0}' interna.")]
    NotFound(String),
    #[error("La plantilla '{0}' no es UTF-8.")]
    NotUtf8(String),
}

/// Devuelve el contenido de una plantilla embebida.
pub fn template(name: &str) -> Result<&'static str, TemplateError> {
    let file = TEMPLATES_DIR
        .get_file(name)
        .ok_or_else(|| TemplateError::NotFound(name.to_string()))?;
    file.contents_utf8()
        .ok_or_else(|| TemplateError::NotUtf8(name.to_string()))
}

/// Sustituye cada `{{clave}}` por su valor en una sola pasada: el texto insertado
/// no se vuelve a examinar. Las claves desconocidas se dejan tal cual.
pub fn render(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };

        let key = &after[..end];
        match values.iter().find(|(k, _)| *k == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + end + 4]),
        }
        rest = &after[end + 2..];
    }

    out.push_str(rest);
    out
}
