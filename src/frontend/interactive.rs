// src/frontend/interactive.rs

use super::{FrontendError, open_folder};
use crate::config::Settings;
use crate::core::generator::{self, GenerateError};
use crate::core::locator;
use crate::core::p4set::VariableSource;
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const BANNER: &str = "Este programa genera los archivos .p4config y .p4ignore de un proyecto de Unreal.

  1. Asegúrate de haber iniciado sesión en Perforce.
  2. Ejecuta el programa junto a tu archivo .uproject o navega hasta su ubicación.
  3. Elige 'Generar archivos' para crear .p4config y .p4ignore.";

/// Formulario interactivo: un campo de ruta, una acción para explorar carpetas
/// y otra para generar. Los errores de generación se muestran y el formulario sigue abierto.
pub fn run(
    initial_path: Option<PathBuf>,
    settings: &Settings,
    source: &dyn VariableSource,
) -> Result<(), FrontendError> {
    let theme = ColorfulTheme::default();
    let mut path_field = initial_path;

    println!("{}\n", BANNER);

    loop {
        let field_label = match &path_field {
            Some(path) => path.display().to_string(),
            None => "(autodetectar)".to_string(),
        };
        let items = [
            format!("Ruta del proyecto: {}", field_label),
            "Explorar...".to_string(),
            "Generar archivos".to_string(),
            "Salir".to_string(),
        ];

        let choice = Select::with_theme(&theme)
            .with_prompt("¿Qué quieres hacer?")
            .items(items.as_slice())
            .default(2)
            .interact_opt()?;

        match choice {
            Some(0) => path_field = edit_path(&theme, path_field.as_deref())?,
            Some(1) => {
                let start = match &path_field {
                    Some(path) if path.is_dir() => path.clone(),
                    _ => env::current_dir()?,
                };
                if let Some(folder) = browse(&theme, &start, settings)? {
                    path_field = Some(folder);
                }
            }
            Some(2) => {
                let generated =
                    generate_and_report(&mut io::stdout(), path_field.as_deref(), settings, source)?;
                if let Some(root) = generated {
                    offer_open(&theme, &root)?;
                }
            }
            _ => return Ok(()),
        }
    }
}

/// Campo de texto para la ruta. Vacío significa autodetectar.
fn edit_path(theme: &ColorfulTheme, current: Option<&Path>) -> Result<Option<PathBuf>, FrontendError> {
    let initial = current.map(|p| p.display().to_string()).unwrap_or_default();
    let text: String = Input::with_theme(theme)
        .with_prompt("Ruta a la carpeta con el archivo .uproject (vacío para autodetectar)")
        .with_initial_text(initial)
        .allow_empty(true)
        .interact_text()?;

    let text = text.trim();
    Ok(if text.is_empty() { None } else { Some(PathBuf::from(text)) })
}

/// Navegador de carpetas sencillo. `None` si el usuario cancela con Esc.
fn browse(
    theme: &ColorfulTheme,
    start: &Path,
    settings: &Settings,
) -> Result<Option<PathBuf>, FrontendError> {
    let mut current = start.to_path_buf();

    loop {
        let subdirs = list_subdirectories(&current);
        let has_parent = current.parent().is_some();

        let mut items = vec![format!("[Usar esta carpeta] {}", current.display())];
        if has_parent {
            items.push(".. (subir)".to_string());
        }
        items.extend(subdirs.iter().map(|dir| {
            let name = dir
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            if locator::is_project_root(dir, &settings.marker_extension) {
                format!("{}/  (proyecto de Unreal)", name)
            } else {
                format!("{}/", name)
            }
        }));

        let selection = Select::with_theme(theme)
            .with_prompt("Selecciona una carpeta (Esc para cancelar)")
            .items(items.as_slice())
            .default(0)
            .interact_opt()?;

        let offset = if has_parent { 2 } else { 1 };
        match selection {
            None => return Ok(None),
            Some(0) => return Ok(Some(current)),
            Some(1) if has_parent => {
                current.pop();
            }
            Some(i) => {
                if let Some(dir) = subdirs.get(i - offset) {
                    current = dir.clone();
                }
            }
        }
    }
}

/// Subdirectorios inmediatos de `dir`, ordenados por nombre. Un directorio ilegible se trata como vacío.
pub fn list_subdirectories(dir: &Path) -> Vec<PathBuf> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!("No se pudo listar {:?}: {}", dir, e);
            return Vec::new();
        }
    };

    let mut dirs: Vec<PathBuf> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}

/// Genera los archivos e informa del resultado por `out`. Un fallo se muestra y no
/// corta el formulario; devuelve la raíz solo si todo salió bien.
fn generate_and_report<W: Write>(
    out: &mut W,
    path_field: Option<&Path>,
    settings: &Settings,
    source: &dyn VariableSource,
) -> Result<Option<PathBuf>, FrontendError> {
    let root = match locator::resolve_root(path_field, settings) {
        Ok(root) => root,
        Err(e) => {
            show_error(out, &error_chain(&e))?;
            return Ok(None);
        }
    };

    match generator::generate(&root, source, settings) {
        Ok(report) => {
            writeln!(out, "\n✔ ¡Éxito! Archivos creados correctamente.")?;
            writeln!(out, "  {}", report.ignore_path.display())?;
            writeln!(out, "  {}\n", report.config.path.display())?;
            write!(out, "{}", report.config.content)?;

            if let Some(hint) = generator::p4config_hint(&root, source, settings) {
                writeln!(
                    out,
                    "\n  Sugerencia: ejecuta `{}` para que Perforce use este archivo.",
                    hint
                )?;
            }
            Ok(Some(root))
        }
        Err(GenerateError::Config { ignore_path, source: cause }) => {
            show_error(
                out,
                &format!(
                    "{}\n  ({} sí se creó: {})",
                    error_chain(&cause),
                    settings.ignore_file_name,
                    ignore_path.display()
                ),
            )?;
            Ok(None)
        }
        Err(e) => {
            show_error(out, &error_chain(&e))?;
            Ok(None)
        }
    }
}

fn offer_open(theme: &ColorfulTheme, root: &Path) -> Result<(), FrontendError> {
    let open = Confirm::with_theme(theme)
        .with_prompt("¿Abrir la carpeta del proyecto?")
        .default(false)
        .interact()?;
    if open {
        open_folder(root);
    }
    Ok(())
}

/// Mensaje del error seguido de sus causas, separados por `: `.
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut current = e.source();
    while let Some(cause) = current {
        message.push_str(&format!(": {}", cause));
        current = cause.source();
    }
    message
}

fn show_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "\n✘ Error: {}\n", message)
}
