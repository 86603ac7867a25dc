// src/frontend/console.rs

use super::{FrontendError, open_folder};
use crate::config::Settings;
use crate::core::generator::{self, GenerateError};
use crate::core::locator;
use crate::core::p4set::VariableSource;
use crate::models::Report;
use std::io::Write;
use std::path::Path;

/// Detecta la raíz, escribe los dos archivos e informa por `out`.
/// Los errores se devuelven al llamador, que decide cómo mostrarlos.
pub fn run<W: Write>(
    out: &mut W,
    explicit_path: Option<&Path>,
    settings: &Settings,
    source: &dyn VariableSource,
    open: bool,
) -> Result<Report, FrontendError> {
    let root = locator::resolve_root(explicit_path, settings)?;
    writeln!(out, "Raíz del proyecto de Unreal detectada: {}", root.display())?;

    let report = match generator::generate(&root, source, settings) {
        Ok(report) => report,
        Err(GenerateError::Config { ignore_path, source: cause }) => {
            print_ignore_written(out, &ignore_path, &root)?;
            return Err(GenerateError::Config { ignore_path, source: cause }.into());
        }
        Err(e) => return Err(e.into()),
    };

    print_ignore_written(out, &report.ignore_path, &root)?;
    writeln!(
        out,
        "{} creado correctamente en {}:\n{}",
        settings.config_file_name,
        root.display(),
        report.config.content
    )?;

    if let Some(hint) = generator::p4config_hint(&root, source, settings) {
        writeln!(
            out,
            "Sugerencia: ejecuta `{}` para que Perforce use este archivo.",
            hint
        )?;
    }

    if open {
        open_folder(&root);
    }
    Ok(report)
}

fn print_ignore_written<W: Write>(out: &mut W, ignore_path: &Path, root: &Path) -> std::io::Result<()> {
    let name = ignore_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    writeln!(out, "{} creado correctamente en {}.", name, root.display())
}
