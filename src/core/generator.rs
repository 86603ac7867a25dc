// src/core/generator.rs

use crate::config::Settings;
use crate::core::p4set::VariableSource;
use crate::core::writer::{self, WriteError};
use crate::models::Report;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("No se pudo crear el archivo de ignorado.")]
    Ignore(#[source] WriteError),
    /// El archivo de ignorado ya quedó escrito en `ignore_path`.
    #[error("Se escribió {ignore_path:?}, pero no se pudo crear el archivo de configuración.")]
    Config {
        ignore_path: PathBuf,
        #[source]
        source: WriteError,
    },
}

/// Escribe primero el archivo de ignorado y después `.p4config`, que lo referencia.
pub fn generate(
    project_root: &Path,
    source: &dyn VariableSource,
    settings: &Settings,
) -> Result<Report, GenerateError> {
    log::info!("Generando archivos de Perforce en {:?}", project_root);

    let ignore_path = writer::write_ignore(project_root, settings).map_err(GenerateError::Ignore)?;
    let config = match writer::write_config(project_root, source, settings) {
        Ok(config) => config,
        Err(cause) => return Err(GenerateError::Config { ignore_path, source: cause }),
    };

    Ok(Report {
        project_root: project_root.to_path_buf(),
        ignore_path,
        config,
    })
}

/// Si `P4CONFIG` no apunta al archivo generado, devuelve el comando para activarlo.
pub fn p4config_hint(
    project_root: &Path,
    source: &dyn VariableSource,
    settings: &Settings,
) -> Option<String> {
    let current = source.read_variable("P4CONFIG", project_root);
    if current.as_deref() == Some(settings.config_file_name.as_str()) {
        return None;
    }
    log::debug!("P4CONFIG actual: {:?}", current);
    Some(format!(
        "{} set P4CONFIG={}",
        settings.p4_executable, settings.config_file_name
    ))
}
