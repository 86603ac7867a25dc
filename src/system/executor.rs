// src/system/executor.rs

use std::path::Path;
use std::process::{Command as StdCommand, Stdio};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExecutionError {
    #[error("El comando '{0}' no se pudo ejecutar: {1}")]
    CommandFailed(String, std::io::Error),
    #[error("El comando '{0}' finalizó con un código de error: {1:?}")]
    NonZeroExitStatus(String, Option<i32>),
    #[error("La salida del comando '{0}' no es UTF-8 válido.")]
    InvalidOutput(String),
}

/// Ejecuta un programa (sin pasar por la shell) en un directorio de trabajo
/// específico y devuelve su salida estándar.
///
/// Bloquea hasta que el proceso termina. No hay timeout.
pub fn capture_output(program: &str, args: &[&str], cwd: &Path) -> Result<String, ExecutionError> {
    let command_line = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    log::info!("Ejecutando comando: '{}' en {:?}", command_line, cwd);

    let output = StdCommand::new(program)
        .args(args)
        .current_dir(cwd)
        .stdin(Stdio::null())
        .output()
        .map_err(|e| ExecutionError::CommandFailed(command_line.clone(), e))?;

    if !output.status.success() {
        log::debug!(
            "stderr de '{}': {}",
            command_line,
            String::from_utf8_lossy(&output.stderr).trim()
        );
        return Err(ExecutionError::NonZeroExitStatus(
            command_line,
            output.status.code(),
        ));
    }

    String::from_utf8(output.stdout).map_err(|_| ExecutionError::InvalidOutput(command_line))
}
