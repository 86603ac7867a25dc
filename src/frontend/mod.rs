// src/frontend/mod.rs

//! Las dos formas de lanzar la herramienta: la consola (por defecto) y el
//! formulario interactivo. Ambas delegan en `core::generator`.

pub mod console;
pub mod interactive;

use crate::core::generator::GenerateError;
use crate::core::locator::LocateError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FrontendError {
    #[error(transparent)]
    Locate(#[from] LocateError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
    #[error("Error de entrada/salida: {0}")]
    Io(#[from] std::io::Error),
    #[error("Error de Interfaz de Usuario: {0}")]
    Prompt(#[from] dialoguer::Error),
}

/// Abre la carpeta del proyecto con el explorador del sistema. Un fallo aquí no es fatal.
pub fn open_folder(path: &Path) {
    log::info!("Abriendo {:?}", path);
    if let Err(e) = opener::open(path) {
        log::warn!("No se pudo abrir {:?}: {}", path, e);
    }
}
