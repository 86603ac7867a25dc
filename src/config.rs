// src/config.rs

use crate::constants::{
    APP_CONFIG_DIR, P4_EXECUTABLE, P4CONFIG_FILENAME, P4IGNORE_FILENAME,
    PROJECT_MARKER_EXTENSION, SETTINGS_FILENAME,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("No se pudo leer el archivo de ajustes '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Error al parsear TOML en '{path}': {source}")]
    TomlParse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Ajustes de la herramienta. Todos los campos son opcionales en el TOML.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Ejecutable del cliente de Perforce (`p4`, o una ruta absoluta).
    pub p4_executable: String,
    /// Extensión que identifica la raíz del proyecto, sin el punto.
    pub marker_extension: String,
    pub ignore_file_name: String,
    pub config_file_name: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            p4_executable: P4_EXECUTABLE.to_string(),
            marker_extension: PROJECT_MARKER_EXTENSION.to_string(),
            ignore_file_name: P4IGNORE_FILENAME.to_string(),
            config_file_name: P4CONFIG_FILENAME.to_string(),
        }
    }
}

impl Settings {
    /// Carga los ajustes del usuario. Si el archivo no existe, devuelve los valores por defecto.
    pub fn load() -> Result<Self, SettingsError> {
        match settings_path() {
            Some(path) => Self::load_from(&path),
            None => {
                log::warn!("No se pudo determinar el directorio de configuración del sistema. Usando ajustes por defecto.");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            log::debug!("Sin archivo de ajustes en {:?}", path);
            return Ok(Self::default());
        }
        log::info!("Cargando ajustes desde: {:?}", path);
        let content = fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| SettingsError::TomlParse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Sobrescribe el ejecutable si se pasó uno por línea de comandos.
    pub fn with_p4_executable(mut self, executable: Option<String>) -> Self {
        if let Some(exe) = executable {
            self.p4_executable = exe;
        }
        self
    }
}

/// Devuelve la ruta al archivo de ajustes (~/.config/p4setconfig/config.toml).
/// No lo crea: la herramienta solo lo lee.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_CONFIG_DIR).join(SETTINGS_FILENAME))
}
