// src/models.rs

use std::fmt;
use std::path::PathBuf;

/// Las tres variables de Perforce que deben existir para generar `.p4config`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum P4Variable {
    Client,
    User,
    Port,
}

impl P4Variable {
    /// Orden en el que se consultan y se escriben en el archivo.
    pub const REQUIRED: [P4Variable; 3] = [P4Variable::Client, P4Variable::User, P4Variable::Port];

    pub fn name(self) -> &'static str {
        match self {
            P4Variable::Client => "P4CLIENT",
            P4Variable::User => "P4USER",
            P4Variable::Port => "P4PORT",
        }
    }
}

impl fmt::Display for P4Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Una línea de la salida de `p4 set`: `NAME=VALUE[ (SOURCE)]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetEntry {
    pub name: String,
    pub value: String,
    /// Origen que anota `p4` (`config`, `set`, `enviro`...), si lo hay.
    pub source: Option<String>,
}

/// Ajustes de conexión del workspace activo. Solo existe si las tres variables se resolvieron.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct P4Settings {
    pub client: String,
    pub user: String,
    pub port: String,
}

/// Resultado de escribir `.p4config`.
#[derive(Debug, Clone)]
pub struct WrittenConfig {
    pub path: PathBuf,
    pub content: String,
    pub settings: P4Settings,
}

/// Lo que produjo una ejecución completa sobre una raíz de proyecto.
#[derive(Debug, Clone)]
pub struct Report {
    pub project_root: PathBuf,
    pub ignore_path: PathBuf,
    pub config: WrittenConfig,
}
