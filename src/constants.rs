// src/constants.rs

/// Extensión del descriptor de proyecto de Unreal (sin el punto).
pub const PROJECT_MARKER_EXTENSION: &str = "uproject";

/// El nombre del archivo de reglas de ignorado que se escribe en la raíz del proyecto.
pub const P4IGNORE_FILENAME: &str = ".p4ignore";

/// El nombre del archivo de configuración local de Perforce.
pub const P4CONFIG_FILENAME: &str = ".p4config";

/// Ejecutable del cliente de Perforce que se invoca por defecto.
pub const P4_EXECUTABLE: &str = "p4";

/// Subdirectorio de la aplicación dentro del directorio de configuración del sistema.
pub const APP_CONFIG_DIR: &str = "p4setconfig";

/// El nombre del archivo de ajustes de la herramienta (en ~/.config/p4setconfig/).
pub const SETTINGS_FILENAME: &str = "config.toml";
