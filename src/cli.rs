// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "p4setconfig: genera .p4ignore y .p4config para un proyecto de Unreal.", long_about = None)]
pub struct Cli {
    /// Carpeta desde la que buscar el archivo .uproject (por defecto, el directorio actual).
    #[arg(short, long, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Cliente de Perforce a invocar (sobrescribe `p4_executable` de los ajustes).
    #[arg(long = "p4", value_name = "EXE")]
    pub p4_executable: Option<String>,

    /// Abre la carpeta del proyecto al terminar.
    #[arg(long)]
    pub open: bool,

    /// Lanza el formulario interactivo en lugar de la salida de consola.
    #[arg(short, long)]
    pub interactive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_is_console_mode() {
        let cli = Cli::try_parse_from(["p4setconfig"]).unwrap();
        assert!(cli.path.is_none());
        assert!(cli.p4_executable.is_none());
        assert!(!cli.open);
        assert!(!cli.interactive);
    }

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "p4setconfig",
            "--path",
            "/repos/Game",
            "--p4",
            "/usr/local/bin/p4",
            "--open",
            "-i",
        ])
        .unwrap();
        assert_eq!(cli.path, Some(PathBuf::from("/repos/Game")));
        assert_eq!(cli.p4_executable.as_deref(), Some("/usr/local/bin/p4"));
        assert!(cli.open);
        assert!(cli.interactive);
    }
}
