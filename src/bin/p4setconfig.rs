// src/bin/p4setconfig.rs

use anyhow::{Context, Result};
use clap::Parser;
use std::io;

use p4setconfig::cli::Cli;
use p4setconfig::config::Settings;
use p4setconfig::core::p4set::P4Client;
use p4setconfig::frontend::{console, interactive};

/// El punto de entrada principal de la aplicación.
fn main() {
    // Inicializar el logger. Para ver los logs, ejecuta con `RUST_LOG=debug p4setconfig ...`
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run_cli(cli) {
        eprintln!("\nError: {:?}", e);
        std::process::exit(1);
    }
}

fn run_cli(cli: Cli) -> Result<()> {
    log::debug!("CLI args parsed: {:?}", cli);

    let settings = Settings::load()
        .context("No se pudieron cargar los ajustes de p4setconfig.")?
        .with_p4_executable(cli.p4_executable);
    let client = P4Client::new(settings.p4_executable.clone());

    if cli.interactive {
        return interactive::run(cli.path, &settings, &client)
            .context("El formulario interactivo terminó con un error.");
    }

    let mut stdout = io::stdout().lock();
    let report = console::run(&mut stdout, cli.path.as_deref(), &settings, &client, cli.open)?;
    log::info!("Archivos generados en {:?}", report.project_root);
    Ok(())
}
