// src/core/writer.rs

use crate::config::Settings;
use crate::core::p4set::{self, VariableSource};
use crate::core::templates::{self, CONFIG_TEMPLATE, IGNORE_TEMPLATE, TemplateError};
use crate::models::{P4Settings, P4Variable, WrittenConfig};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error(
        "No se pudieron obtener todos los ajustes de Perforce (faltan: {}). Asegúrate de haber iniciado sesión en Perforce.",
        display_names(.0)
    )]
    MissingSettings(Vec<P4Variable>),
    #[error("No se pudo escribir {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Template(#[from] TemplateError),
}

fn display_names(vars: &[P4Variable]) -> String {
    vars.iter().map(|v| v.name()).collect::<Vec<_>>().join(", ")
}

/// Ruta del archivo de ignorado dentro de la raíz.
pub fn ignore_path(project_root: &Path, settings: &Settings) -> PathBuf {
    project_root.join(&settings.ignore_file_name)
}

/// Escribe el archivo de ignorado. Siempre sobrescribe; el contenido es fijo.
pub fn write_ignore(project_root: &Path, settings: &Settings) -> Result<PathBuf, WriteError> {
    let path = ignore_path(project_root, settings);
    let content = templates::template(IGNORE_TEMPLATE)?;
    log::info!("Escribiendo {:?}", path);
    write_file(&path, content)?;
    Ok(path)
}

/// Compone el contenido de `.p4config`.
pub fn render_config(p4: &P4Settings, ignore_path: &Path) -> Result<String, TemplateError> {
    let template = templates::template(CONFIG_TEMPLATE)?;
    let ignore = ignore_path.display().to_string();
    Ok(templates::render(
        template,
        &[
            ("client", p4.client.as_str()),
            ("user", p4.user.as_str()),
            ("port", p4.port.as_str()),
            ("ignore", ignore.as_str()),
        ],
    ))
}

/// Consulta las variables y escribe `.p4config`. Si falta alguna, no escribe nada.
pub fn write_config(
    project_root: &Path,
    source: &dyn VariableSource,
    settings: &Settings,
) -> Result<WrittenConfig, WriteError> {
    let p4 = p4set::read_settings(source, project_root).map_err(WriteError::MissingSettings)?;

    let content = render_config(&p4, &ignore_path(project_root, settings))?;
    let path = project_root.join(&settings.config_file_name);
    log::info!("Escribiendo {:?}", path);
    write_file(&path, &content)?;

    Ok(WrittenConfig {
        path,
        content,
        settings: p4,
    })
}

fn write_file(path: &Path, content: &str) -> Result<(), WriteError> {
    fs::write(path, content).map_err(|e| WriteError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::TempDir;

    struct FakeSource(HashMap<&'static str, &'static str>);

    impl VariableSource for FakeSource {
        fn read_variable(&self, name: &str, _cwd: &Path) -> Option<String> {
            self.0.get(name).map(|v| v.to_string())
        }
    }

    fn full_source() -> FakeSource {
        FakeSource(HashMap::from([
            ("P4CLIENT", "devws"),
            ("P4USER", "alice"),
            ("P4PORT", "ssl:1666"),
        ]))
    }

    #[test]
    fn ignore_file_is_identical_across_runs() {
        let a = TempDir::new().unwrap();
        let b = TempDir::new().unwrap();
        let settings = Settings::default();

        let first = write_ignore(a.path(), &settings).unwrap();
        let first_content = fs::read_to_string(&first).unwrap();
        write_ignore(a.path(), &settings).unwrap();
        let second_content = fs::read_to_string(&first).unwrap();
        let other = fs::read_to_string(write_ignore(b.path(), &settings).unwrap()).unwrap();

        assert_eq!(first, a.path().join(".p4ignore"));
        assert_eq!(first_content, second_content);
        assert_eq!(first_content, other);
    }

    #[test]
    fn ignore_file_overwrites_existing_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join(".p4ignore");
        fs::write(&path, "old").unwrap();

        write_ignore(temp.path(), &Settings::default()).unwrap();
        assert_ne!(fs::read_to_string(&path).unwrap(), "old");
    }

    #[test]
    fn config_has_four_lines_in_order() {
        let temp = TempDir::new().unwrap();
        let written = write_config(temp.path(), &full_source(), &Settings::default()).unwrap();

        let expected = format!(
            "P4CLIENT=devws\nP4USER=alice\nP4PORT=ssl:1666\nP4IGNORE={}\n",
            temp.path().join(".p4ignore").display()
        );
        assert_eq!(written.path, temp.path().join(".p4config"));
        assert_eq!(written.content, expected);
        assert_eq!(fs::read_to_string(&written.path).unwrap(), expected);
    }

    #[test]
    fn queried_values_are_written_verbatim() {
        let p4 = P4Settings {
            client: "ws{{user}}".to_string(),
            user: "alice".to_string(),
            port: "ssl:1666".to_string(),
        };
        let content = render_config(&p4, Path::new("/repos/Game/.p4ignore")).unwrap();
        assert_eq!(
            content,
            format!(
                "P4CLIENT=ws{{{{user}}}}\nP4USER=alice\nP4PORT=ssl:1666\nP4IGNORE={}\n",
                Path::new("/repos/Game/.p4ignore").display()
            )
        );
    }

    #[test]
    fn missing_variable_writes_nothing() {
        for absent in ["P4CLIENT", "P4USER", "P4PORT"] {
            let temp = TempDir::new().unwrap();
            let mut source = full_source();
            source.0.remove(absent);

            let err = write_config(temp.path(), &source, &Settings::default()).unwrap_err();
            match err {
                WriteError::MissingSettings(missing) => {
                    assert_eq!(missing.len(), 1);
                    assert_eq!(missing[0].name(), absent);
                }
                other => panic!("error inesperado: {other:?}"),
            }
            assert!(!temp.path().join(".p4config").exists());
        }
    }

    #[test]
    fn missing_settings_message_lists_names() {
        let err = WriteError::MissingSettings(vec![P4Variable::User, P4Variable::Port]);
        assert!(err.to_string().contains("P4USER, P4PORT"));
    }

    #[test]
    fn custom_file_names_are_respected() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            ignore_file_name: ".p4ignore.txt".to_string(),
            config_file_name: "p4config.txt".to_string(),
            ..Settings::default()
        };
        write_ignore(temp.path(), &settings).unwrap();
        let written = write_config(temp.path(), &full_source(), &settings).unwrap();

        assert!(temp.path().join(".p4ignore.txt").is_file());
        assert_eq!(written.path, temp.path().join("p4config.txt"));
        assert!(written.content.ends_with(&format!(
            "P4IGNORE={}\n",
            temp.path().join(".p4ignore.txt").display()
        )));
    }

    #[test]
    fn unwritable_root_is_io_error() {
        let temp = TempDir::new().unwrap();
        let missing_root = temp.path().join("gone");
        let err = write_ignore(&missing_root, &Settings::default()).unwrap_err();
        assert!(matches!(err, WriteError::Io { path, .. } if path == missing_root.join(".p4ignore")));
    }
}
