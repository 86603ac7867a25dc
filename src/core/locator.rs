// src/core/locator.rs

use crate::config::Settings;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocateError {
    #[error(
        "No se encontró la raíz del proyecto de Unreal (ningún archivo .{extension} en {start:?} ni en sus directorios superiores). Ejecuta la herramienta dentro de un proyecto de Unreal o indica una ruta válida."
    )]
    ProjectNotFound { start: PathBuf, extension: String },
    #[error("La ruta {0:?} no existe o no es un directorio.")]
    InvalidPath(PathBuf),
    #[error("Error de entrada/salida al resolver la ruta.")]
    Io(#[from] std::io::Error),
}

/// Busca el directorio raíz del proyecto (el que contiene un `*.<marker_extension>`)
/// comenzando desde `start_path` y subiendo en el árbol de directorios.
pub fn find_project_root(start_path: &Path, marker_extension: &str) -> Option<PathBuf> {
    let mut current_path = start_path.to_path_buf();

    loop {
        if is_project_root(&current_path, marker_extension) {
            return Some(current_path);
        }

        if !current_path.pop() {
            // Si no podemos subir más (llegamos a la raíz), paramos.
            return None;
        }
    }
}

/// Una función de conveniencia para buscar desde el directorio de trabajo actual.
pub fn find_project_root_from_cwd(marker_extension: &str) -> Result<Option<PathBuf>, LocateError> {
    let cwd = env::current_dir()?;
    Ok(find_project_root(&cwd, marker_extension))
}

/// Decide la raíz a usar: si el usuario indicó una ruta se busca a partir de ella,
/// si no, a partir del directorio actual.
pub fn resolve_root(explicit: Option<&Path>, settings: &Settings) -> Result<PathBuf, LocateError> {
    let start = match explicit {
        Some(path) => {
            if !path.is_dir() {
                return Err(LocateError::InvalidPath(path.to_path_buf()));
            }
            // Absoluta para que P4IGNORE no dependa del directorio desde el que se lanzó.
            // Sin `canonicalize`: en Windows añadiría el prefijo `\\?\`.
            std::path::absolute(path)?
        }
        None => env::current_dir()?,
    };

    log::debug!("Buscando raíz de proyecto desde {:?}", start);
    find_project_root(&start, &settings.marker_extension).ok_or(LocateError::ProjectNotFound {
        start,
        extension: settings.marker_extension.clone(),
    })
}

/// `true` si `dir` contiene directamente un archivo `*.<marker_extension>`.
pub fn is_project_root(dir: &Path, marker_extension: &str) -> bool {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            log::debug!("No se pudo leer {:?}, se omite: {}", dir, e);
            return false;
        }
    };

    let suffix = format!(".{}", marker_extension);
    entries.flatten().any(|entry| {
        let is_marker_name = entry
            .file_name()
            .to_str()
            .is_some_and(|name| name.ends_with(&suffix));
        is_marker_name && entry.path().is_file()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, "{}").unwrap();
    }

    #[test]
    fn finds_marker_in_start_directory() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("Game.uproject"));

        let root = find_project_root(temp.path(), "uproject");
        assert_eq!(root.as_deref(), Some(temp.path()));
    }

    #[test]
    fn climbs_to_ancestor_with_marker() {
        let temp = TempDir::new().unwrap();
        let project = temp.path().join("repos").join("Game");
        let nested = project.join("Source").join("Game").join("Private");
        fs::create_dir_all(&nested).unwrap();
        touch(&project.join("Game.uproject"));

        assert_eq!(find_project_root(&nested, "uproject"), Some(project));
    }

    #[test]
    fn returns_nearest_ancestor_first() {
        let temp = TempDir::new().unwrap();
        let outer = temp.path().join("Outer");
        let inner = outer.join("Plugins").join("Inner");
        fs::create_dir_all(&inner).unwrap();
        touch(&outer.join("Outer.uproject"));
        touch(&inner.join("Inner.uproject"));

        assert_eq!(find_project_root(&inner, "uproject"), Some(inner));
    }

    #[test]
    fn directory_named_like_marker_does_not_count() {
        let temp = TempDir::new().unwrap();
        let fake = temp.path().join("Fake.uproject");
        fs::create_dir_all(&fake).unwrap();

        let found = find_project_root(&fake, "uproject");
        // Puede encontrar algo por encima del tempdir, pero nunca el propio tempdir.
        assert_ne!(found.as_deref(), Some(temp.path()));
        assert_ne!(found.as_deref(), Some(fake.as_path()));
    }

    #[test]
    fn explicit_path_must_be_a_directory() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("nope");
        let err = resolve_root(Some(&missing), &Settings::default()).unwrap_err();
        assert!(matches!(err, LocateError::InvalidPath(p) if p == missing));
    }

    #[test]
    fn explicit_path_without_marker_is_not_found() {
        let temp = TempDir::new().unwrap();
        let settings = Settings {
            // Extensión que no existirá en ningún ancestro del tempdir.
            marker_extension: "p4setconfig-test-marker".to_string(),
            ..Settings::default()
        };
        let err = resolve_root(Some(temp.path()), &settings).unwrap_err();
        assert!(matches!(err, LocateError::ProjectNotFound { .. }));
    }

    #[test]
    fn explicit_path_climbs_to_project() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("Content").join("Maps");
        fs::create_dir_all(&content).unwrap();
        touch(&temp.path().join("Game.uproject"));

        let root = resolve_root(Some(&content), &Settings::default()).unwrap();
        assert_eq!(root, temp.path());
    }

    #[test]
    fn explicit_path_keeps_plain_absolute_form() {
        let temp = TempDir::new().unwrap();
        touch(&temp.path().join("Game.uproject"));

        let root = resolve_root(Some(temp.path()), &Settings::default()).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, temp.path());
        assert!(!root.display().to_string().starts_with(r"\\?\"));
    }

    #[test]
    fn io_error_message_does_not_repeat_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "sin acceso");
        let err = LocateError::from(io);
        assert!(!err.to_string().contains("sin acceso"));
        assert_eq!(
            std::error::Error::source(&err).map(|s| s.to_string()).as_deref(),
            Some("sin acceso")
        );
    }
}
