//! Repositorio respaldado por el sistema de archivos local.
//!
//! Mapea las rutas de repositorio (con `/` inicial) a rutas bajo un
//! directorio raíz. El listado se ordena por nombre para conservar el orden
//! estable que exige el catalogado.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::CoreError;
use crate::repo::types::Repository;

pub struct FsRepository {
    root: PathBuf,
}

impl FsRepository {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path.trim_start_matches('/'))
    }

    fn list_entries(&self, path: &str, want_dirs: bool) -> Result<Vec<String>, CoreError> {
        let dir = self.resolve(path);
        if !dir.is_dir() {
            return Err(CoreError::CollectionNotFound(path.to_string()));
        }
        let mut names = Vec::new();
        let entries = fs::read_dir(&dir).map_err(|e| CoreError::Repository(e.to_string()))?;
        for entry in entries {
            let entry = entry.map_err(|e| CoreError::Repository(e.to_string()))?;
            let is_dir = entry.path().is_dir();
            if is_dir == want_dirs {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

impl Repository for FsRepository {
    fn resource_names(&self, path: &str) -> Result<Vec<String>, CoreError> {
        self.list_entries(path, false)
    }

    fn collection_names(&self, path: &str) -> Result<Vec<String>, CoreError> {
        self.list_entries(path, true)
    }

    fn read_resource(&self, path: &str) -> Result<String, CoreError> {
        match fs::read_to_string(self.resolve(path)) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                Err(CoreError::ResourceNotFound(path.to_string()))
            }
            Err(e) => Err(CoreError::Repository(e.to_string())),
        }
    }

    fn write_resource(&mut self, path: &str, content: &str) -> Result<(), CoreError> {
        let target = self.resolve(path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|e| CoreError::Repository(e.to_string()))?;
        }
        fs::write(&target, content).map_err(|e| CoreError::Repository(e.to_string()))
    }

    fn create_collection(&mut self, path: &str) -> Result<(), CoreError> {
        fs::create_dir_all(self.resolve(path)).map_err(|e| CoreError::Repository(e.to_string()))
    }

    fn collection_exists(&self, path: &str) -> bool {
        self.resolve(path).is_dir()
    }

    fn remove_collection(&mut self, path: &str) -> Result<(), CoreError> {
        let dir = self.resolve(path);
        if !dir.is_dir() {
            return Err(CoreError::CollectionNotFound(path.to_string()));
        }
        fs::remove_dir_all(&dir).map_err(|e| CoreError::Repository(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_resources_under_the_root() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut repo = FsRepository::new(tmp.path());
        repo.write_resource("/ws/projA/file.txt", "hello").expect("write");
        assert_eq!(repo.read_resource("/ws/projA/file.txt").expect("read"), "hello");
        assert!(repo.collection_exists("/ws/projA"));
        assert_eq!(repo.resource_names("/ws/projA").expect("list"), vec!["file.txt"]);
    }

    #[test]
    fn listing_is_sorted_by_name() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut repo = FsRepository::new(tmp.path());
        repo.write_resource("/p/z.txt", "z").expect("write");
        repo.write_resource("/p/a.txt", "a").expect("write");
        repo.create_collection("/p/sub").expect("mkdir");
        assert_eq!(repo.resource_names("/p").expect("list"), vec!["a.txt", "z.txt"]);
        assert_eq!(repo.collection_names("/p").expect("list"), vec!["sub"]);
    }

    #[test]
    fn remove_collection_discards_the_subtree() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let mut repo = FsRepository::new(tmp.path());
        repo.write_resource("/scratch/x.txt", "x").expect("write");
        repo.remove_collection("/scratch").expect("remove");
        assert!(!repo.collection_exists("/scratch"));
    }
}
