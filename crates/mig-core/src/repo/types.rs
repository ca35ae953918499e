//! Abstracción del repositorio jerárquico de colecciones y recursos.
//!
//! Es la frontera con el sistema de archivos virtual que alimenta la
//! migración: lectura jerárquica (listar recursos/colecciones hijas, leer un
//! recurso) y escritura jerárquica (crear colecciones/recursos si faltan,
//! fijar contenido de texto). Las rutas se normalizan con separador inicial
//! y sin separador final; el orden de listado es estable por nombre.

use std::collections::{BTreeMap, BTreeSet};

use crate::errors::CoreError;

pub trait Repository {
    /// Nombres de los recursos hoja directamente bajo `path`, orden estable.
    fn resource_names(&self, path: &str) -> Result<Vec<String>, CoreError>;
    /// Nombres de las colecciones hijas directas de `path`, orden estable.
    fn collection_names(&self, path: &str) -> Result<Vec<String>, CoreError>;
    fn read_resource(&self, path: &str) -> Result<String, CoreError>;
    /// Escribe el contenido de texto, creando las colecciones padre si
    /// faltan. Sobrescribe si el recurso ya existe.
    fn write_resource(&mut self, path: &str, content: &str) -> Result<(), CoreError>;
    fn create_collection(&mut self, path: &str) -> Result<(), CoreError>;
    fn collection_exists(&self, path: &str) -> bool;
    /// Elimina la colección y todo su contenido.
    fn remove_collection(&mut self, path: &str) -> Result<(), CoreError>;
}

/// Segmento terminal de una ruta de colección.
pub fn collection_name(path: &str) -> &str {
    path.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Une una ruta base con un nombre hijo.
pub fn join_path(base: &str, name: &str) -> String {
    if base == "/" || base.is_empty() {
        format!("/{name}")
    } else {
        format!("{}/{}", base.trim_end_matches('/'), name)
    }
}

fn normalize(path: &str) -> String {
    if path.is_empty() || path == "/" {
        return "/".to_string();
    }
    let trimmed = path.trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}

fn parent_of(path: &str) -> String {
    match path.rfind('/') {
        Some(0) | None => "/".to_string(),
        Some(i) => path[..i].to_string(),
    }
}

/// Repositorio en memoria con orden determinista de listado.
#[derive(Default)]
pub struct InMemoryRepository {
    resources: BTreeMap<String, String>,
    collections: BTreeSet<String>,
}

impl InMemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn insert_collection_chain(&mut self, path: &str) {
        let normalized = normalize(path);
        if normalized == "/" {
            return;
        }
        let mut acc = String::new();
        for segment in normalized.trim_start_matches('/').split('/') {
            acc.push('/');
            acc.push_str(segment);
            self.collections.insert(acc.clone());
        }
    }

    fn child_names(keys: impl Iterator<Item = String>, parent: &str) -> Vec<String> {
        let prefix = if parent == "/" { "/".to_string() } else { format!("{parent}/") };
        let mut names = Vec::new();
        for key in keys {
            if let Some(rest) = key.strip_prefix(&prefix) {
                if !rest.is_empty() && !rest.contains('/') {
                    names.push(rest.to_string());
                }
            }
        }
        names
    }
}

impl Repository for InMemoryRepository {
    fn resource_names(&self, path: &str) -> Result<Vec<String>, CoreError> {
        let normalized = normalize(path);
        if !self.collection_exists(&normalized) {
            return Err(CoreError::CollectionNotFound(normalized));
        }
        Ok(Self::child_names(self.resources.keys().cloned(), &normalized))
    }

    fn collection_names(&self, path: &str) -> Result<Vec<String>, CoreError> {
        let normalized = normalize(path);
        if !self.collection_exists(&normalized) {
            return Err(CoreError::CollectionNotFound(normalized));
        }
        Ok(Self::child_names(self.collections.iter().cloned(), &normalized))
    }

    fn read_resource(&self, path: &str) -> Result<String, CoreError> {
        let normalized = normalize(path);
        self.resources
            .get(&normalized)
            .cloned()
            .ok_or(CoreError::ResourceNotFound(normalized))
    }

    fn write_resource(&mut self, path: &str, content: &str) -> Result<(), CoreError> {
        let normalized = normalize(path);
        let parent = parent_of(&normalized);
        self.insert_collection_chain(&parent);
        self.resources.insert(normalized, content.to_string());
        Ok(())
    }

    fn create_collection(&mut self, path: &str) -> Result<(), CoreError> {
        self.insert_collection_chain(path);
        Ok(())
    }

    fn collection_exists(&self, path: &str) -> bool {
        let normalized = normalize(path);
        normalized == "/" || self.collections.contains(&normalized)
    }

    fn remove_collection(&mut self, path: &str) -> Result<(), CoreError> {
        let normalized = normalize(path);
        if !self.collection_exists(&normalized) {
            return Err(CoreError::CollectionNotFound(normalized));
        }
        let prefix = format!("{normalized}/");
        self.collections
            .retain(|c| c != &normalized && !c.starts_with(&prefix));
        self.resources.retain(|r, _| !r.starts_with(&prefix));
        Ok(())
    }
}
