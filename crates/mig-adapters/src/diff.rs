//! Cálculo y persistencia del diff de árboles de directorios.
//!
//! Compara el snapshot pre-migración (`<workspace>_unmodified`) con el
//! directorio post-migración (`<workspace>`) y produce un resultado
//! estructurado por archivo que la UI consume después. El resultado se
//! persiste bajo un nombre derivado determinísticamente del identificador
//! de ejecución, de modo que recuperarlo es función pura de ese id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use mig_core::catalog::catalog_resources;
use mig_core::errors::CoreError;
use mig_core::repo::Repository;

use crate::task_error;

pub const DIFF_COLLECTION: &str = "/diff-views";
pub const DIFF_RESOURCE_PREFIX: &str = "migration-process-id-";

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DiffStatus {
    Added,
    Removed,
    Modified,
    Unchanged,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DiffEntry {
    /// Ruta relativa al workspace, con separador inicial.
    pub path: String,
    pub status: DiffStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_content: Option<String>,
}

/// Resultado estructurado de comparar los dos árboles, en orden estable por
/// ruta.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiffViewData {
    pub entries: Vec<DiffEntry>,
}

impl DiffViewData {
    pub fn status_of(&self, path: &str) -> Option<DiffStatus> {
        self.entries.iter().find(|e| e.path == path).map(|e| e.status)
    }
}

fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Lee todas las hojas bajo `root` como mapa ruta-relativa -> contenido. Una
/// raíz inexistente se trata como árbol vacío (workspace aún sin snapshot).
fn snapshot(repo: &dyn Repository, root: &str) -> Result<BTreeMap<String, String>, CoreError> {
    let mut tree = BTreeMap::new();
    if !repo.collection_exists(root) {
        return Ok(tree);
    }
    for full_path in catalog_resources(repo, root)? {
        let relative = full_path.strip_prefix(root).unwrap_or(&full_path).to_string();
        let content = repo.read_resource(&full_path)?;
        tree.insert(relative, content);
    }
    Ok(tree)
}

/// Compara los árboles pre y post migración archivo por archivo.
pub fn compute_tree_diff(repo: &dyn Repository,
                         before_root: &str,
                         after_root: &str)
                         -> Result<DiffViewData, CoreError> {
    let before = snapshot(repo, before_root)?;
    let after = snapshot(repo, after_root)?;

    let mut paths: Vec<&String> = before.keys().chain(after.keys()).collect();
    paths.sort();
    paths.dedup();

    let mut entries = Vec::with_capacity(paths.len());
    for path in paths {
        let entry = match (before.get(path), after.get(path)) {
            (None, Some(new_content)) => DiffEntry { path: path.clone(),
                                                     status: DiffStatus::Added,
                                                     old_content: None,
                                                     new_content: Some(new_content.clone()) },
            (Some(old_content), None) => DiffEntry { path: path.clone(),
                                                     status: DiffStatus::Removed,
                                                     old_content: Some(old_content.clone()),
                                                     new_content: None },
            (Some(old_content), Some(new_content)) => {
                if content_digest(old_content) == content_digest(new_content) {
                    DiffEntry { path: path.clone(),
                                status: DiffStatus::Unchanged,
                                old_content: None,
                                new_content: None }
                } else {
                    DiffEntry { path: path.clone(),
                                status: DiffStatus::Modified,
                                old_content: Some(old_content.clone()),
                                new_content: Some(new_content.clone()) }
                }
            }
            (None, None) => unreachable!("path came from one of the two trees"),
        };
        entries.push(entry);
    }

    Ok(DiffViewData { entries })
}

/// Ruta del recurso de diff para un identificador de ejecución.
pub fn diff_resource_path(execution_id: &str) -> String {
    format!("{DIFF_COLLECTION}/{DIFF_RESOURCE_PREFIX}{execution_id}")
}

/// Persiste el diff como recurso JSON, creando la colección en el primer
/// uso. Re-persistir el mismo identificador sobrescribe, no duplica.
pub fn persist_diff(repo: &mut dyn Repository,
                    execution_id: &str,
                    diff: &DiffViewData)
                    -> Result<String, CoreError> {
    if !repo.collection_exists(DIFF_COLLECTION) {
        repo.create_collection(DIFF_COLLECTION)?;
    }
    let path = diff_resource_path(execution_id);
    let payload = serde_json::to_string(diff).map_err(task_error)?;
    repo.write_resource(&path, &payload)?;
    Ok(path)
}
