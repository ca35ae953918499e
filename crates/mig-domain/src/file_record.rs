//! Registro de archivo catalogado durante el intake.

use serde::{Deserialize, Serialize};

use crate::path;
use crate::DomainError;

/// Metadatos de un recurso hoja catalogado. Se crea una vez por entrada de
/// catálogo y no se muta después; el identificador generado lo asigna el
/// almacén de registros al persistirlo.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Ruta completa tal como la ve la colección de origen.
    pub repository_path: String,
    /// Ruta dentro del proyecto, siempre con separador inicial.
    pub relative_path: String,
    /// Ruta dentro del layout de despliegue, siempre con separador inicial.
    pub run_location: String,
    pub project_name: String,
    /// Unidad de entrega propietaria (referencia, no ownership).
    pub delivery_unit_id: String,
}

impl FileRecord {
    /// Deriva las proyecciones de ruta y construye el registro. Falla si la
    /// ruta no respeta el prefijo fijo del repositorio de origen.
    pub fn from_repository_path(repository_path: &str,
                                project_name: &str,
                                delivery_unit_id: &str)
                                -> Result<Self, DomainError> {
        let projection = path::decompose(repository_path)?;
        Ok(Self { repository_path: repository_path.to_string(),
                  relative_path: projection.relative_path,
                  run_location: projection.run_location,
                  project_name: project_name.to_string(),
                  delivery_unit_id: delivery_unit_id.to_string() })
    }
}
