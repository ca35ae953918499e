//! Metadatos descriptivos de una unidad de entrega.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Etiqueta de proveedor fijada por el flujo de migración.
pub const MIGRATION_VENDOR: &str = "migration.sap.com";

/// Registro descriptivo persistido por unidad de entrega.
///
/// Los campos organizativos (`ach`, `caption`, `ppmsID`, ...) existen en el
/// esquema de destino pero este flujo no los rellena; viajan vacíos.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryUnitRecord {
    pub name: String,
    pub vendor: String,
    pub last_update: String,
    pub ach: String,
    pub caption: String,
    #[serde(rename = "ppmsID")]
    pub ppms_id: String,
    pub responsible: String,
    #[serde(rename = "sp_PPMS_ID")]
    pub sp_ppms_id: String,
    pub version: String,
    #[serde(rename = "version_patch")]
    pub version_patch: String,
    #[serde(rename = "version_sp")]
    pub version_sp: String,
}

impl DeliveryUnitRecord {
    /// Registro para un proyecto recién catalogado, fechado ahora.
    pub fn new(project_name: &str) -> Self {
        Self::with_timestamp(project_name, Local::now())
    }

    /// Variante con fecha explícita (determinismo en tests).
    pub fn with_timestamp(project_name: &str, when: DateTime<Local>) -> Self {
        Self { name: project_name.to_string(),
               vendor: MIGRATION_VENDOR.to_string(),
               last_update: when.format("%Y-%m-%d %H:%M:%S").to_string(),
               ach: String::new(),
               caption: String::new(),
               ppms_id: String::new(),
               responsible: String::new(),
               sp_ppms_id: String::new(),
               version: String::new(),
               version_patch: String::new(),
               version_sp: String::new() }
    }
}
