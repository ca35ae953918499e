//! Payload principal del proceso de migración (`userData`).
//!
//! Cruza la frontera tarea/motor como texto JSON; los nombres de campo en el
//! wire (`workspace`, `zipPath`, `du`, `deliveryUnitId`, `locals`) son parte
//! del contrato con el motor y la UI y no deben cambiar.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Nombre del workspace destino.
    pub workspace: String,
    /// Rutas de colecciones de origen, en orden. Presente sólo en flujos
    /// basados en archivo.
    #[serde(default)]
    pub zip_path: Vec<String>,
    /// Unidades de entrega producidas por el intake; vacío hasta entonces.
    #[serde(default)]
    pub du: Vec<DeliveryUnitEntry>,
}

impl UserData {
    pub fn new(workspace: impl Into<String>, zip_path: Vec<String>) -> Self {
        Self { workspace: workspace.into(),
               zip_path,
               du: Vec::new() }
    }
}

/// Entrada de `userData.du`: una unidad de entrega ya catalogada.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryUnitEntry {
    pub delivery_unit_id: String,
    /// Identificadores generados de los registros de archivo de la unidad.
    pub locals: Vec<String>,
}

impl DeliveryUnitEntry {
    /// Una unidad sin archivos representa una ruta de origen vacía o
    /// fallida; quien la procese debe saltarla con aviso, no fallar.
    pub fn is_empty(&self) -> bool {
        self.locals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_field_names_are_stable() {
        let data = UserData { workspace: "ws".into(),
                              zip_path: vec!["/a/b/c/d/p".into()],
                              du: vec![DeliveryUnitEntry { delivery_unit_id: "du-1".into(),
                                                           locals: vec!["f-1".into()] }] };
        let json = serde_json::to_value(&data).expect("serialize");
        assert_eq!(json["workspace"], "ws");
        assert_eq!(json["zipPath"][0], "/a/b/c/d/p");
        assert_eq!(json["du"][0]["deliveryUnitId"], "du-1");
        assert_eq!(json["du"][0]["locals"][0], "f-1");
    }

    #[test]
    fn round_trips_through_json_text() {
        let data = UserData::new("ws", vec!["/a/b/c/d/p".into()]);
        let text = serde_json::to_string(&data).expect("serialize");
        let back: UserData = serde_json::from_str(&text).expect("deserialize");
        assert_eq!(back, data);
    }

    #[test]
    fn du_defaults_to_empty_when_absent() {
        let back: UserData = serde_json::from_str(r#"{"workspace":"ws"}"#).expect("deserialize");
        assert!(back.du.is_empty());
        assert!(back.zip_path.is_empty());
    }
}
