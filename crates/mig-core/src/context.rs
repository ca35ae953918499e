//! Contexto de ejecución por corrida de migración.
//!
//! Rol en el pipeline:
//! - El motor de procesos externo mantiene un almacén de variables de texto
//!   por identificador de ejecución; `ProcessVariables` es esa frontera.
//! - `ExecutionContext` expone accesores tipados sobre ese almacén, de modo
//!   que la (de)serialización JSON ocurre únicamente aquí y los valores
//!   conservan fidelidad de ida y vuelta.
//! - Cada ejecución está aislada: ninguna tarea puede leer ni escribir
//!   variables de otra corrida.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;

/// Variables con nombre fijo del contrato con el motor y la UI.
pub const USER_DATA: &str = "userData";
pub const MIGRATION_STATE: &str = "migrationState";
pub const DIFF_VIEW_DATA_FILE_NAME: &str = "diffViewDataFileName";

/// Almacén de variables de proceso, indexado por identificador de ejecución.
/// Los valores cruzan la frontera como texto.
pub trait ProcessVariables {
    fn get(&self, execution_id: &str, name: &str) -> Option<String>;
    fn set(&mut self, execution_id: &str, name: &str, value: &str);
}

#[derive(Default)]
pub struct InMemoryProcessVariables {
    inner: HashMap<String, HashMap<String, String>>,
}

impl InMemoryProcessVariables {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProcessVariables for InMemoryProcessVariables {
    fn get(&self, execution_id: &str, name: &str) -> Option<String> {
        self.inner.get(execution_id).and_then(|vars| vars.get(name).cloned())
    }

    fn set(&mut self, execution_id: &str, name: &str, value: &str) {
        self.inner
            .entry(execution_id.to_string())
            .or_default()
            .insert(name.to_string(), value.to_string());
    }
}

/// Vista tipada del almacén de variables para una ejecución concreta.
pub struct ExecutionContext {
    execution_id: String,
    store: Rc<RefCell<dyn ProcessVariables>>,
}

impl ExecutionContext {
    pub fn new(execution_id: impl Into<String>, store: Rc<RefCell<dyn ProcessVariables>>) -> Self {
        Self { execution_id: execution_id.into(),
               store }
    }

    pub fn id(&self) -> &str {
        &self.execution_id
    }

    pub fn get_var(&self, name: &str) -> Option<String> {
        self.store.borrow().get(&self.execution_id, name)
    }

    pub fn set_var(&self, name: &str, value: &str) {
        self.store.borrow_mut().set(&self.execution_id, name, value);
    }

    /// Lee una variable y la decodifica desde su forma JSON de texto.
    pub fn get_json<T: DeserializeOwned>(&self, name: &str) -> Result<T, CoreError> {
        let raw = self.get_var(name)
                      .ok_or_else(|| CoreError::VariableMissing(name.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| CoreError::VariableDecode { name: name.to_string(),
                                                                           detail: e.to_string() })
    }

    /// Serializa un valor a texto JSON y lo escribe bajo `name`.
    pub fn set_json<T: Serialize>(&self, name: &str, value: &T) -> Result<(), CoreError> {
        let raw = serde_json::to_string(value).map_err(|e| CoreError::VariableDecode { name: name.to_string(),
                                                                                       detail: e.to_string() })?;
        self.set_var(name, &raw);
        Ok(())
    }
}
