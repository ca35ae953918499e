//! Carga de configuración desde variables de entorno.
//! Usa la convención `MIGRATION_REPOSITORY_ROOT` para la raíz del
//! repositorio donde viven los snapshots de workspace.

use std::env;

use dotenvy::dotenv;
use once_cell::sync::Lazy;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

/// Raíz usada cuando la variable de entorno no está definida.
pub const DEFAULT_REPOSITORY_ROOT: &str = "/repository";

#[derive(Debug, Clone)]
pub struct RepoConfig {
    pub root: String,
}

impl RepoConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        let root = env::var("MIGRATION_REPOSITORY_ROOT").unwrap_or_else(|_| DEFAULT_REPOSITORY_ROOT.to_string());
        Self { root }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
