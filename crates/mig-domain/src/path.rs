//! Descomposición de rutas de repositorio.
//!
//! Una ruta completa de recurso sigue el layout fijo del repositorio de
//! origen: `registry / access / space / workspace / project / ...resto`.
//! De ahí se derivan dos proyecciones usadas aguas abajo:
//! - `run_location`: segmentos desde el índice 4 (ubicación en el layout de
//!   despliegue, con separador inicial).
//! - `relative_path`: segmentos desde el índice 5 (ruta dentro del proyecto,
//!   con separador inicial).
//!
//! Una ruta con menos segmentos que el prefijo fijo viola el contrato y se
//! rechaza en el intake con un error descriptivo, nunca se trunca en
//! silencio.

use crate::DomainError;

pub const SEPARATOR: char = '/';

/// Profundidad del prefijo fijo hasta la ubicación de despliegue.
const RUN_LOCATION_OFFSET: usize = 4;
/// Profundidad del prefijo fijo hasta la ruta interna del proyecto.
const RELATIVE_PATH_OFFSET: usize = 5;

/// Proyecciones derivadas de una ruta de repositorio.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathProjection {
    pub run_location: String,
    pub relative_path: String,
}

/// Descompone una ruta completa en sus dos proyecciones.
///
/// El separador inicial se ignora al segmentar. Casos límite: con exactamente
/// 5 segmentos `relative_path` queda en `/` (sólo el separador); con menos de
/// 5 segmentos la ruta es inválida.
pub fn decompose(repository_path: &str) -> Result<PathProjection, DomainError> {
    let trimmed = repository_path.trim_start_matches(SEPARATOR);
    let segments: Vec<&str> = if trimmed.is_empty() {
        Vec::new()
    } else {
        trimmed.split(SEPARATOR).collect()
    };

    if segments.len() < RELATIVE_PATH_OFFSET {
        return Err(DomainError::ValidationError(format!(
            "repository path '{}' has {} segments, expected at least {} (registry/access/space/workspace/project)",
            repository_path,
            segments.len(),
            RELATIVE_PATH_OFFSET
        )));
    }

    let run_location = format!("/{}", segments[RUN_LOCATION_OFFSET..].join("/"));
    let relative_path = format!("/{}", segments[RELATIVE_PATH_OFFSET..].join("/"));
    Ok(PathProjection { run_location, relative_path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_segment_path_projects_two_and_one_segments() {
        let p = decompose("/a/b/c/d/e/f").expect("valid path");
        assert_eq!(p.run_location, "/e/f");
        assert_eq!(p.relative_path, "/f");
    }

    #[test]
    fn five_segment_path_yields_separator_only_relative_path() {
        let p = decompose("/a/b/c/d/e").expect("valid path");
        assert_eq!(p.run_location, "/e");
        assert_eq!(p.relative_path, "/");
    }

    #[test]
    fn short_path_is_rejected_with_descriptive_error() {
        let err = decompose("/a/b/c").expect_err("short path must fail");
        let msg = err.to_string();
        assert!(msg.contains("/a/b/c"), "error should name the path: {msg}");
        assert!(msg.contains("3 segments"), "error should count segments: {msg}");
    }
}
