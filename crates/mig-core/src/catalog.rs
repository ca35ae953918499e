//! Catalogado recursivo de recursos hoja.
//!
//! Recorre una colección en profundidad devolviendo las rutas completas de
//! todos sus recursos hoja: primero los recursos directos del nivel actual,
//! después cada subcolección en el orden que reporta el repositorio. El
//! orden resultante es estable y los consumidores dependen de él (los
//! índices del catálogo no llevan orden explícito). Es una función pura:
//! acumula por retorno, sin estado mutable compartido.

use crate::errors::CoreError;
use crate::repo::{join_path, Repository};

pub fn catalog_resources(repo: &dyn Repository, path: &str) -> Result<Vec<String>, CoreError> {
    let mut leaves = Vec::new();
    for name in repo.resource_names(path)? {
        leaves.push(join_path(path, &name));
    }
    for child in repo.collection_names(path)? {
        let mut nested = catalog_resources(repo, &join_path(path, &child))?;
        leaves.append(&mut nested);
    }
    Ok(leaves)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repo::InMemoryRepository;

    fn seeded() -> InMemoryRepository {
        let mut repo = InMemoryRepository::new();
        repo.write_resource("/src/proj/top.txt", "1").expect("write");
        repo.write_resource("/src/proj/a/one.txt", "2").expect("write");
        repo.write_resource("/src/proj/a/two.txt", "3").expect("write");
        repo.write_resource("/src/proj/b/deep/three.txt", "4").expect("write");
        repo
    }

    #[test]
    fn lists_leaves_depth_first_current_level_first() {
        let repo = seeded();
        let leaves = catalog_resources(&repo, "/src/proj").expect("catalog");
        assert_eq!(leaves,
                   vec!["/src/proj/top.txt",
                        "/src/proj/a/one.txt",
                        "/src/proj/a/two.txt",
                        "/src/proj/b/deep/three.txt"]);
    }

    #[test]
    fn empty_collection_yields_empty_catalog() {
        let mut repo = InMemoryRepository::new();
        repo.create_collection("/src/empty").expect("mkdir");
        let leaves = catalog_resources(&repo, "/src/empty").expect("catalog");
        assert!(leaves.is_empty());
    }

    #[test]
    fn missing_collection_is_an_error() {
        let repo = InMemoryRepository::new();
        assert!(catalog_resources(&repo, "/missing").is_err());
    }

    #[test]
    fn traversal_is_deterministic_across_runs() {
        let repo = seeded();
        let first = catalog_resources(&repo, "/src/proj").expect("catalog");
        let second = catalog_resources(&repo, "/src/proj").expect("catalog");
        assert_eq!(first, second);
    }
}
