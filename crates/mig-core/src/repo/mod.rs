pub mod fs;
pub mod types;

pub use fs::FsRepository;
pub use types::{collection_name, join_path, InMemoryRepository, Repository};
