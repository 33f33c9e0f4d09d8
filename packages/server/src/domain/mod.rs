//! Domain layer: catalog entities, the statistics record and the
//! repository interface the rest of the server depends on.

pub mod entity;
pub mod error;
pub mod repository;

pub use entity::{Album, Catalog, Song, StatsSummary, UserRecord};
pub use error::RepositoryError;
pub use repository::CatalogRepository;
