//! Infrastructure layer: concrete repository implementations, the catalog
//! loader and HTTP DTOs.

pub mod catalog_loader;
pub mod dto;
pub mod repository;
