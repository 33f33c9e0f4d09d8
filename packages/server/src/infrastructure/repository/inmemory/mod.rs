pub mod catalog;

pub use catalog::InMemoryCatalogRepository;
