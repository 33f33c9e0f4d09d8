pub mod inmemory;

pub use inmemory::InMemoryCatalogRepository;
