#![forbid(unsafe_code)]

pub mod repository;
pub mod sample;
pub mod toml_file;

pub use repository::{CatalogError, InMemoryCatalog, QuizCatalog};
pub use sample::sample_catalog;
pub use toml_file::{load_catalog, parse_catalog_str, render_catalog};
