use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use storage::{InMemoryCatalog, QuizCatalog, load_catalog, sample_catalog};

/// Load the configured catalog file, or the built-in sample when none is set.
pub fn open(path: Option<&Path>) -> Result<InMemoryCatalog> {
    match path {
        Some(path) => {
            load_catalog(path).with_context(|| format!("loading catalog {}", path.display()))
        }
        None => sample_catalog().context("building sample catalog"),
    }
}

pub fn open_shared(path: Option<&Path>) -> Result<Arc<dyn QuizCatalog>> {
    Ok(Arc::new(open(path)?))
}
