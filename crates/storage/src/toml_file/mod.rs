//! TOML catalog files.
//!
//! ```toml
//! [[quiz]]
//! id = 1
//! title = "Neural Networks Quiz"
//! subject = "Computer Science"
//! difficulty = "medium"
//! duration_minutes = 30
//!
//! [[quiz.question]]
//! id = 1
//! text = "What is the primary function of backpropagation?"
//! options = ["To initialize weights", "To calculate gradients and update weights"]
//! correct_answer = 1
//! explanation = "optional"
//! ```

use std::path::Path;

use quiz_core::model::Quiz;
use tracing::{debug, info};

use crate::repository::{CatalogError, InMemoryCatalog};

mod mapping;

use mapping::{CatalogFile, QuizRecord};

/// Read and validate a catalog file.
///
/// # Errors
///
/// Returns `CatalogError::Io` if the file cannot be read, and any error of
/// [`parse_catalog_str`].
pub fn load_catalog(path: &Path) -> Result<InMemoryCatalog, CatalogError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = parse_catalog_str(&content)?;
    info!(path = %path.display(), quizzes = catalog.len(), "loaded quiz catalog");
    Ok(catalog)
}

/// Parse and validate catalog TOML.
///
/// Every quiz goes through the domain constructors, so a quiz without questions
/// or with an out-of-range correct answer is rejected here rather than at scoring time.
///
/// # Errors
///
/// Returns `CatalogError::Parse` for malformed TOML, `CatalogError::Invalid` for
/// a quiz that fails validation, and `CatalogError::Duplicate` for repeated ids.
pub fn parse_catalog_str(content: &str) -> Result<InMemoryCatalog, CatalogError> {
    let file: CatalogFile =
        toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;

    let mut catalog = InMemoryCatalog::new();
    for record in file.quizzes {
        let quiz = record.into_quiz()?;
        debug!(quiz_id = %quiz.id(), questions = quiz.len(), "catalog quiz");
        catalog.insert(quiz)?;
    }
    Ok(catalog)
}

/// Serialize quizzes back into catalog TOML.
///
/// # Errors
///
/// Returns `CatalogError::Parse` if serialization fails.
pub fn render_catalog(quizzes: &[Quiz]) -> Result<String, CatalogError> {
    let file = CatalogFile {
        quizzes: quizzes.iter().map(QuizRecord::from_quiz).collect(),
    };
    toml::to_string_pretty(&file).map_err(|e| CatalogError::Parse(e.to_string()))
}
