use std::path::Path;

use anyhow::{Result, bail};

use crate::catalog;

pub fn execute(catalog_path: Option<&Path>) -> Result<()> {
    let Some(path) = catalog_path else {
        bail!("no catalog given; pass --catalog or set QUIZ_CATALOG");
    };

    let catalog = catalog::open(Some(path))?;
    let questions: usize = catalog.quizzes().iter().map(|q| q.len()).sum();
    println!(
        "{}: {} quizzes, {} questions",
        path.display(),
        catalog.len(),
        questions
    );
    println!("Catalog valid");
    Ok(())
}
