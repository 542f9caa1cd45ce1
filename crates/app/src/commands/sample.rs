use anyhow::Result;
use storage::{render_catalog, sample_catalog};

pub fn execute() -> Result<()> {
    let catalog = sample_catalog()?;
    print!("{}", render_catalog(catalog.quizzes())?);
    Ok(())
}
