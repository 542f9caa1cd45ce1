use std::path::Path;

use anyhow::Result;
use ui::vm::map_quiz_list;

use crate::catalog;

pub fn execute(catalog_path: Option<&Path>) -> Result<()> {
    let catalog = catalog::open(catalog_path)?;
    print!("{}", ui::render_quiz_list(&map_quiz_list(catalog.quizzes())));
    Ok(())
}
