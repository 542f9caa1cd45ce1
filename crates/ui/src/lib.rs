//! Presentation layer: view models built from core/services types, and plain-text
//! renderers over them. Nothing here mutates a session or a report.

pub mod render;
pub mod vm;

pub use render::{render_question, render_quiz_list, render_report, render_stats};
