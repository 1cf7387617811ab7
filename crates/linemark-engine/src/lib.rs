pub mod convert;
pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use convert::convert;
pub use io::*;
pub use parsing::{ClassificationChain, ClassificationRule, LineCategory, WorkingLine};
pub use render::{HtmlOutput, TagCatalog, render_line};
