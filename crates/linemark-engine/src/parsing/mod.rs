//! # Line Classification
//!
//! Every input line is classified on its own, with no reference to the
//! lines around it.
//!
//! ## Modules
//!
//! - **`category`**: `LineCategory`, the closed set of structural roles
//! - **`prefix`**: `match_prefix` for literal prefix markers
//! - **`line`**: `WorkingLine`, a line plus its unconsumed remainder
//! - **`chain`**: `ClassificationChain`, the ordered rule list with the
//!   paragraph fallback
//!
//! ## Key Invariants
//!
//! - Each line resolves to exactly one category
//! - Paragraph is never the target of a prefix rule
//! - No rule in a chain is shadowed by an earlier one

pub mod category;
pub mod chain;
pub mod line;
pub mod prefix;

pub use category::LineCategory;
pub use chain::{ChainError, ClassificationChain, ClassificationRule};
pub use line::WorkingLine;
pub use prefix::{PrefixMatch, match_prefix};
