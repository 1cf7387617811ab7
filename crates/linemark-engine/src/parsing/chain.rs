use log::trace;

use super::category::LineCategory;
use super::line::WorkingLine;
use crate::render::{HtmlOutput, TagCatalog, render_line};

/// A literal prefix marker and the category it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationRule {
    pub prefix: &'static str,
    pub category: LineCategory,
}

impl ClassificationRule {
    pub const fn new(prefix: &'static str, category: LineCategory) -> Self {
        Self { prefix, category }
    }
}

/// The standard rules, in evaluation order. Paragraph is the implicit
/// fallback and has no entry.
pub const MARKDOWN_RULES: [ClassificationRule; 4] = [
    ClassificationRule::new("# ", LineCategory::Heading1),
    ClassificationRule::new("## ", LineCategory::Heading2),
    ClassificationRule::new("### ", LineCategory::Heading3),
    ClassificationRule::new("---", LineCategory::HorizontalRule),
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChainError {
    #[error("rule for {category:?} has an empty prefix")]
    EmptyPrefix { category: LineCategory },
    #[error("paragraph is the fallback and cannot be selected by prefix {prefix:?}")]
    ParagraphRule { prefix: &'static str },
    #[error("rule {later:?} can never match: earlier rule {earlier:?} claims every line it would")]
    Shadowed {
        earlier: &'static str,
        later: &'static str,
    },
}

/// Ordered, immutable list of prefix rules with a terminal paragraph fallback.
///
/// Rules are tried in order and the first match wins. A line no rule claims
/// is a paragraph and keeps its full text.
#[derive(Debug, Clone)]
pub struct ClassificationChain {
    rules: Vec<ClassificationRule>,
}

impl ClassificationChain {
    /// Builds a chain from `rules`, rejecting lists where a rule could never fire.
    pub fn new(rules: Vec<ClassificationRule>) -> Result<Self, ChainError> {
        for (i, rule) in rules.iter().enumerate() {
            if rule.prefix.is_empty() {
                return Err(ChainError::EmptyPrefix {
                    category: rule.category,
                });
            }
            if rule.category == LineCategory::Paragraph {
                return Err(ChainError::ParagraphRule {
                    prefix: rule.prefix,
                });
            }
            if let Some(earlier) = rules[..i]
                .iter()
                .find(|earlier| rule.prefix.starts_with(earlier.prefix))
            {
                return Err(ChainError::Shadowed {
                    earlier: earlier.prefix,
                    later: rule.prefix,
                });
            }
        }

        Ok(Self { rules })
    }

    /// The heading and horizontal rule chain used by [`crate::convert`].
    pub fn markdown() -> Self {
        Self {
            rules: MARKDOWN_RULES.to_vec(),
        }
    }

    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Classifies `line`, stripping the matching rule's prefix from its remainder.
    pub fn classify(&self, line: &mut WorkingLine<'_>) -> LineCategory {
        self.rules
            .iter()
            .find(|rule| line.strip(rule.prefix))
            .map_or(LineCategory::Paragraph, |rule| rule.category)
    }

    /// Classifies one input line and renders it into `out`.
    pub fn process_line(&self, text: &str, catalog: &TagCatalog, out: &mut HtmlOutput) {
        let mut line = WorkingLine::new(text);
        let category = self.classify(&mut line);
        trace!("{category:?}: {:?}", line.original());
        render_line(catalog, category, line.remainder(), out);
    }
}
