use std::collections::HashMap;

use crate::parsing::LineCategory;

/// Element name used for any category missing from a catalog.
pub const FALLBACK_ELEMENT: &str = "p";

/// Maps each [`LineCategory`] to the HTML element that wraps it.
///
/// Lookups for an unregistered category fall back to `p`, so a catalog
/// never produces an empty or malformed tag.
#[derive(Debug, Clone)]
pub struct TagCatalog {
    elements: HashMap<LineCategory, &'static str>,
}

impl TagCatalog {
    /// Builds a catalog from explicit entries. Categories left out use the fallback.
    pub fn from_entries(entries: impl IntoIterator<Item = (LineCategory, &'static str)>) -> Self {
        Self {
            elements: entries.into_iter().collect(),
        }
    }

    /// The standard catalog: h1, h2, h3, hr and p.
    pub fn html() -> Self {
        Self::from_entries([
            (LineCategory::Heading1, "h1"),
            (LineCategory::Heading2, "h2"),
            (LineCategory::Heading3, "h3"),
            (LineCategory::HorizontalRule, "hr"),
            (LineCategory::Paragraph, "p"),
        ])
    }

    pub fn element(&self, category: LineCategory) -> &'static str {
        self.elements
            .get(&category)
            .copied()
            .unwrap_or(FALLBACK_ELEMENT)
    }

    pub fn opening_tag(&self, category: LineCategory) -> String {
        format!("<{}>", self.element(category))
    }

    pub fn closing_tag(&self, category: LineCategory) -> String {
        format!("</{}>", self.element(category))
    }
}

impl Default for TagCatalog {
    fn default() -> Self {
        Self::html()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(LineCategory::Heading1, "<h1>", "</h1>")]
    #[case(LineCategory::Heading2, "<h2>", "</h2>")]
    #[case(LineCategory::Heading3, "<h3>", "</h3>")]
    #[case(LineCategory::HorizontalRule, "<hr>", "</hr>")]
    #[case(LineCategory::Paragraph, "<p>", "</p>")]
    fn standard_tags(#[case] category: LineCategory, #[case] open: &str, #[case] close: &str) {
        let catalog = TagCatalog::html();
        assert_eq!(catalog.opening_tag(category), open);
        assert_eq!(catalog.closing_tag(category), close);
    }

    #[test]
    fn missing_category_falls_back_to_paragraph() {
        let catalog = TagCatalog::from_entries([(LineCategory::Heading1, "h1")]);

        assert_eq!(catalog.opening_tag(LineCategory::Heading2), "<p>");
        assert_eq!(catalog.closing_tag(LineCategory::HorizontalRule), "</p>");
        assert_eq!(catalog.opening_tag(LineCategory::Heading1), "<h1>");
    }

    #[test]
    fn every_category_has_a_non_empty_element() {
        let empty = TagCatalog::from_entries(Vec::<(LineCategory, &'static str)>::new());
        for category in LineCategory::ALL {
            assert!(!TagCatalog::html().element(category).is_empty());
            assert_eq!(empty.element(category), FALLBACK_ELEMENT);
        }
    }
}
