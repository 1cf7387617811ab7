//! HTML rendering for classified lines.
//!
//! A single [`render_line`] handles every category; the only per-category
//! data is the element name held by [`TagCatalog`].

pub mod output;
pub mod tags;

pub use output::HtmlOutput;
pub use tags::TagCatalog;

use crate::parsing::LineCategory;

/// Appends `<elem>`, `text` verbatim, then `</elem>` to `out`.
///
/// `text` is neither escaped nor trimmed. Horizontal rules get the same
/// open/content/close triple as every other category.
pub fn render_line(
    catalog: &TagCatalog,
    category: LineCategory,
    text: &str,
    out: &mut HtmlOutput,
) {
    out.push(&catalog.opening_tag(category));
    out.push(text);
    out.push(&catalog.closing_tag(category));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn render(category: LineCategory, text: &str) -> String {
        let mut out = HtmlOutput::new();
        render_line(&TagCatalog::html(), category, text, &mut out);
        out.finish()
    }

    #[rstest]
    #[case(LineCategory::Heading1, "Hello", "<h1>Hello</h1>")]
    #[case(LineCategory::Heading2, "Sub", "<h2>Sub</h2>")]
    #[case(LineCategory::Heading3, "Deep", "<h3>Deep</h3>")]
    #[case(LineCategory::HorizontalRule, "", "<hr></hr>")]
    #[case(LineCategory::HorizontalRule, "--", "<hr>--</hr>")]
    #[case(LineCategory::Paragraph, "Just text", "<p>Just text</p>")]
    fn renders_tag_triple(#[case] category: LineCategory, #[case] text: &str, #[case] html: &str) {
        assert_eq!(render(category, text), html);
    }

    #[test]
    fn content_is_not_escaped_or_trimmed() {
        assert_eq!(
            render(LineCategory::Paragraph, "  <b>&amp</b>  "),
            "<p>  <b>&amp</b>  </p>"
        );
    }

    #[test]
    fn rendering_twice_appends_twice() {
        let catalog = TagCatalog::html();
        let mut out = HtmlOutput::new();
        render_line(&catalog, LineCategory::Heading1, "A", &mut out);
        render_line(&catalog, LineCategory::Heading1, "A", &mut out);
        assert_eq!(out.finish(), "<h1>A</h1><h1>A</h1>");
    }
}
