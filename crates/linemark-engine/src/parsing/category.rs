/// The structural role of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineCategory {
    /// `# ` heading.
    Heading1,
    /// `## ` heading.
    Heading2,
    /// `### ` heading.
    Heading3,
    /// `---` rule.
    HorizontalRule,
    /// Any line no prefix rule claims.
    Paragraph,
}

impl LineCategory {
    pub const ALL: [LineCategory; 5] = [
        LineCategory::Heading1,
        LineCategory::Heading2,
        LineCategory::Heading3,
        LineCategory::HorizontalRule,
        LineCategory::Paragraph,
    ];
}
