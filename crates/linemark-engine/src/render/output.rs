/// Append-only buffer collecting rendered fragments in input order.
///
/// Owned by a single conversion. The text is only handed out by
/// [`HtmlOutput::finish`], once every line has been rendered.
#[derive(Debug, Default)]
pub struct HtmlOutput {
    html: String,
}

impl HtmlOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            html: String::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, fragment: &str) {
        self.html.push_str(fragment);
    }

    pub(crate) fn len(&self) -> usize {
        self.html.len()
    }

    /// Consumes the buffer and returns the accumulated HTML.
    pub fn finish(self) -> String {
        self.html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let out = HtmlOutput::new();
        assert_eq!(out.len(), 0);
        assert_eq!(out.finish(), "");
    }

    #[test]
    fn keeps_fragments_in_push_order() {
        let mut out = HtmlOutput::with_capacity(16);
        out.push("<p>");
        out.push("a");
        out.push("</p>");
        assert_eq!(out.len(), 8);
        assert_eq!(out.finish(), "<p>a</p>");
    }
}
