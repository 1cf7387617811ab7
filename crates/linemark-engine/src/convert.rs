use log::debug;

use crate::parsing::ClassificationChain;
use crate::render::{HtmlOutput, TagCatalog};

/// Converts a document into an HTML fragment, one element per line.
///
/// The input is split on `\n` with empty lines kept, so `""` yields
/// `<p></p>` and a trailing newline yields a trailing empty paragraph.
/// Conversion cannot fail.
pub fn convert(markdown: &str) -> String {
    let chain = ClassificationChain::markdown();
    let catalog = TagCatalog::html();
    let mut out = HtmlOutput::with_capacity(markdown.len() * 2);

    let mut line_count = 0usize;
    for line in markdown.split('\n') {
        chain.process_line(line, &catalog, &mut out);
        line_count += 1;
    }

    debug!("converted {line_count} lines into {} bytes of html", out.len());
    out.finish()
}
