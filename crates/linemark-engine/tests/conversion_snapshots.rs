use linemark_engine::convert;

#[test]
fn fixture_release_notes() {
    insta::assert_snapshot!(
        convert(&fixture("release_notes")),
        @"<h1>Release notes</h1><p></p><h2>Fixes</h2><h3>Parser</h3><p>Headings need a space after the marker.</p><p>##NoSpace stays a paragraph</p><hr></hr><hr> trailing</hr><p></p>"
    );
}

#[test]
fn fixture_edge_cases() {
    insta::assert_snapshot!(
        convert(&fixture("edge_cases")),
        @"<p>#</p><h1></h1><p>#### four</p><p> - not a rule</p><p>    </p><h1><em>raw</em> & unescaped</h1>"
    );
}

/// A heading two prefix must win over the shorter heading one marker
#[test]
fn heading_two_is_not_read_as_heading_one() {
    insta::assert_snapshot!(convert("## Title"), @"<h2>Title</h2>");
}

#[test]
fn mixed_document_keeps_line_order() {
    insta::assert_snapshot!(
        convert("# A\nPlain\n## B"),
        @"<h1>A</h1><p>Plain</p><h2>B</h2>"
    );
}

fn fixture(name: &str) -> String {
    std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap()
}
