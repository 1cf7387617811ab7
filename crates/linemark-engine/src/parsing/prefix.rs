/// Result of testing a line against a literal prefix marker.
///
/// `remainder` is always usable: the stripped text on a match, the
/// untouched line otherwise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixMatch<'a> {
    pub matched: bool,
    pub remainder: &'a str,
}

/// Tests whether `line` starts with exactly `prefix`.
///
/// Matching is case-sensitive and does no trimming. An empty line never
/// matches. Only the leading occurrence of the prefix is removed.
pub fn match_prefix<'a>(line: &'a str, prefix: &str) -> PrefixMatch<'a> {
    if line.is_empty() {
        return PrefixMatch {
            matched: false,
            remainder: line,
        };
    }

    match line.strip_prefix(prefix) {
        Some(rest) => PrefixMatch {
            matched: true,
            remainder: rest,
        },
        None => PrefixMatch {
            matched: false,
            remainder: line,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("# Title", "# ", true, "Title")]
    #[case("## Title", "## ", true, "Title")]
    #[case("# # nested", "# ", true, "# nested")]
    #[case("------", "---", true, "---")]
    #[case("---", "---", true, "")]
    #[case("#Title", "# ", false, "#Title")]
    #[case(" # Title", "# ", false, " # Title")]
    #[case("## Title", "# ", false, "## Title")]
    #[case("H", "h", false, "H")]
    fn matches_literal_prefix(
        #[case] line: &str,
        #[case] prefix: &str,
        #[case] matched: bool,
        #[case] remainder: &str,
    ) {
        let m = match_prefix(line, prefix);
        assert_eq!(m.matched, matched);
        assert_eq!(m.remainder, remainder);
    }

    #[test]
    fn empty_line_never_matches() {
        let m = match_prefix("", "");
        assert!(!m.matched);
        assert_eq!(m.remainder, "");

        assert!(!match_prefix("", "# ").matched);
    }

    #[test]
    fn trailing_whitespace_survives_stripping() {
        let m = match_prefix("#   spaced  ", "# ");
        assert!(m.matched);
        assert_eq!(m.remainder, "  spaced  ");
    }
}
