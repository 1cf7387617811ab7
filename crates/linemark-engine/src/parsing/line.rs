use super::prefix::match_prefix;

/// A single input line and the part of it not yet consumed by a prefix rule.
///
/// Created fresh for every line so nothing leaks between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkingLine<'a> {
    original: &'a str,
    remainder: &'a str,
}

impl<'a> WorkingLine<'a> {
    pub fn new(line: &'a str) -> Self {
        Self {
            original: line,
            remainder: line,
        }
    }

    /// Strips `prefix` from the front of the remainder if it is there.
    ///
    /// Returns whether the prefix matched. On a miss the remainder is left
    /// as it was.
    pub fn strip(&mut self, prefix: &str) -> bool {
        let m = match_prefix(self.remainder, prefix);
        self.remainder = m.remainder;
        m.matched
    }

    pub fn original(&self) -> &'a str {
        self.original
    }

    pub fn remainder(&self) -> &'a str {
        self.remainder
    }
}
