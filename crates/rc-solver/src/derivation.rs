//! Step-by-step derivation text produced by a solve.

use std::fmt;

/// Ordered display lines explaining one solve.
///
/// Built up during a single solve call and handed back inside the
/// [`Solution`](crate::Solution); callers only ever see it through `&`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Derivation {
    lines: Vec<String>,
}

impl Derivation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    /// Append an empty separator line.
    pub fn blank(&mut self) -> &mut Self {
        self.append(String::new())
    }

    /// Title followed by an underline of matching width.
    pub fn heading(&mut self, title: &str) -> &mut Self {
        let width = title.chars().count();
        self.append(title).append("-".repeat(width))
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl fmt::Display for Derivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_keep_append_order() {
        let mut d = Derivation::new();
        d.heading("Title").append("a").blank().append("b");
        assert_eq!(d.lines(), ["Title", "-----", "a", "", "b"]);
        assert_eq!(d.len(), 5);
        assert_eq!(d.to_string(), "Title\n-----\na\n\nb\n");
    }

    #[test]
    fn heading_counts_chars_not_bytes() {
        let mut d = Derivation::new();
        d.heading("x₀");
        assert_eq!(d.lines()[1], "--");
    }
}
