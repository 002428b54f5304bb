//! Whitespace-free view of an input expression.
//!
//! The evaluator works on the input with every whitespace character removed.
//! Error messages report positions in that normalized buffer, while rendered
//! diagnostics point into the text the user actually typed. `NormalizedSource`
//! keeps both views and the mapping between them.

use core::ops::Range;

/// A byte range into the original (un-normalized) input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span(pub Range<usize>);

impl Span {
    pub fn start(&self) -> usize {
        self.0.start
    }

    pub fn end(&self) -> usize {
        self.0.end
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span(range)
    }
}

/// Input text with whitespace stripped, plus the offset map back to the original.
#[derive(Debug, Clone)]
pub struct NormalizedSource {
    text: String,
    /// Original byte offset of each byte in `text`.
    offsets: Vec<usize>,
    original_len: usize,
}

impl NormalizedSource {
    pub fn new(original: &str) -> Self {
        let mut text = String::with_capacity(original.len());
        let mut offsets = Vec::with_capacity(original.len());

        for (index, c) in original.char_indices() {
            if c.is_whitespace() {
                continue;
            }
            text.push(c);
            offsets.extend(index..index + c.len_utf8());
        }

        Self {
            text,
            offsets,
            original_len: original.len(),
        }
    }

    /// The normalized buffer.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Character starting at byte `pos` of the normalized buffer.
    pub fn char_at(&self, pos: usize) -> Option<char> {
        self.text.get(pos..).and_then(|rest| rest.chars().next())
    }

    /// Byte offset in the original text for a normalized position.
    ///
    /// Positions at or past the end map to the end of the original text.
    pub fn original_offset(&self, pos: usize) -> usize {
        self.offsets.get(pos).copied().unwrap_or(self.original_len)
    }

    /// Whether the byte at `pos` directly follows the byte before it in the
    /// original text, with no whitespace removed in between.
    pub fn is_adjacent(&self, pos: usize) -> bool {
        pos > 0 && self.original_offset(pos) == self.original_offset(pos - 1) + 1
    }

    /// Span in the original text covering the character at `pos`.
    ///
    /// At the end of input the span is empty and sits at the end of the original text.
    pub fn span_at(&self, pos: usize) -> Span {
        let start = self.original_offset(pos);
        let width = self.char_at(pos).map_or(0, char::len_utf8);
        Span(start..start + width)
    }

    /// Span in the original text covering normalized bytes `start..end`.
    pub fn span_between(&self, start: usize, end: usize) -> Span {
        if end <= start {
            return self.span_at(start);
        }
        let from = self.original_offset(start);
        let to = self.original_offset(end - 1) + 1;
        Span(from..to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_strips_all_whitespace() {
        let source = NormalizedSource::new(" 2 +\t3\n* 4 ");
        assert_eq!(source.as_str(), "2+3*4");
    }

    #[test]
    fn test_whitespace_only_is_empty() {
        assert!(NormalizedSource::new("  \t\r\n ").is_empty());
        assert!(NormalizedSource::new("").is_empty());
    }

    #[test]
    fn test_offsets_point_into_original() {
        let source = NormalizedSource::new("1 +  x");
        // Normalized "1+x": 'x' is at normalized 2, original 5.
        assert_eq!(source.original_offset(2), 5);
        assert_eq!(source.span_at(2), Span(5..6));
        // End of input maps to the end of the original text.
        assert_eq!(source.span_at(3), Span(6..6));
    }

    #[test]
    fn test_adjacency() {
        let source = NormalizedSource::new("12 3");
        assert!(source.is_adjacent(1));
        assert!(!source.is_adjacent(2));
        assert!(!source.is_adjacent(0));
    }

    #[test]
    fn test_span_between_covers_gaps() {
        let source = NormalizedSource::new("1 2.5");
        // Normalized "12.5": bytes 1..4 are "2.5", original 2..5.
        assert_eq!(source.span_between(1, 4), Span(2..5));
    }

    #[test]
    fn test_multibyte_characters() {
        let source = NormalizedSource::new("1 + é");
        assert_eq!(source.as_str(), "1+é");
        assert_eq!(source.char_at(2), Some('é'));
        assert_eq!(source.span_at(2), Span(4..6));
    }
}
