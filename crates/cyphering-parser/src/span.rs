//! Byte ranges into the model source.

use std::ops::Range;

/// A byte range into the YAML source a diagnostic points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range.
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Create a span covering the character at `offset`, clamped to `source`.
    ///
    /// Offsets past the end of the source collapse to an empty span at the end.
    pub fn at(offset: usize, source: &str) -> Self {
        let mut start = offset.min(source.len());
        while !source.is_char_boundary(start) {
            start -= 1;
        }
        let end = source[start..]
            .chars()
            .next()
            .map_or(start, |c| start + c.len_utf8());
        Self::new(start..end)
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(3..7);
        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 7);
        assert_eq!(span.len(), 4);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_at_covers_one_char() {
        let span = Span::at(1, "aéb");
        assert_eq!(span.start(), 1);
        assert_eq!(span.end(), 3);
    }

    #[test]
    fn test_span_at_clamps_to_source() {
        let span = Span::at(42, "abc");
        assert_eq!(span.start(), 3);
        assert!(span.is_empty());
    }
}
