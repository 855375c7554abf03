/// A byte range `[start, end)` into a single line.
///
/// The inline scanner records spans rather than copied text; every byte of the
/// line falls in exactly one span, so the sequence tiles the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Slices `s` with this span, returning `""` when out of bounds.
    pub fn text(self, s: &str) -> &str {
        s.get(self.start..self.end).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_slices_or_defaults() {
        assert_eq!(Span::new(6, 11).text("hello world"), "world");
        assert_eq!(Span::new(6, 50).text("hello"), "");
    }
}
