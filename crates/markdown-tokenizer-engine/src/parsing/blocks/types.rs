use crate::parsing::token::Token;

/// A matcher's claim on one or more lines.
///
/// Declining is expressed as `None` at the call site, so a `BlockMatch`
/// always covers at least one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockMatch {
    /// Tokens produced for the claimed lines, in document order.
    pub tokens: Vec<Token>,
    /// Number of lines claimed, starting at the matcher's start index.
    pub consumed: usize,
}

impl BlockMatch {
    pub fn single(token: Token, consumed: usize) -> Self {
        Self {
            tokens: vec![token],
            consumed,
        }
    }
}
