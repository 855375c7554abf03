use serde::{Deserialize, Serialize};

/// What happens to a bold/italic opener that never finds its closer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnmatchedDelimiters {
    /// Parity rule applied as-is: the opener stays in the span sequence.
    #[default]
    KeepOpen,
    /// The opener is turned back into literal text and merged with its
    /// neighbouring text spans.
    Literal,
}

/// Knobs for a tokenizer pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenizerOptions {
    pub unmatched_delimiters: UnmatchedDelimiters,
}

impl TokenizerOptions {
    pub fn with_unmatched_delimiters(mut self, policy: UnmatchedDelimiters) -> Self {
        self.unmatched_delimiters = policy;
        self
    }
}
