use crate::parsing::{
    lines::{is_blank_line, split_lines},
    options::TokenizerOptions,
    token::Token,
};

use super::matcher::BlockMatcher;

/// One step of the dispatcher: the lines claimed at a cursor position and
/// what they produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Index of the first claimed line.
    pub start: usize,
    /// Number of lines claimed (always at least 1).
    pub consumed: usize,
    /// The matcher that claimed the lines; `None` for a skipped blank line.
    pub matcher: Option<BlockMatcher>,
    /// Tokens produced, empty for a blank line.
    pub tokens: Vec<Token>,
}

/// Line-oriented block tokenizer.
///
/// Owns the line array and a cursor. Each call to `next` offers the line at
/// the cursor to the matchers in [`BlockMatcher::PRIORITY`] order and
/// advances by the number of lines the winner claims.
pub struct BlockTokenizer<'a> {
    lines: Vec<&'a str>,
    cursor: usize,
    options: TokenizerOptions,
}

impl<'a> BlockTokenizer<'a> {
    pub fn new(content: &'a str, options: TokenizerOptions) -> Self {
        Self {
            lines: split_lines(content),
            cursor: 0,
            options,
        }
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Runs the dispatcher to completion and returns the top-level tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.flat_map(|segment| segment.tokens).collect()
    }
}

impl Iterator for BlockTokenizer<'_> {
    type Item = Segment;

    fn next(&mut self) -> Option<Segment> {
        let start = self.cursor;
        let line = self.lines.get(start)?;

        if is_blank_line(line) {
            self.cursor += 1;
            log::trace!("line {start}: blank, skipped");
            return Some(Segment {
                start,
                consumed: 1,
                matcher: None,
                tokens: vec![],
            });
        }

        let Some((matcher, claim)) = BlockMatcher::first_match(&self.lines, start, &self.options)
        else {
            // Unreachable while Paragraph accepts every non-blank line.
            log::warn!("line {start}: no matcher claimed a non-blank line");
            self.cursor += 1;
            return Some(Segment {
                start,
                consumed: 1,
                matcher: None,
                tokens: vec![],
            });
        };

        let consumed = claim.consumed.max(1);
        self.cursor += consumed;
        log::debug!(
            "lines {start}..{}: {} produced {} token(s)",
            start + consumed,
            matcher.name(),
            claim.tokens.len()
        );

        Some(Segment {
            start,
            consumed,
            matcher: Some(matcher),
            tokens: claim.tokens,
        })
    }
}
