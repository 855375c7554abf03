use crate::parsing::{
    blocks::types::BlockMatch,
    inline::parse_spans,
    lines::is_blank_line,
    options::TokenizerOptions,
    token::{Token, TokenKind},
};

/// Paragraph: the fallback for any non-blank line no other matcher claims.
///
/// The value is the line text; the children are its inline spans.
pub struct Paragraph;

impl Paragraph {
    pub fn token(text: &str, options: &TokenizerOptions) -> Token {
        Token::new(TokenKind::Paragraph, text)
            .with_children(parse_spans(text, options.unmatched_delimiters))
    }

    pub fn try_match(
        lines: &[&str],
        index: usize,
        options: &TokenizerOptions,
    ) -> Option<BlockMatch> {
        let line = lines.get(index)?;
        if is_blank_line(line) {
            return None;
        }
        Some(BlockMatch::single(Self::token(line, options), 1))
    }
}
