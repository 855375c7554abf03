use crate::parsing::{
    span::Span,
    token::{Token, TokenKind, attr},
};

use super::kinds::DelimClass;

/// What a scanned span is, before it becomes a [`Token`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// Plain text that isn't part of any special construct.
    Text,
    /// A bold or italic opener.
    Open(DelimClass),
    /// A bold or italic closer.
    Close(DelimClass),
    /// `[text](url)`.
    Link { text: Span, url: Span },
    /// `![alt](src)`.
    Image { alt: Span, src: Span },
}

/// A scanned inline span with the full byte range it covers in the line,
/// delimiters included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawSpan {
    pub kind: SpanKind,
    pub full: Span,
}

impl RawSpan {
    pub fn into_token(self, line: &str) -> Token {
        match self.kind {
            SpanKind::Text => Token::new(TokenKind::Text, self.full.text(line)),
            SpanKind::Open(class) => Token::new(class.open_kind(), ""),
            SpanKind::Close(class) => Token::new(class.close_kind(), ""),
            SpanKind::Link { text, url } => {
                Token::new(TokenKind::Link, text.text(line)).with_attr(attr::URL, url.text(line))
            }
            SpanKind::Image { alt, src } => Token::new(TokenKind::Image, "")
                .with_attr(attr::ALT, alt.text(line))
                .with_attr(attr::SRC, src.text(line)),
        }
    }
}
