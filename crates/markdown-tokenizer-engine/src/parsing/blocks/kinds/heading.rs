use crate::parsing::{
    blocks::types::BlockMatch,
    inline::parse_spans,
    options::TokenizerOptions,
    token::{HeadingLevel, Token, TokenKind},
};

/// ATX heading: one to six `#` at column 0, then a space, then the text.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';

    /// Produces a heading whose value is the text after the marker run and
    /// whose children are that text's inline spans.
    pub fn try_match(
        lines: &[&str],
        index: usize,
        options: &TokenizerOptions,
    ) -> Option<BlockMatch> {
        let line = lines.get(index)?;
        let count = line.bytes().take_while(|&b| b == Self::MARKER).count();
        let level = HeadingLevel::from_marker_count(count)?;
        let text = line[count..].strip_prefix(' ')?;

        let token = Token::new(TokenKind::Heading(level), text)
            .with_children(parse_spans(text, options.unmatched_delimiters));
        Some(BlockMatch::single(token, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn heading(line: &str) -> Option<BlockMatch> {
        Heading::try_match(&[line], 0, &TokenizerOptions::default())
    }

    #[rstest]
    #[case("# Hello world", HeadingLevel::H1)]
    #[case("## Hello world", HeadingLevel::H2)]
    #[case("### Hello world", HeadingLevel::H3)]
    #[case("#### Hello world", HeadingLevel::H4)]
    #[case("##### Hello world", HeadingLevel::H5)]
    #[case("###### Hello world", HeadingLevel::H6)]
    fn levels(#[case] line: &str, #[case] level: HeadingLevel) {
        let m = heading(line).unwrap();
        assert_eq!(m.consumed, 1);
        assert_eq!(m.tokens.len(), 1);
        assert_eq!(m.tokens[0].kind(), TokenKind::Heading(level));
        assert_eq!(m.tokens[0].value(), "Hello world");
    }

    #[rstest]
    #[case("####### Hello world")]
    #[case("###Hello world")]
    #[case("#")]
    #[case(" # indented")]
    #[case("text # not a heading")]
    fn declines(#[case] line: &str) {
        assert_eq!(heading(line), None);
    }

    #[test]
    fn children_are_inline_spans() {
        let m = heading("# Hello **world**").unwrap();
        let kinds: Vec<_> = m.tokens[0].children().iter().map(Token::kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Text,
                TokenKind::Bold,
                TokenKind::Text,
                TokenKind::EndBold
            ]
        );
    }

    #[test]
    fn empty_heading_text() {
        let m = heading("# ").unwrap();
        assert_eq!(m.tokens[0].value(), "");
        assert!(m.tokens[0].children().is_empty());
    }
}
