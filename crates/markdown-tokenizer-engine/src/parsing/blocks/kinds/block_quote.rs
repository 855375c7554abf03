use crate::parsing::{
    blocks::types::BlockMatch,
    lines::is_blank_line,
    token::{Token, TokenKind},
};

/// Blockquote lines. Each quoted line becomes its own flat `Blockquote`
/// token; there is no container and no nesting.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, expected after any leading spaces.
    pub const PREFIX: &'static str = "> ";

    /// Returns the quoted text if `line` carries the prefix.
    pub fn strip_prefix(line: &str) -> Option<&str> {
        line.trim_start_matches(' ').strip_prefix(Self::PREFIX)
    }

    /// Claims consecutive quoted lines, stopping at the first blank or
    /// unprefixed line.
    pub fn try_match(lines: &[&str], index: usize) -> Option<BlockMatch> {
        let tokens: Vec<Token> = lines
            .get(index..)?
            .iter()
            .take_while(|line| !is_blank_line(line))
            .map_while(|line| Self::strip_prefix(line))
            .map(|text| Token::new(TokenKind::Blockquote, text))
            .collect();

        if tokens.is_empty() {
            return None;
        }
        let consumed = tokens.len();
        Some(BlockMatch { tokens, consumed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(m: &BlockMatch) -> Vec<&str> {
        m.tokens.iter().map(Token::value).collect()
    }

    #[test]
    fn strip_prefix_forms() {
        assert_eq!(BlockQuote::strip_prefix("> hello"), Some("hello"));
        assert_eq!(BlockQuote::strip_prefix("   > hello"), Some("hello"));
        assert_eq!(BlockQuote::strip_prefix(">hello"), None);
        assert_eq!(BlockQuote::strip_prefix(">"), None);
        assert_eq!(BlockQuote::strip_prefix("hello"), None);
    }

    #[test]
    fn single_line() {
        let m = BlockQuote::try_match(&["> Hello world"], 0).unwrap();
        assert_eq!(m.consumed, 1);
        assert_eq!(m.tokens[0].kind(), TokenKind::Blockquote);
        assert_eq!(values(&m), vec!["Hello world"]);
    }

    #[test]
    fn consecutive_lines_are_siblings() {
        let lines = ["> Hello world", "> Something else", "after"];
        let m = BlockQuote::try_match(&lines, 0).unwrap();
        assert_eq!(m.consumed, 2);
        assert_eq!(values(&m), vec!["Hello world", "Something else"]);
    }

    #[test]
    fn stops_at_blank_line() {
        let lines = ["> a", "", "> b"];
        let m = BlockQuote::try_match(&lines, 0).unwrap();
        assert_eq!(m.consumed, 1);
    }

    #[test]
    fn declines_unquoted_line() {
        assert_eq!(BlockQuote::try_match(&["plain"], 0), None);
        assert_eq!(BlockQuote::try_match(&["> a"], 3), None);
    }
}
