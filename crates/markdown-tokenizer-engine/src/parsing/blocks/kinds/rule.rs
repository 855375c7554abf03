use crate::parsing::{
    blocks::types::BlockMatch,
    token::{Token, TokenKind},
};

/// Horizontal rule: a line that is exactly one of [`HorizontalRule::MARKERS`].
pub struct HorizontalRule;

impl HorizontalRule {
    pub const MARKERS: [&'static str; 2] = ["---", "==="];

    /// No whitespace is tolerated around the marker.
    pub fn try_match(lines: &[&str], index: usize) -> Option<BlockMatch> {
        let line = lines.get(index)?;
        Self::MARKERS
            .contains(line)
            .then(|| BlockMatch::single(Token::new(TokenKind::Hr, ""), 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn dashes_and_equals() {
        for line in ["---", "==="] {
            let m = HorizontalRule::try_match(&[line], 0).unwrap();
            assert_eq!(m.consumed, 1);
            assert_eq!(m.tokens, vec![Token::new(TokenKind::Hr, "")]);
        }
    }

    #[test]
    fn surrounding_whitespace_declines() {
        assert_eq!(HorizontalRule::try_match(&[" ---"], 0), None);
        assert_eq!(HorizontalRule::try_match(&["--- "], 0), None);
        assert_eq!(HorizontalRule::try_match(&["----"], 0), None);
    }

    #[test]
    fn out_of_range_declines() {
        assert_eq!(HorizontalRule::try_match(&[], 0), None);
    }
}
