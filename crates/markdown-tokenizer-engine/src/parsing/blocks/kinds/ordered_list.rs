use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::types::BlockMatch,
    token::{Token, TokenKind, attr},
};

/// Ordered list: `<digits>. <text>` lines. Items are flat; the numerals in
/// the source are ignored and each item gets a sequential `id` from 1.
pub struct OrderedList;

impl OrderedList {
    /// Returns the item text if `line` is an ordered-list item.
    pub fn item_text(line: &str) -> Option<&str> {
        static MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
        let marker = MARKER_REGEX
            .get_or_init(|| Regex::new(r"^ *[0-9]+\. (.*)$").expect("Invalid list marker regex"));
        marker
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Claims consecutive item lines, stopping at the first line (blank or
    /// not) without an item marker.
    pub fn try_match(lines: &[&str], index: usize) -> Option<BlockMatch> {
        let mut list = Token::new(TokenKind::OrderedList, "");
        let mut consumed = 0;

        for text in lines.get(index..)?.iter().map_while(|line| Self::item_text(line)) {
            consumed += 1;
            list.push_child(
                Token::new(TokenKind::OrderedListItem, text).with_attr(attr::ID, consumed as u64),
            );
        }

        (consumed > 0).then(|| BlockMatch::single(list, consumed))
    }
}
