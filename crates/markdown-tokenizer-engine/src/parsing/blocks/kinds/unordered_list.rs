use crate::parsing::{
    blocks::{list_tree::ListTree, types::BlockMatch},
    lines::{indent_depth, is_blank_line, leading_space_count},
    options::TokenizerOptions,
    token::{Token, TokenKind},
};

use super::{code_fence::CodeFence, paragraph::Paragraph};

/// Unordered list with one level of nested items, plus fenced code blocks
/// and prose lines attached to items.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKERS: [&'static str; 3] = ["- ", "+ ", "* "];

    /// Returns the item text if `line` starts with a marker after any
    /// leading spaces.
    pub fn item_text(line: &str) -> Option<&str> {
        let content = line.trim_start_matches(' ');
        Self::MARKERS
            .iter()
            .find_map(|marker| content.strip_prefix(marker))
    }

    /// Opens on a marker line and claims lines until a blank line or a
    /// zero-indent line without a marker.
    ///
    /// Per line, in order: an indented fenced code block is embedded whole;
    /// a marker line appends an item; any other indented line appends a
    /// paragraph. Indentation depth picks the parent item.
    pub fn try_match(
        lines: &[&str],
        index: usize,
        options: &TokenizerOptions,
    ) -> Option<BlockMatch> {
        Self::item_text(lines.get(index)?)?;

        let mut tree = ListTree::new(Token::new(TokenKind::UnorderedList, ""));
        let mut i = index;

        while let Some(line) = lines.get(i) {
            if is_blank_line(line) {
                break;
            }
            let spaces = leading_space_count(line);
            let item = Self::item_text(line);
            if spaces == 0 && item.is_none() {
                break;
            }
            let depth = indent_depth(line);

            if let Some((code, consumed)) = CodeFence::parse(lines, i, spaces) {
                tree.push_content(depth, code);
                i += consumed;
                continue;
            }

            match item {
                Some(text) => {
                    tree.push_item(depth, Token::new(TokenKind::UnorderedListItem, text));
                }
                None => {
                    tree.push_content(depth, Paragraph::token(&line[spaces..], options));
                }
            }
            i += 1;
        }

        Some(BlockMatch::single(tree.into_token(), i - index))
    }
}
