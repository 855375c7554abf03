use crate::parsing::options::TokenizerOptions;

use super::{
    kinds::{BlockQuote, CodeFence, Heading, HorizontalRule, OrderedList, Paragraph, UnorderedList},
    types::BlockMatch,
};

/// The block matchers, one per construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockMatcher {
    HorizontalRule,
    Heading,
    CodeFence,
    BlockQuote,
    UnorderedList,
    OrderedList,
    Paragraph,
}

impl BlockMatcher {
    /// Matchers in the order they are offered a line. The first to claim it
    /// wins; `Paragraph` accepts any non-blank line.
    pub const PRIORITY: [BlockMatcher; 7] = [
        BlockMatcher::HorizontalRule,
        BlockMatcher::Heading,
        BlockMatcher::CodeFence,
        BlockMatcher::BlockQuote,
        BlockMatcher::UnorderedList,
        BlockMatcher::OrderedList,
        BlockMatcher::Paragraph,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BlockMatcher::HorizontalRule => "horizontal-rule",
            BlockMatcher::Heading => "heading",
            BlockMatcher::CodeFence => "code-fence",
            BlockMatcher::BlockQuote => "blockquote",
            BlockMatcher::UnorderedList => "unordered-list",
            BlockMatcher::OrderedList => "ordered-list",
            BlockMatcher::Paragraph => "paragraph",
        }
    }

    /// Offers `lines[index..]` to this matcher. `None` means declined: no
    /// lines consumed, no tokens produced.
    pub fn try_match(
        self,
        lines: &[&str],
        index: usize,
        options: &TokenizerOptions,
    ) -> Option<BlockMatch> {
        match self {
            BlockMatcher::HorizontalRule => HorizontalRule::try_match(lines, index),
            BlockMatcher::Heading => Heading::try_match(lines, index, options),
            BlockMatcher::CodeFence => CodeFence::try_match(lines, index),
            BlockMatcher::BlockQuote => BlockQuote::try_match(lines, index),
            BlockMatcher::UnorderedList => UnorderedList::try_match(lines, index, options),
            BlockMatcher::OrderedList => OrderedList::try_match(lines, index),
            BlockMatcher::Paragraph => Paragraph::try_match(lines, index, options),
        }
    }

    /// The first matcher in priority order that claims `lines[index]`.
    pub fn first_match(
        lines: &[&str],
        index: usize,
        options: &TokenizerOptions,
    ) -> Option<(BlockMatcher, BlockMatch)> {
        Self::PRIORITY
            .into_iter()
            .find_map(|matcher| Some((matcher, matcher.try_match(lines, index, options)?)))
    }
}
