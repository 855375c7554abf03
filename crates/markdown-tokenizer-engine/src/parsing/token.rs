use std::collections::BTreeMap;
use std::fmt;

use serde::{Serialize, Serializer};

/// Attribute keys understood by the tokenizer.
///
/// Which keys are present depends on the token kind; see [`TokenKind`].
pub mod attr {
    /// Info string of a fenced code block (`CodeBlock`).
    pub const LANGUAGE: &str = "language";
    /// 1-based position of an ordered-list item (`OrderedListItem`).
    pub const ID: &str = "id";
    /// Link target (`Link`).
    pub const URL: &str = "url";
    /// Image source (`Image`).
    pub const SRC: &str = "src";
    /// Image alternative text (`Image`).
    pub const ALT: &str = "alt";
}

/// Heading level, `#` through `######`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl HeadingLevel {
    /// Maps a run of `#` markers to a level; `None` outside 1..=6.
    pub fn from_marker_count(count: usize) -> Option<Self> {
        match count {
            1 => Some(Self::H1),
            2 => Some(Self::H2),
            3 => Some(Self::H3),
            4 => Some(Self::H4),
            5 => Some(Self::H5),
            6 => Some(Self::H6),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        match self {
            Self::H1 => 1,
            Self::H2 => 2,
            Self::H3 => 3,
            Self::H4 => 4,
            Self::H5 => 5,
            Self::H6 => 6,
        }
    }
}

/// The closed set of token kinds. Block and span kinds share one enum so the
/// whole tree has a single node type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Block kinds
    Hr,
    Heading(HeadingLevel),
    CodeBlock,
    Paragraph,
    Blockquote,
    UnorderedList,
    UnorderedListItem,
    OrderedList,
    OrderedListItem,
    // Span kinds
    Text,
    Bold,
    EndBold,
    Italic,
    EndItalic,
    Link,
    Image,
}

impl TokenKind {
    /// The tag written to the `type` field on serialization.
    pub fn tag(self) -> &'static str {
        match self {
            TokenKind::Hr => "Hr",
            TokenKind::Heading(HeadingLevel::H1) => "Heading1",
            TokenKind::Heading(HeadingLevel::H2) => "Heading2",
            TokenKind::Heading(HeadingLevel::H3) => "Heading3",
            TokenKind::Heading(HeadingLevel::H4) => "Heading4",
            TokenKind::Heading(HeadingLevel::H5) => "Heading5",
            TokenKind::Heading(HeadingLevel::H6) => "Heading6",
            TokenKind::CodeBlock => "CodeBlock",
            TokenKind::Paragraph => "Paragraph",
            TokenKind::Blockquote => "Blockquote",
            TokenKind::UnorderedList => "UnorderedList",
            TokenKind::UnorderedListItem => "UnorderedListItem",
            TokenKind::OrderedList => "OrderedList",
            TokenKind::OrderedListItem => "OrderedListItem",
            TokenKind::Text => "Text",
            TokenKind::Bold => "Bold",
            TokenKind::EndBold => "EndBold",
            TokenKind::Italic => "Italic",
            TokenKind::EndItalic => "EndItalic",
            TokenKind::Link => "Link",
            TokenKind::Image => "Image",
        }
    }

    /// True for line-level constructs, false for inline spans.
    pub fn is_block(self) -> bool {
        match self {
            TokenKind::Hr
            | TokenKind::Heading(_)
            | TokenKind::CodeBlock
            | TokenKind::Paragraph
            | TokenKind::Blockquote
            | TokenKind::UnorderedList
            | TokenKind::UnorderedListItem
            | TokenKind::OrderedList
            | TokenKind::OrderedListItem => true,
            TokenKind::Text
            | TokenKind::Bold
            | TokenKind::EndBold
            | TokenKind::Italic
            | TokenKind::EndItalic
            | TokenKind::Link
            | TokenKind::Image => false,
        }
    }

    /// True for list containers, whose value is always empty.
    pub fn is_list(self) -> bool {
        matches!(self, TokenKind::UnorderedList | TokenKind::OrderedList)
    }

    /// True for the empty-valued bold/italic boundary markers.
    pub fn is_boundary(self) -> bool {
        matches!(
            self,
            TokenKind::Bold | TokenKind::EndBold | TokenKind::Italic | TokenKind::EndItalic
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.tag())
    }
}

/// A loosely typed attribute value. Serializes as a bare JSON string or number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum AttrValue {
    Text(String),
    Number(u64),
}

impl AttrValue {
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            AttrValue::Number(n) => Some(*n),
            AttrValue::Text(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<u64> for AttrValue {
    fn from(value: u64) -> Self {
        AttrValue::Number(value)
    }
}

pub type Attributes = BTreeMap<String, AttrValue>;

/// A node in the token tree.
///
/// Kind and value are fixed at construction. Children and attributes are
/// filled in by the tokenizer; callers receive the finished tree read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    #[serde(rename = "type")]
    kind: TokenKind,
    value: String,
    children: Vec<Token>,
    attributes: Attributes,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
            children: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn children(&self) -> &[Token] {
        &self.children
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Looks up an attribute by key; see [`attr`] for the known keys.
    pub fn attr(&self, key: &str) -> Option<&AttrValue> {
        self.attributes.get(key)
    }

    pub(crate) fn push_child(&mut self, child: Token) {
        self.children.push(child);
    }

    pub(crate) fn with_attr(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attributes.insert(key.to_string(), value.into());
        self
    }

    pub(crate) fn with_children(mut self, children: Vec<Token>) -> Self {
        self.children = children;
        self
    }
}
