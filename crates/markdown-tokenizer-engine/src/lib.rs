pub mod io;
pub mod parsing;
pub mod render;

// Re-export key types for easier usage
pub use parsing::{
    options::{TokenizerOptions, UnmatchedDelimiters},
    token::{AttrValue, Attributes, HeadingLevel, Token, TokenKind, attr},
    tokenize, tokenize_with,
};
pub use render::{OutputFormat, RenderError};
