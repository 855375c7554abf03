//! # Inline Parsing
//!
//! Cursor-based scanning of a single line into span tokens.
//!
//! ## Architecture
//!
//! Inline parsing is separate from block parsing. Block matchers hand it the
//! text of paragraphs, headings and prose lines inside list items; it returns
//! a flat sequence of `Text`, `Bold`/`EndBold`, `Italic`/`EndItalic`, `Link`
//! and `Image` tokens. Emphasis is never nested: boundaries are markers in the
//! sequence, not parents of the text between them.
//!
//! ## Modules
//!
//! - **`types`**: `RawSpan` / `SpanKind`, the scanner's byte-range output
//! - **`kinds`**: Inline-specific types with owned delimiters (Emphasis, Link, Image)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `parse_spans()` main entry point with `try_parse_*` helpers
//!
//! ## Precedence
//!
//! At each position: image, then link, then emphasis delimiter, then text.
//! Link and image bodies are raw: `[**a**](u)` is a link with text `**a**`.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::{parse_spans, scan};
pub use types::{RawSpan, SpanKind};
