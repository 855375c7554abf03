//! # Inline Kinds
//!
//! Inline-specific types that own their syntax delimiters.
//!
//! - **`Emphasis`**: `*`, `_` and their doubled bold forms, plus the
//!   [`DelimClass`] each occurrence is counted under
//! - **`Link`** / **`Image`**: `[text](url)` and `![alt](src)`
//!
//! The parser calls these constants; it never hardcodes `*` or `[`.

pub mod emphasis;
pub mod link;

pub use emphasis::{DelimClass, Emphasis};
pub use link::{Image, Link};
