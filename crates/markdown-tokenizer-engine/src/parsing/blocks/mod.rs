//! # Block Parsing
//!
//! Line-oriented block tokenization by prioritized trial and fallback.
//!
//! ## Flow
//!
//! The dispatcher ([`BlockTokenizer`]) splits the input into lines and keeps
//! a cursor. At each unclaimed line it skips blanks, then offers the line to
//! each [`BlockMatcher`] in priority order. A matcher either declines or
//! claims one or more lines and returns tokens; the cursor advances by the
//! claimed count.
//!
//! ## Modules
//!
//! - **`types`**: `BlockMatch`, a matcher's claim
//! - **`kinds`**: one type per construct, owning its delimiters and its
//!   `try_match` (rule, heading, code fence, blockquote, lists, paragraph)
//! - **`list_tree`**: arena used while building nested list tokens
//! - **`matcher`**: `BlockMatcher` and the fixed priority order
//! - **`dispatch`**: `BlockTokenizer`, yielding one `Segment` per claim
//!
//! ## Key Invariants
//!
//! - Every segment consumes at least one line, and the segments of a pass
//!   partition the input lines
//! - Matchers never index past the end of the line array
//! - Fenced code blocks are raw: no block or inline parsing inside

pub mod dispatch;
pub mod kinds;
pub mod list_tree;
pub mod matcher;
pub mod types;

pub use dispatch::{BlockTokenizer, Segment};
pub use matcher::BlockMatcher;
pub use types::BlockMatch;
