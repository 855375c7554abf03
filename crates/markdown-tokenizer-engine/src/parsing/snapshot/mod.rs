//! # Snapshot Testing Support
//!
//! Utilities for testing the tokenizer via snapshot assertions and invariant
//! checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a token tree as a stable, indented text outline
//!   for `insta` inline snapshots
//! - **`invariants`**: Structural checks every token tree must pass (empty
//!   values where required, no children under spans, sequential ordered
//!   item ids)

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
