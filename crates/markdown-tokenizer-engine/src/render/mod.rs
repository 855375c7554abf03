//! Consumers of a finished token tree: JSON serialization and a Markdown-like
//! text rendering.

mod json;
mod markdown;

pub use json::to_json;
pub use markdown::to_markdown;

use serde::{Deserialize, Serialize};

use crate::parsing::token::Token;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Output format for [`render`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    #[default]
    Json,
    Markdown,
}

/// Renders `tokens` in the requested format. `pretty` only affects JSON.
pub fn render(
    tokens: &[Token],
    format: OutputFormat,
    pretty: bool,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Json => to_json(tokens, pretty),
        OutputFormat::Markdown => Ok(to_markdown(tokens)),
    }
}
