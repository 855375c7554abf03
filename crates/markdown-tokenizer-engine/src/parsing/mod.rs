pub mod blocks;
pub mod inline;
pub mod lines;
pub mod options;
pub mod snapshot;
pub mod span;
pub mod token;

use blocks::BlockTokenizer;
use options::TokenizerOptions;
use token::Token;

/// Tokenizes a Markdown document with default options.
///
/// Never fails: any input, including the empty string, yields a (possibly
/// empty) token sequence in document order.
pub fn tokenize(content: &str) -> Vec<Token> {
    tokenize_with(content, &TokenizerOptions::default())
}

/// Tokenizes a Markdown document with explicit options.
pub fn tokenize_with(content: &str, options: &TokenizerOptions) -> Vec<Token> {
    let tokenizer = BlockTokenizer::new(content, options.clone());
    log::debug!("tokenizing {} line(s)", tokenizer.line_count());
    tokenizer.into_tokens()
}
