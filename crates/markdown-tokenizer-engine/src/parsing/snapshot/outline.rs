use std::fmt::{self, Write};

use crate::parsing::token::{AttrValue, Token};

/// Renders `tokens` as one line per token, children indented two spaces
/// below their parent.
///
/// ```text
/// Paragraph "hello **world**"
///   Text "hello "
///   Bold
///   Text "world"
///   EndBold
/// ```
///
/// Empty values are omitted; attributes follow as `key=value` in key order.
pub fn outline(tokens: &[Token]) -> String {
    Outline(tokens).to_string()
}

/// [`Display`](fmt::Display) form of [`outline`].
pub struct Outline<'a>(pub &'a [Token]);

impl fmt::Display for Outline<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0
            .iter()
            .try_for_each(|token| write_token(f, token, 0))
    }
}

fn write_token(out: &mut impl Write, token: &Token, depth: usize) -> fmt::Result {
    write!(out, "{:indent$}{}", "", token.kind(), indent = depth * 2)?;
    if !token.value().is_empty() {
        write!(out, " {:?}", token.value())?;
    }
    for (key, value) in token.attributes() {
        match value {
            AttrValue::Text(text) => write!(out, " {key}={text:?}")?,
            AttrValue::Number(n) => write!(out, " {key}={n}")?,
        }
    }
    out.write_char('\n')?;
    for child in token.children() {
        write_token(out, child, depth + 1)?;
    }
    Ok(())
}
