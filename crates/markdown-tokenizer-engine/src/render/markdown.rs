use crate::parsing::token::{Token, TokenKind};

/// Re-emits the block structure as Markdown-like text: heading prefixes, one
/// line per block value, list containers flattened into their items.
///
/// Span children are skipped since their text is already in the parent's
/// value.
pub fn to_markdown(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        write_block(&mut out, token);
    }
    out
}

fn write_block(out: &mut String, token: &Token) {
    match token.kind() {
        TokenKind::Heading(level) => {
            for _ in 0..level.as_u8() {
                out.push('#');
            }
            out.push(' ');
            push_line(out, token.value());
        }
        TokenKind::UnorderedList | TokenKind::OrderedList => {}
        TokenKind::Hr
        | TokenKind::CodeBlock
        | TokenKind::Paragraph
        | TokenKind::Blockquote
        | TokenKind::UnorderedListItem
        | TokenKind::OrderedListItem => push_line(out, token.value()),
        TokenKind::Text
        | TokenKind::Bold
        | TokenKind::EndBold
        | TokenKind::Italic
        | TokenKind::EndItalic
        | TokenKind::Link
        | TokenKind::Image => return,
    }

    for child in token.children() {
        write_block(out, child);
    }
}

fn push_line(out: &mut String, value: &str) {
    out.push_str(value);
    out.push('\n');
}
