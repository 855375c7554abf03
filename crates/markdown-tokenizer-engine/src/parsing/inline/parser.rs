use crate::parsing::{options::UnmatchedDelimiters, span::Span, token::Token};

use super::{
    cursor::Cursor,
    kinds::{DelimClass, Emphasis, Image, Link},
    types::{RawSpan, SpanKind},
};

/// Parses one line into a flat sequence of span tokens.
///
/// Delimiters become empty-valued `Bold`/`EndBold`/`Italic`/`EndItalic`
/// boundary tokens; the text between them is a separate `Text` token.
/// `policy` decides what happens to an opener that is never closed.
pub fn parse_spans(line: &str, policy: UnmatchedDelimiters) -> Vec<Token> {
    let mut spans = scan(line);
    if policy == UnmatchedDelimiters::Literal {
        spans = demote_unmatched(spans);
    }
    spans.into_iter().map(|span| span.into_token(line)).collect()
}

/// Scans a line into [`RawSpan`]s covering every byte of the input.
///
/// Emphasis delimiters follow the parity rule: per [`DelimClass`], the Nth
/// occurrence opens when N is even and closes when N is odd. A delimiter
/// directly after an opener of the same span kind is folded into that opener
/// without being counted.
pub fn scan(line: &str) -> Vec<RawSpan> {
    let mut cur = Cursor::new(line);
    let mut out: Vec<RawSpan> = vec![];
    let mut parity = [0usize; 3];

    while !cur.eof() {
        // Images before links: `![` would otherwise leave a stray `!`.
        if let Some(span) = try_parse_image(&mut cur) {
            out.push(span);
            continue;
        }
        if let Some(span) = try_parse_link(&mut cur) {
            out.push(span);
            continue;
        }
        if let Some(class) = cur
            .peek()
            .and_then(|b| Emphasis::classify(b, cur.peek_at(1)))
        {
            let start = cur.pos();
            cur.bump_n(class.width());
            push_delimiter(&mut out, &mut parity, class, Span::new(start, cur.pos()));
            continue;
        }

        let start = cur.pos();
        cur.bump_char();
        push_text(&mut out, Span::new(start, cur.pos()));
    }

    out
}

fn push_text(out: &mut Vec<RawSpan>, span: Span) {
    if let Some(last) = out.last_mut()
        && last.kind == SpanKind::Text
        && last.full.end == span.start
    {
        last.full.end = span.end;
        return;
    }
    out.push(RawSpan {
        kind: SpanKind::Text,
        full: span,
    });
}

fn push_delimiter(out: &mut Vec<RawSpan>, parity: &mut [usize; 3], class: DelimClass, span: Span) {
    if let Some(last) = out.last_mut()
        && let SpanKind::Open(prev) = last.kind
        && prev.open_kind() == class.open_kind()
        && last.full.end == span.start
    {
        last.full.end = span.end;
        return;
    }

    let count = &mut parity[class.index()];
    let kind = if *count % 2 == 0 {
        SpanKind::Open(class)
    } else {
        SpanKind::Close(class)
    };
    *count += 1;
    out.push(RawSpan { kind, full: span });
}

/// Attempts to parse `![alt](src)` at the current position.
/// On failure, cursor position is restored.
fn try_parse_image(cur: &mut Cursor<'_>) -> Option<RawSpan> {
    if cur.peek() != Some(Image::BANG) {
        return None;
    }
    let saved = cur.clone();
    let start = cur.pos();
    cur.bump();
    match link_body(cur) {
        Some((alt, src)) => Some(RawSpan {
            kind: SpanKind::Image { alt, src },
            full: Span::new(start, cur.pos()),
        }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// Attempts to parse `[text](url)` at the current position.
/// On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<RawSpan> {
    if cur.peek() != Some(Link::TEXT_OPEN) {
        return None;
    }
    let saved = cur.clone();
    let start = cur.pos();
    match link_body(cur) {
        Some((text, url)) => Some(RawSpan {
            kind: SpanKind::Link { text, url },
            full: Span::new(start, cur.pos()),
        }),
        None => {
            *cur = saved;
            None
        }
    }
}

/// `[inner](target)`: returns the inner and target spans, leaving the cursor
/// after the closing paren.
fn link_body(cur: &mut Cursor<'_>) -> Option<(Span, Span)> {
    eat(cur, Link::TEXT_OPEN)?;
    let inner = take_until(cur, Link::TEXT_CLOSE)?;
    eat(cur, Link::TEXT_CLOSE)?;
    eat(cur, Link::URL_OPEN)?;
    let target = take_until(cur, Link::URL_CLOSE)?;
    eat(cur, Link::URL_CLOSE)?;
    Some((inner, target))
}

fn eat(cur: &mut Cursor<'_>, byte: u8) -> Option<()> {
    if cur.peek() == Some(byte) {
        cur.bump();
        Some(())
    } else {
        None
    }
}

fn take_until(cur: &mut Cursor<'_>, byte: u8) -> Option<Span> {
    let start = cur.pos();
    cur.advance_to(byte).then(|| Span::new(start, cur.pos()))
}

/// Turns openers that never found a closer back into text, merging them with
/// the text around them.
fn demote_unmatched(mut spans: Vec<RawSpan>) -> Vec<RawSpan> {
    let mut open: [Option<usize>; 3] = [None; 3];
    for (idx, span) in spans.iter().enumerate() {
        match span.kind {
            SpanKind::Open(class) => open[class.index()] = Some(idx),
            SpanKind::Close(class) => open[class.index()] = None,
            _ => {}
        }
    }
    for idx in open.into_iter().flatten() {
        spans[idx].kind = SpanKind::Text;
    }

    let mut out = Vec::with_capacity(spans.len());
    for span in spans {
        if span.kind == SpanKind::Text {
            push_text(&mut out, span.full);
        } else {
            out.push(span);
        }
    }
    out
}
