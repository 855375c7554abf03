use crate::parsing::token::{Token, TokenKind, attr};

/// Validates the structure of a token tree.
///
/// Asserts that:
/// - Boundary markers, images and list containers have empty values
/// - Span tokens have no children
/// - Paragraph and heading children are all spans
/// - List containers hold only items of their own flavor
/// - Ordered item ids run 1, 2, 3, ... within each list
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(tokens: &[Token]) {
    for token in tokens {
        check_token(token);
    }
}

fn check_token(token: &Token) {
    let kind = token.kind();

    if kind.is_boundary() || kind.is_list() || kind == TokenKind::Image {
        assert!(
            token.value().is_empty(),
            "{kind} must have an empty value, got {:?}",
            token.value()
        );
    }

    if !kind.is_block() {
        assert!(
            token.children().is_empty(),
            "span {kind} must not have children"
        );
    }

    match kind {
        TokenKind::Paragraph | TokenKind::Heading(_) => {
            for child in token.children() {
                assert!(
                    !child.kind().is_block(),
                    "{kind} child must be a span, got {}",
                    child.kind()
                );
            }
        }
        TokenKind::UnorderedList => {
            for child in token.children() {
                assert_eq!(
                    child.kind(),
                    TokenKind::UnorderedListItem,
                    "UnorderedList child has wrong kind"
                );
            }
        }
        TokenKind::OrderedList => {
            for (position, child) in token.children().iter().enumerate() {
                assert_eq!(
                    child.kind(),
                    TokenKind::OrderedListItem,
                    "OrderedList child has wrong kind"
                );
                let id = child.attr(attr::ID).and_then(|v| v.as_u64());
                assert_eq!(
                    id,
                    Some(position as u64 + 1),
                    "ordered item ids must be sequential from 1"
                );
            }
        }
        _ => {}
    }

    for child in token.children() {
        check_token(child);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_well_formed_tree() {
        let item = Token::new(TokenKind::OrderedListItem, "a").with_attr(attr::ID, 1u64);
        let list = Token::new(TokenKind::OrderedList, "").with_children(vec![item]);
        check(&[list, Token::new(TokenKind::Hr, "")]);
    }

    #[test]
    #[should_panic(expected = "ordered item ids must be sequential")]
    fn rejects_gap_in_ids() {
        let item = Token::new(TokenKind::OrderedListItem, "a").with_attr(attr::ID, 2u64);
        let list = Token::new(TokenKind::OrderedList, "").with_children(vec![item]);
        check(&[list]);
    }

    #[test]
    #[should_panic(expected = "must have an empty value")]
    fn rejects_valued_boundary() {
        check(&[Token::new(TokenKind::Bold, "x")]);
    }
}
