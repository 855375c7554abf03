use crate::parsing::token::TokenKind;

/// Bold and italic delimiter characters.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Classifies the delimiter starting with `first`, given the byte after it.
    ///
    /// A doubled character is bold; a single one is italic.
    pub fn classify(first: u8, next: Option<u8>) -> Option<DelimClass> {
        match (first, next) {
            (Self::STAR, Some(Self::STAR)) => Some(DelimClass::StarBold),
            (Self::UNDERSCORE, Some(Self::UNDERSCORE)) => Some(DelimClass::UnderscoreBold),
            (Self::STAR | Self::UNDERSCORE, _) => Some(DelimClass::Italic),
            _ => None,
        }
    }
}

/// The parity counter an emphasis delimiter is counted under.
///
/// Both bold families share the `Bold`/`EndBold` token kinds but keep separate
/// counters; `*` and `_` italics share one counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimClass {
    Italic,
    StarBold,
    UnderscoreBold,
}

impl DelimClass {
    /// Byte width of the delimiter.
    pub fn width(self) -> usize {
        match self {
            DelimClass::Italic => 1,
            DelimClass::StarBold | DelimClass::UnderscoreBold => 2,
        }
    }

    pub fn index(self) -> usize {
        match self {
            DelimClass::Italic => 0,
            DelimClass::StarBold => 1,
            DelimClass::UnderscoreBold => 2,
        }
    }

    pub fn open_kind(self) -> TokenKind {
        match self {
            DelimClass::Italic => TokenKind::Italic,
            DelimClass::StarBold | DelimClass::UnderscoreBold => TokenKind::Bold,
        }
    }

    pub fn close_kind(self) -> TokenKind {
        match self {
            DelimClass::Italic => TokenKind::EndItalic,
            DelimClass::StarBold | DelimClass::UnderscoreBold => TokenKind::EndBold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_doubles_as_bold() {
        assert_eq!(
            Emphasis::classify(b'*', Some(b'*')),
            Some(DelimClass::StarBold)
        );
        assert_eq!(
            Emphasis::classify(b'_', Some(b'_')),
            Some(DelimClass::UnderscoreBold)
        );
    }

    #[test]
    fn classify_singles_as_italic() {
        assert_eq!(Emphasis::classify(b'*', Some(b'a')), Some(DelimClass::Italic));
        assert_eq!(Emphasis::classify(b'_', None), Some(DelimClass::Italic));
        assert_eq!(Emphasis::classify(b'*', Some(b'_')), Some(DelimClass::Italic));
    }

    #[test]
    fn classify_other_bytes() {
        assert_eq!(Emphasis::classify(b'a', Some(b'*')), None);
    }

    #[test]
    fn bold_families_share_token_kinds() {
        assert_eq!(DelimClass::StarBold.open_kind(), TokenKind::Bold);
        assert_eq!(DelimClass::UnderscoreBold.close_kind(), TokenKind::EndBold);
        assert_eq!(DelimClass::Italic.open_kind(), TokenKind::Italic);
    }
}
