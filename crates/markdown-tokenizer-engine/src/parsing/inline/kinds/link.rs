/// Inline link `[text](url)`.
pub struct Link;

impl Link {
    pub const TEXT_OPEN: u8 = b'[';
    pub const TEXT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}

/// Inline image `![alt](src)`: a link body behind a bang.
pub struct Image;

impl Image {
    pub const BANG: u8 = b'!';
}
