pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod ordered_list;
pub mod paragraph;
pub mod rule;
pub mod unordered_list;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::Heading;
pub use ordered_list::OrderedList;
pub use paragraph::Paragraph;
pub use rule::HorizontalRule;
pub use unordered_list::UnorderedList;
