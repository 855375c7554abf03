use crate::parsing::{
    blocks::types::BlockMatch,
    token::{Token, TokenKind, attr},
};

/// Backtick-fenced code block.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// If `line` opens a fence after exactly `indent` leading spaces, returns
    /// the trimmed info string (the `language`, possibly empty).
    pub fn opens(line: &str, indent: usize) -> Option<&str> {
        Self::after_indent(line, indent)?
            .strip_prefix(Self::FENCE)
            .map(str::trim)
    }

    /// A closing fence is the bare fence after exactly `indent` leading
    /// spaces, with nothing but trailing whitespace after it.
    pub fn closes(line: &str, indent: usize) -> bool {
        Self::after_indent(line, indent).is_some_and(|rest| rest.trim_end() == Self::FENCE)
    }

    /// The rest of `line` after an `indent`-wide prefix made only of spaces.
    fn after_indent(line: &str, indent: usize) -> Option<&str> {
        let prefix = line.get(..indent)?;
        prefix
            .bytes()
            .all(|b| b == b' ')
            .then(|| &line[indent..])
    }

    /// Parses a fenced block opening at `lines[index]`.
    ///
    /// Returns the code-block token and the number of lines consumed: the
    /// opening fence, every collected line, and the closing fence when one is
    /// found. Only a fence at the opening indentation closes the block; an
    /// unterminated block runs to the end of input.
    pub fn parse(lines: &[&str], index: usize, indent: usize) -> Option<(Token, usize)> {
        let language = Self::opens(lines.get(index)?, indent)?;

        let body: Vec<&str> = lines[index + 1..]
            .iter()
            .take_while(|line| !Self::closes(line, indent))
            .map(|line| line.trim())
            .collect();
        let closed = lines.get(index + 1 + body.len()).is_some();
        let consumed = 1 + body.len() + usize::from(closed);

        let token =
            Token::new(TokenKind::CodeBlock, body.join("\n")).with_attr(attr::LANGUAGE, language);
        Some((token, consumed))
    }

    pub fn try_match(lines: &[&str], index: usize) -> Option<BlockMatch> {
        Self::parse(lines, index, 0).map(|(token, consumed)| BlockMatch::single(token, consumed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::token::AttrValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn block_with_language() {
        let lines = ["```go", "code line", "```"];
        let m = CodeFence::try_match(&lines, 0).unwrap();
        assert_eq!(m.consumed, 3);
        assert_eq!(m.tokens[0].kind(), TokenKind::CodeBlock);
        assert_eq!(m.tokens[0].value(), "code line");
        assert_eq!(m.tokens[0].attr(attr::LANGUAGE), Some(&AttrValue::from("go")));
    }

    #[test]
    fn bare_fence_has_empty_language() {
        let lines = ["```", "a", "b", "```"];
        let m = CodeFence::try_match(&lines, 0).unwrap();
        assert_eq!(m.consumed, 4);
        assert_eq!(m.tokens[0].value(), "a\nb");
        assert_eq!(m.tokens[0].attr(attr::LANGUAGE), Some(&AttrValue::from("")));
    }

    #[test]
    fn body_lines_are_trimmed() {
        let lines = ["``` rust ", "    let x = 1;  ", "```"];
        let m = CodeFence::try_match(&lines, 0).unwrap();
        assert_eq!(m.tokens[0].value(), "let x = 1;");
        assert_eq!(m.tokens[0].attr(attr::LANGUAGE), Some(&AttrValue::from("rust")));
    }

    #[test]
    fn unterminated_block_runs_to_end() {
        let lines = ["```text", "one", "two"];
        let m = CodeFence::try_match(&lines, 0).unwrap();
        assert_eq!(m.consumed, 3);
        assert_eq!(m.tokens[0].value(), "one\ntwo");
    }

    #[test]
    fn empty_block() {
        let lines = ["```", "```"];
        let m = CodeFence::try_match(&lines, 0).unwrap();
        assert_eq!(m.consumed, 2);
        assert_eq!(m.tokens[0].value(), "");
    }

    #[test]
    fn fence_with_info_string_does_not_close() {
        let lines = ["```", "```rust", "```"];
        let m = CodeFence::try_match(&lines, 0).unwrap();
        assert_eq!(m.consumed, 3);
        assert_eq!(m.tokens[0].value(), "```rust");
    }

    #[test]
    fn indented_fence_needs_matching_prefix() {
        assert_eq!(CodeFence::opens("  ```jsx", 2), Some("jsx"));
        assert_eq!(CodeFence::opens("  ```jsx", 0), None);
        assert_eq!(CodeFence::opens("```", 2), None);
        assert_eq!(CodeFence::opens("x ```", 2), None);
    }

    #[test]
    fn indented_block_consumes_through_indented_close() {
        let lines = [
            "  ```jsx",
            "  const Snow = <Snowflake amount=20 />;",
            "  ```",
            "after",
        ];
        let (token, consumed) = CodeFence::parse(&lines, 0, 2).unwrap();
        assert_eq!(consumed, 3);
        assert_eq!(token.value(), "const Snow = <Snowflake amount=20 />;");
    }

    #[test]
    fn close_needs_opening_indentation() {
        assert!(CodeFence::closes("```", 0));
        assert!(CodeFence::closes("```  ", 0));
        assert!(!CodeFence::closes("  ```", 0));
        assert!(CodeFence::closes("  ```", 2));
        assert!(!CodeFence::closes("    ```", 2));
        assert!(!CodeFence::closes("```", 2));
        assert!(!CodeFence::closes("```rust", 0));
    }

    #[test]
    fn indented_fence_does_not_close_top_level_block() {
        let lines = ["```", "x", "  ```", "y"];
        let m = CodeFence::try_match(&lines, 0).unwrap();
        assert_eq!(m.consumed, 4);
        assert_eq!(m.tokens[0].value(), "x\n```\ny");
    }

    #[test]
    fn deeper_fence_does_not_close_indented_block() {
        let lines = ["  ```", "  x", "    ```", "  y", "  ```"];
        let (token, consumed) = CodeFence::parse(&lines, 0, 2).unwrap();
        assert_eq!(consumed, 5);
        assert_eq!(token.value(), "x\n```\ny");
    }
}
