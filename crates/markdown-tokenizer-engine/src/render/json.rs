use crate::parsing::token::Token;

use super::RenderError;

/// Serializes the token sequence as a JSON array.
///
/// Each token becomes `{"type", "value", "children", "attributes"}`; empty
/// children and attributes are written as `[]` and `{}`, never omitted.
pub fn to_json(tokens: &[Token], pretty: bool) -> Result<String, RenderError> {
    let json = if pretty {
        serde_json::to_string_pretty(tokens)?
    } else {
        serde_json::to_string(tokens)?
    };
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::tokenize;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    #[test]
    fn code_block_contract() {
        let tokens = tokenize("```go\ncode line\n```");
        let value: Value = serde_json::from_str(&to_json(&tokens, false).unwrap()).unwrap();
        assert_eq!(
            value,
            json!([{
                "type": "CodeBlock",
                "value": "code line",
                "children": [],
                "attributes": { "language": "go" }
            }])
        );
    }

    #[test]
    fn link_span_contract() {
        let tokens = tokenize("[a](http://x)");
        let value: Value = serde_json::from_str(&to_json(&tokens, true).unwrap()).unwrap();
        assert_eq!(
            value[0]["children"],
            json!([{
                "type": "Link",
                "value": "a",
                "children": [],
                "attributes": { "url": "http://x" }
            }])
        );
    }

    #[test]
    fn empty_document() {
        assert_eq!(to_json(&[], false).unwrap(), "[]");
    }
}
