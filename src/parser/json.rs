// Frontend for trees that were already parsed by an external tool and dumped as JSON

use crate::error::Result;
use crate::parser::ast::Program;
use crate::parser::SourceParser;

/// Reads a [`Program`] from its JSON form
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonAstParser;

impl JsonAstParser {
    pub fn new() -> Self {
        Self
    }
}

impl SourceParser for JsonAstParser {
    fn parse(&mut self, source: &str) -> Result<Program> {
        Ok(serde_json::from_str(source)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::parser::ast::{Node, Tag};

    #[test]
    fn test_parse_program() {
        let source = r#"{
            "expressions": [
                {"type": "Comment", "comment": "Module docs"},
                {"type": "Opaque", "kind": "If"}
            ]
        }"#;
        let program = JsonAstParser::new().parse(source).unwrap();
        assert_eq!(program.expressions.len(), 2);
        assert_eq!(program.expressions[0], Node::comment("Module docs"));
        assert_eq!(program.expressions[1].tag(), Tag::Opaque);
    }

    #[test]
    fn test_unknown_node_type_is_error() {
        let source = r#"{"expressions": [{"type": "While"}]}"#;
        let result = JsonAstParser::new().parse(source);
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(JsonAstParser::new().parse("not json").is_err());
    }
}
