// Parser module: the AST contract, source frontends, and module layouts

pub mod ast;
mod javascript;
mod json;

pub use ast::*;
pub use javascript::JavaScriptParser;
pub use json::JsonAstParser;

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Turns source text into a [`Program`]
pub trait SourceParser {
    fn parse(&mut self, source: &str) -> Result<Program>;
}

/// Picks the class and function definitions out of a module's statements
pub trait NodeSelector {
    fn classes<'a>(&self, statements: &'a [Node]) -> Vec<&'a Node>;
    fn functions<'a>(&self, statements: &'a [Node]) -> Vec<&'a Node>;
}

/// Module conventions understood out of the box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Definitions live at the top level of the file
    #[default]
    CommonJs,
    /// Definitions live inside the callback of a top-level `define(...)`
    RequireJs,
}

impl Layout {
    /// Statements holding the module's definitions
    fn scope<'a>(&self, statements: &'a [Node]) -> &'a [Node] {
        match self {
            Layout::CommonJs => statements,
            Layout::RequireJs => define_body(statements).unwrap_or(&[]),
        }
    }
}

impl NodeSelector for Layout {
    fn classes<'a>(&self, statements: &'a [Node]) -> Vec<&'a Node> {
        self.scope(statements)
            .iter()
            .filter(|n| n.is_class_definition() && is_named(n))
            .collect()
    }

    fn functions<'a>(&self, statements: &'a [Node]) -> Vec<&'a Node> {
        self.scope(statements)
            .iter()
            .filter(|n| n.is_function_assign() && is_named(n))
            .collect()
    }
}

/// `true` when a definition is bound to a name; anonymous classes and computed
/// targets such as `exports[key] = ...` are skipped.
fn is_named(node: &Node) -> bool {
    let binding = match node {
        Node::Class(class) => class.variable.as_ref(),
        Node::Assign(assign) => match assign.value.as_ref() {
            Node::Class(class) => class.variable.as_ref().or(Some(&assign.variable)),
            _ => Some(&assign.variable),
        },
        _ => None,
    };
    let named = binding.is_some_and(|value| value.base_literal().is_some());
    if !named {
        tracing::debug!(node = %node.tag(), "skipping definition without a name");
    }
    named
}

/// Body of the factory passed to the first top-level `define(...)` call
fn define_body(statements: &[Node]) -> Option<&[Node]> {
    statements.iter().find_map(|node| {
        let Node::Call(call) = node else {
            return None;
        };
        let callee = call.variable.as_value()?;
        if callee.base_literal() != Some("define") || !callee.properties.is_empty() {
            return None;
        }
        let factory = call.args.iter().rev().find_map(Node::as_code)?;
        Some(factory.body.expressions.as_slice())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn func(name: &str) -> Node {
        Node::assign(Value::ident(name), Node::Code(Code::new(vec![], vec![])))
    }

    fn class(name: &str) -> Node {
        Node::Class(Class {
            variable: Some(Value::ident(name)),
            parent: None,
            body: Block::default(),
        })
    }

    #[test]
    fn test_commonjs_selects_top_level() {
        let statements = vec![
            Node::comment("module"),
            class("A"),
            func("f"),
            Node::assign(Value::ident("x"), Node::ident("1")),
            Node::assign(Value::ident("B"), class("B")),
        ];

        let classes = Layout::CommonJs.classes(&statements);
        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0], &statements[1]);
        assert_eq!(classes[1], &statements[4]);

        let functions = Layout::CommonJs.functions(&statements);
        assert_eq!(functions, vec![&statements[2]]);
    }

    #[test]
    fn test_requirejs_selects_define_body() {
        let factory = Code::new(vec![Param::new("dep")], vec![class("Inner"), func("helper")]);
        let statements = vec![
            func("outside"),
            Node::call(
                Node::ident("define"),
                vec![Node::opaque("array"), Node::Code(factory)],
            ),
        ];

        let classes = Layout::RequireJs.classes(&statements);
        assert_eq!(classes.len(), 1);
        let functions = Layout::RequireJs.functions(&statements);
        assert_eq!(functions.len(), 1);
        assert_eq!(
            functions[0].as_assign().and_then(|a| a.variable.base_literal()),
            Some("helper")
        );
    }

    #[test]
    fn test_unnamed_definitions_skipped() {
        let computed = Value {
            base: Box::new(Node::opaque("subscript_expression")),
            properties: Vec::new(),
        };
        let anonymous = Node::Class(Class {
            variable: None,
            parent: Some(Box::new(Node::ident("Base"))),
            body: Block::default(),
        });
        let statements = vec![
            Node::assign(computed, Node::Code(Code::new(vec![], vec![]))),
            anonymous,
            func("ok"),
            class("A"),
        ];

        assert_eq!(Layout::CommonJs.functions(&statements), vec![&statements[2]]);
        assert_eq!(Layout::CommonJs.classes(&statements), vec![&statements[3]]);
    }

    #[test]
    fn test_requirejs_without_define_is_empty() {
        let statements = vec![class("A"), func("f")];
        assert!(Layout::RequireJs.classes(&statements).is_empty());
        assert!(Layout::RequireJs.functions(&statements).is_empty());
    }
}
