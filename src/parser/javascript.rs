// JavaScript frontend using tree-sitter
//
// Lowers CommonJS-style JavaScript into the documenter's AST. Docstrings follow the
// body convention: a block comment that opens a function, class, or file body.

use crate::error::{Error, Result};
use crate::parser::ast::{Access, Block, Class, Code, Node, Param, Program, Value};
use crate::parser::SourceParser;
use tree_sitter::{Node as TsNode, Parser};

/// Parser for JavaScript source files
pub struct JavaScriptParser {
    parser: Parser,
}

impl JavaScriptParser {
    /// Create a new JavaScript parser
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        let language = tree_sitter_javascript::language();
        parser.set_language(&language).map_err(|e| {
            Error::Parser(format!("Failed to set JavaScript language: {}", e))
        })?;
        Ok(Self { parser })
    }

    /// Parse JavaScript source code into a program
    pub fn parse_source(&mut self, source: &str) -> Result<Program> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| Error::parse("Failed to parse source"))?;

        let root = tree.root_node();
        if let Some(bad) = first_error(root) {
            let pos = bad.start_position();
            return Err(Error::parse(format!(
                "syntax error at line {}, column {}",
                pos.row + 1,
                pos.column + 1
            )));
        }

        let lowering = Lowering {
            source: source.as_bytes(),
        };
        Ok(Block::new(lowering.statements(root)))
    }
}

impl SourceParser for JavaScriptParser {
    fn parse(&mut self, source: &str) -> Result<Program> {
        self.parse_source(source)
    }
}

/// Depth-first search for the first error or missing node
fn first_error(node: TsNode<'_>) -> Option<TsNode<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<TsNode<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn named_children(node: TsNode<'_>) -> Vec<TsNode<'_>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect();
    children
}

/// Converts tree-sitter nodes into AST nodes
struct Lowering<'s> {
    source: &'s [u8],
}

impl<'s> Lowering<'s> {
    fn text(&self, node: TsNode<'_>) -> &'s str {
        std::str::from_utf8(&self.source[node.byte_range()]).unwrap_or("")
    }

    /// Lower every statement of a program or statement block
    fn statements(&self, node: TsNode<'_>) -> Vec<Node> {
        let mut out = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.statement(child, &mut out);
        }
        out
    }

    fn statement(&self, node: TsNode<'_>, out: &mut Vec<Node>) {
        match node.kind() {
            "comment" => {
                if let Some(text) = block_comment_text(self.text(node)) {
                    out.push(Node::comment(&text));
                }
            }
            "expression_statement" => {
                if let Some(expr) = named_children(node).into_iter().next() {
                    out.push(self.expression(expr));
                }
            }
            "function_declaration" | "generator_function_declaration" => {
                if let Some(name) = node.child_by_field_name("name") {
                    let target = Value::ident(self.text(name));
                    out.push(Node::assign(target, Node::Code(self.code(node))));
                }
            }
            "class_declaration" => {
                let name = node
                    .child_by_field_name("name")
                    .map(|n| Value::ident(self.text(n)));
                let class = Node::Class(self.class(node, name.clone()));
                match name {
                    Some(name) => out.push(Node::assign(name, class)),
                    None => out.push(class),
                }
            }
            "lexical_declaration" | "variable_declaration" => {
                for declarator in named_children(node) {
                    if declarator.kind() != "variable_declarator" {
                        continue;
                    }
                    let (Some(name), Some(value)) = (
                        declarator.child_by_field_name("name"),
                        declarator.child_by_field_name("value"),
                    ) else {
                        continue;
                    };
                    out.push(Node::assign(self.target(name), self.expression(value)));
                }
            }
            "export_statement" => {
                if let Some(decl) = node.child_by_field_name("declaration") {
                    self.statement(decl, out);
                } else if let Some(value) = node.child_by_field_name("value") {
                    // `export default` of an anonymous function or class binds it to `default`
                    match self.expression(value) {
                        value @ (Node::Code(_) | Node::Class(_)) => {
                            out.push(Node::assign(Value::ident("default"), value))
                        }
                        value => out.push(value),
                    }
                } else {
                    out.push(Node::opaque(node.kind()));
                }
            }
            kind => out.push(Node::opaque(kind)),
        }
    }

    fn expression(&self, node: TsNode<'_>) -> Node {
        match node.kind() {
            "identifier" | "property_identifier" | "shorthand_property_identifier" | "this"
            | "super" | "number" | "string" | "true" | "false" | "null" | "undefined" => {
                Node::ident(self.text(node))
            }
            "member_expression" | "subscript_expression" => match self.reference(node) {
                Some(value) => Node::Value(value),
                None => Node::opaque(node.kind()),
            },
            "parenthesized_expression" => match named_children(node).into_iter().next() {
                Some(inner) => self.expression(inner),
                None => Node::opaque(node.kind()),
            },
            "call_expression" => {
                let Some(callee) = node.child_by_field_name("function") else {
                    return Node::opaque(node.kind());
                };
                let args = node
                    .child_by_field_name("arguments")
                    .map(|list| {
                        named_children(list)
                            .into_iter()
                            .map(|arg| self.expression(arg))
                            .collect()
                    })
                    .unwrap_or_default();
                Node::call(self.expression(callee), args)
            }
            "binary_expression" => {
                let (Some(left), Some(op), Some(right)) = (
                    node.child_by_field_name("left"),
                    node.child_by_field_name("operator"),
                    node.child_by_field_name("right"),
                ) else {
                    return Node::opaque(node.kind());
                };
                Node::binary(op.kind(), self.expression(left), self.expression(right))
            }
            "assignment_expression" => {
                let (Some(left), Some(right)) = (
                    node.child_by_field_name("left"),
                    node.child_by_field_name("right"),
                ) else {
                    return Node::opaque(node.kind());
                };
                Node::assign(self.target(left), self.expression(right))
            }
            "function_expression" | "function" | "arrow_function" | "generator_function" => {
                Node::Code(self.code(node))
            }
            "class" => {
                let name = node
                    .child_by_field_name("name")
                    .map(|n| Value::ident(self.text(n)));
                Node::Class(self.class(node, name))
            }
            "object" => Node::Value(Value {
                base: Box::new(Node::obj(self.object_members(node))),
                properties: Vec::new(),
            }),
            kind => Node::opaque(kind),
        }
    }

    /// Dotted reference for identifiers and member chains
    fn reference(&self, node: TsNode<'_>) -> Option<Value> {
        match node.kind() {
            "identifier" | "this" | "super" | "property_identifier" => {
                Some(Value::ident(self.text(node)))
            }
            "member_expression" => {
                let mut value = self.reference(node.child_by_field_name("object")?)?;
                let property = node.child_by_field_name("property")?;
                value.properties.push(Access {
                    name: self.text(property).to_string(),
                });
                Some(value)
            }
            "subscript_expression" => {
                let mut value = self.reference(node.child_by_field_name("object")?)?;
                let index = node.child_by_field_name("index")?;
                if index.kind() != "string" {
                    return None;
                }
                let raw = self.text(index);
                let name = raw.get(1..raw.len().saturating_sub(1))?;
                value.properties.push(Access {
                    name: name.to_string(),
                });
                Some(value)
            }
            _ => None,
        }
    }

    /// Assignment target; patterns keep an opaque base
    fn target(&self, node: TsNode<'_>) -> Value {
        self.reference(node).unwrap_or_else(|| Value {
            base: Box::new(Node::opaque(node.kind())),
            properties: Vec::new(),
        })
    }

    fn code(&self, node: TsNode<'_>) -> Code {
        let params = if let Some(list) = node.child_by_field_name("parameters") {
            named_children(list)
                .into_iter()
                .filter_map(|p| self.param(p))
                .collect()
        } else if let Some(single) = node.child_by_field_name("parameter") {
            vec![Param::new(self.text(single))]
        } else {
            Vec::new()
        };

        let body = match node.child_by_field_name("body") {
            Some(body) if body.kind() == "statement_block" => self.statements(body),
            Some(expr) => vec![self.expression(expr)],
            None => Vec::new(),
        };

        Code::new(params, body)
    }

    fn param(&self, node: TsNode<'_>) -> Option<Param> {
        match node.kind() {
            "rest_pattern" => {
                let inner = named_children(node).into_iter().next()?;
                Some(Param::splat(self.text(inner)))
            }
            "assignment_pattern" => {
                let left = node.child_by_field_name("left")?;
                Some(Param::new(self.text(left)))
            }
            _ => Some(Param::new(self.text(node))),
        }
    }

    fn class(&self, node: TsNode<'_>, variable: Option<Value>) -> Class {
        let parent = named_children(node)
            .into_iter()
            .find(|child| child.kind() == "class_heritage")
            .and_then(|heritage| named_children(heritage).into_iter().next())
            .map(|expr| Box::new(self.expression(expr)));

        let body = node
            .child_by_field_name("body")
            .map(|body| self.class_body(body))
            .unwrap_or_default();

        Class {
            variable,
            parent,
            body,
        }
    }

    /// A class body without members holds just its comments; otherwise its
    /// members are wrapped in one object literal.
    fn class_body(&self, node: TsNode<'_>) -> Block {
        let mut members = Vec::new();
        let mut has_members = false;

        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "comment" => {
                    if let Some(text) = block_comment_text(self.text(child)) {
                        members.push(Node::comment(&text));
                    }
                }
                "method_definition" => {
                    has_members = true;
                    if let Some(method) = self.method(child) {
                        members.push(method);
                    }
                }
                "field_definition" | "public_field_definition" => {
                    has_members = true;
                    let Some(property) = child.child_by_field_name("property") else {
                        continue;
                    };
                    let value = child
                        .child_by_field_name("value")
                        .map(|v| self.expression(v))
                        .unwrap_or_else(|| Node::ident("undefined"));
                    members.push(Node::assign(Value::ident(self.text(property)), value));
                }
                kind => {
                    has_members = true;
                    members.push(Node::opaque(kind));
                }
            }
        }

        if !has_members {
            return Block::new(members);
        }
        Block::new(vec![Node::Value(Value {
            base: Box::new(Node::obj(members)),
            properties: Vec::new(),
        })])
    }

    fn method(&self, node: TsNode<'_>) -> Option<Node> {
        let name = node.child_by_field_name("name")?;
        Some(Node::assign(
            Value::ident(self.text(name)),
            Node::Code(self.code(node)),
        ))
    }

    fn object_members(&self, node: TsNode<'_>) -> Vec<Node> {
        let mut members = Vec::new();
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            match child.kind() {
                "comment" => {
                    if let Some(text) = block_comment_text(self.text(child)) {
                        members.push(Node::comment(&text));
                    }
                }
                "pair" => {
                    let (Some(key), Some(value)) = (
                        child.child_by_field_name("key"),
                        child.child_by_field_name("value"),
                    ) else {
                        continue;
                    };
                    members.push(Node::assign(
                        Value::ident(self.text(key)),
                        self.expression(value),
                    ));
                }
                "method_definition" => {
                    if let Some(method) = self.method(child) {
                        members.push(method);
                    }
                }
                _ => members.push(self.expression(child)),
            }
        }
        members
    }
}

/// Text of a `/* */` comment without its delimiters. JSDoc `*` gutters become
/// spaces so relative indentation survives. Line comments yield `None`.
fn block_comment_text(raw: &str) -> Option<String> {
    let body = raw.strip_prefix("/*")?.strip_suffix("*/")?;

    let text = match body.strip_prefix('*') {
        Some(jsdoc) => jsdoc
            .split('\n')
            .map(|line| {
                let rest = line.trim_start();
                match rest.strip_prefix('*') {
                    Some(after) => {
                        let indent = &line[..line.len() - rest.len()];
                        format!("{} {}", indent, after)
                    }
                    None => line.to_string(),
                }
            })
            .collect::<Vec<_>>()
            .join("\n"),
        None => body.to_string(),
    };

    Some(text.trim_end().to_string())
}
