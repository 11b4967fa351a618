// AST types consumed by the documenter
//
// Frontends lower their own syntax trees into these node types. The shape follows
// the CoffeeScript node vocabulary (Value/Assign/Code/Class/...) and is serializable
// so a tree produced by an external tool can be loaded as JSON.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Root of one parsed file: the ordered top-level statements
pub type Program = Block;

/// An ordered sequence of statements
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    #[serde(default)]
    pub expressions: Vec<Node>,
}

impl Block {
    pub fn new(expressions: Vec<Node>) -> Self {
        Self { expressions }
    }

    /// First statement of the block, if any
    pub fn first(&self) -> Option<&Node> {
        self.expressions.first()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }
}

/// A syntax node, one variant per syntactic category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// Block comment
    Comment(Comment),
    /// Reference: a base plus zero or more property accesses
    Value(Value),
    /// Identifier, string, or number token
    Literal(Literal),
    /// Object literal
    Obj(Obj),
    /// `variable = value`
    Assign(Assign),
    /// `callee(args...)`
    Call(Call),
    /// Unary or binary operation
    Op(Op),
    /// Function literal
    Code(Code),
    /// Class definition
    Class(Class),
    /// Any construct the documenter never looks inside
    Opaque(Opaque),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub base: Box<Node>,
    #[serde(default)]
    pub properties: Vec<Access>,
}

/// A `.name` property access
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Access {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    /// Raw token text; string literals keep their quotes
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obj {
    #[serde(default)]
    pub objects: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assign {
    pub variable: Value,
    pub value: Box<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Call {
    pub variable: Box<Node>,
    #[serde(default)]
    pub args: Vec<Node>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Op {
    pub operator: String,
    pub first: Box<Node>,
    #[serde(default)]
    pub second: Option<Box<Node>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default)]
    pub params: Vec<Param>,
    #[serde(default)]
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Param {
    pub name: String,
    /// Collects the remaining arguments
    #[serde(default)]
    pub splat: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Class {
    #[serde(default)]
    pub variable: Option<Value>,
    #[serde(default)]
    pub parent: Option<Box<Node>>,
    #[serde(default)]
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Opaque {
    /// Frontend-specific node kind
    pub kind: String,
}

/// Syntactic category of a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tag {
    Block,
    Comment,
    Value,
    Access,
    Literal,
    Obj,
    Assign,
    Call,
    Op,
    Code,
    Param,
    Class,
    Opaque,
}

impl Tag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Block => "Block",
            Tag::Comment => "Comment",
            Tag::Value => "Value",
            Tag::Access => "Access",
            Tag::Literal => "Literal",
            Tag::Obj => "Obj",
            Tag::Assign => "Assign",
            Tag::Call => "Call",
            Tag::Op => "Op",
            Tag::Code => "Code",
            Tag::Param => "Param",
            Tag::Class => "Class",
            Tag::Opaque => "Opaque",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node {
    pub fn tag(&self) -> Tag {
        match self {
            Node::Comment(_) => Tag::Comment,
            Node::Value(_) => Tag::Value,
            Node::Literal(_) => Tag::Literal,
            Node::Obj(_) => Tag::Obj,
            Node::Assign(_) => Tag::Assign,
            Node::Call(_) => Tag::Call,
            Node::Op(_) => Tag::Op,
            Node::Code(_) => Tag::Code,
            Node::Class(_) => Tag::Class,
            Node::Opaque(_) => Tag::Opaque,
        }
    }

    /// Identifier or other literal token wrapped in a reference
    pub fn ident(name: &str) -> Self {
        Node::Value(Value::ident(name))
    }

    /// Quoted string literal; `raw` keeps its quotes
    pub fn string(raw: &str) -> Self {
        Node::Value(Value::ident(raw))
    }

    pub fn comment(text: &str) -> Self {
        Node::Comment(Comment {
            comment: text.to_string(),
        })
    }

    pub fn assign(variable: Value, value: Node) -> Self {
        Node::Assign(Assign {
            variable,
            value: Box::new(value),
        })
    }

    pub fn call(callee: Node, args: Vec<Node>) -> Self {
        Node::Call(Call {
            variable: Box::new(callee),
            args,
        })
    }

    pub fn binary(operator: &str, first: Node, second: Node) -> Self {
        Node::Op(Op {
            operator: operator.to_string(),
            first: Box::new(first),
            second: Some(Box::new(second)),
        })
    }

    pub fn obj(objects: Vec<Node>) -> Self {
        Node::Obj(Obj { objects })
    }

    pub fn opaque(kind: &str) -> Self {
        Node::Opaque(Opaque {
            kind: kind.to_string(),
        })
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Node::Value(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_assign(&self) -> Option<&Assign> {
        match self {
            Node::Assign(assign) => Some(assign),
            _ => None,
        }
    }

    pub fn as_code(&self) -> Option<&Code> {
        match self {
            Node::Code(code) => Some(code),
            _ => None,
        }
    }

    /// Text of a comment node
    pub fn comment_text(&self) -> Option<&str> {
        match self {
            Node::Comment(c) => Some(&c.comment),
            _ => None,
        }
    }

    /// `true` for `x = <function literal>`
    pub fn is_function_assign(&self) -> bool {
        matches!(self, Node::Assign(a) if a.value.tag() == Tag::Code)
    }

    /// `true` for a class definition, bare or bound by an assignment
    pub fn is_class_definition(&self) -> bool {
        match self {
            Node::Class(_) => true,
            Node::Assign(a) => a.value.tag() == Tag::Class,
            _ => false,
        }
    }
}

impl Value {
    /// Reference to a bare identifier
    pub fn ident(name: &str) -> Self {
        Self {
            base: Box::new(Node::Literal(Literal {
                value: name.to_string(),
            })),
            properties: Vec::new(),
        }
    }

    /// Reference parsed from a dotted path such as `exports.util.helper`
    pub fn dotted(path: &str) -> Self {
        let mut parts = path.split('.');
        let mut value = Self::ident(parts.next().unwrap_or_default());
        value.properties = parts
            .map(|name| Access {
                name: name.to_string(),
            })
            .collect();
        value
    }

    /// Raw literal text of the base, if the base is a literal
    pub fn base_literal(&self) -> Option<&str> {
        match self.base.as_ref() {
            Node::Literal(literal) => Some(&literal.value),
            _ => None,
        }
    }
}

impl Code {
    pub fn new(params: Vec<Param>, body: Vec<Node>) -> Self {
        Self {
            params,
            body: Block::new(body),
        }
    }
}

impl Param {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            splat: false,
        }
    }

    pub fn splat(name: &str) -> Self {
        Self {
            name: name.to_string(),
            splat: true,
        }
    }
}
