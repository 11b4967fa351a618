// Tag assignment over a parsed program
//
// Every node gets an id from its depth-first pre-order position, and the tag table
// maps ids to syntactic categories. The tree itself is never touched.

use crate::parser::ast::{Block, Node, Program, Tag, Value};

/// Pre-order position of a node within its program
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

/// Side table of node tags, indexed by [`NodeId`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TagTable {
    tags: Vec<Tag>,
}

impl TagTable {
    pub fn get(&self, id: NodeId) -> Option<Tag> {
        self.tags.get(id.0).copied()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    /// Number of nodes carrying `tag`
    pub fn count(&self, tag: Tag) -> usize {
        self.tags.iter().filter(|t| **t == tag).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, Tag)> + '_ {
        self.tags.iter().enumerate().map(|(i, t)| (NodeId(i), *t))
    }
}

/// Tag every node of `program`, root block included
pub fn tag_tree(program: &Program) -> TagTable {
    let mut table = TagTable::default();
    for_each_node(program, |_, tag| table.tags.push(tag));
    table
}

/// Ordered top-level statements of `program`
pub fn statements(program: &Program) -> &[Node] {
    &program.expressions
}

/// Visit every node exactly once, depth-first, parents before children
pub fn for_each_node(program: &Program, mut visit: impl FnMut(NodeId, Tag)) {
    let mut walker = Walker {
        next: 0,
        visit: &mut visit,
    };
    walker.block(program);
}

struct Walker<'v, F> {
    next: usize,
    visit: &'v mut F,
}

impl<F: FnMut(NodeId, Tag)> Walker<'_, F> {
    fn emit(&mut self, tag: Tag) {
        (self.visit)(NodeId(self.next), tag);
        self.next += 1;
    }

    fn block(&mut self, block: &Block) {
        self.emit(Tag::Block);
        for node in &block.expressions {
            self.node(node);
        }
    }

    fn value(&mut self, value: &Value) {
        self.emit(Tag::Value);
        self.node(&value.base);
        for _ in &value.properties {
            self.emit(Tag::Access);
        }
    }

    fn node(&mut self, node: &Node) {
        match node {
            Node::Value(value) => self.value(value),
            Node::Comment(_) | Node::Literal(_) | Node::Opaque(_) => self.emit(node.tag()),
            Node::Obj(obj) => {
                self.emit(Tag::Obj);
                for member in &obj.objects {
                    self.node(member);
                }
            }
            Node::Assign(assign) => {
                self.emit(Tag::Assign);
                self.value(&assign.variable);
                self.node(&assign.value);
            }
            Node::Call(call) => {
                self.emit(Tag::Call);
                self.node(&call.variable);
                for arg in &call.args {
                    self.node(arg);
                }
            }
            Node::Op(op) => {
                self.emit(Tag::Op);
                self.node(&op.first);
                if let Some(second) = &op.second {
                    self.node(second);
                }
            }
            Node::Code(code) => {
                self.emit(Tag::Code);
                for _ in &code.params {
                    self.emit(Tag::Param);
                }
                self.block(&code.body);
            }
            Node::Class(class) => {
                self.emit(Tag::Class);
                if let Some(variable) = &class.variable {
                    self.value(variable);
                }
                if let Some(parent) = &class.parent {
                    self.node(parent);
                }
                self.block(&class.body);
            }
        }
    }
}
