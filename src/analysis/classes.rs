// Class documentation
//
// A populated class body is a single object literal whose members are the class's
// declarations; an empty one holds at most a comment. Members that are not
// `name = (args) -> ...` are not methods and are left out.

use crate::analysis::functions::{body_docstring, document_function};
use crate::analysis::names::{reference_name, require_name};
use crate::analysis::whitespace::remove_leading_whitespace;
use crate::config::ExtractConfig;
use crate::error::{Error, Result};
use crate::model::ClassDoc;
use crate::parser::ast::{Class, Node, Tag, Value};

/// Document a class definition, bare or bound by an assignment
pub fn document_class(node: &Node, config: &ExtractConfig) -> Result<ClassDoc> {
    let (class, binding) = unwrap_class(node)?;

    let name = match class.variable.as_ref().or(binding) {
        Some(variable) => require_name(variable, "class")?,
        None => return Err(Error::malformed("class has no name")),
    };

    let (docstring, members) = match class_members(class) {
        Some(members) => (member_docstring(members), members),
        None => (body_docstring(&class.body), &[][..]),
    };

    let methods = members
        .iter()
        .filter(|member| is_method(member, &name))
        .filter_map(Node::as_assign)
        .map(|method| document_function(method, config))
        .collect::<Result<Vec<_>>>()?;

    Ok(ClassDoc {
        parent: class.parent.as_deref().and_then(reference_name),
        name,
        docstring,
        methods,
    })
}

/// The class node plus the assignment target binding it, if any
fn unwrap_class(node: &Node) -> Result<(&Class, Option<&Value>)> {
    match node {
        Node::Class(class) => Ok((class, None)),
        Node::Assign(assign) => match assign.value.as_ref() {
            Node::Class(class) => Ok((class, Some(&assign.variable))),
            other => Err(Error::malformed(format!(
                "expected a class definition, found an assignment of {}",
                other.tag()
            ))),
        },
        other => Err(Error::malformed(format!(
            "expected a class definition, found {}",
            other.tag()
        ))),
    }
}

/// Member declarations of a populated class body; `None` for an empty class
fn class_members(class: &Class) -> Option<&[Node]> {
    let first = class.body.first()?.as_value()?;
    match first.base.as_ref() {
        Node::Obj(obj) => Some(&obj.objects),
        other => {
            tracing::debug!(base = %other.tag(), "class body is not an object literal");
            Some(&[])
        }
    }
}

fn member_docstring(members: &[Node]) -> Option<String> {
    members
        .first()
        .and_then(Node::comment_text)
        .and_then(remove_leading_whitespace)
}

fn is_method(member: &Node, class_name: &str) -> bool {
    if member.is_function_assign() {
        return true;
    }
    if member.tag() != Tag::Comment {
        tracing::debug!(class = class_name, member = %member.tag(), "skipping non-method member");
    }
    false
}
