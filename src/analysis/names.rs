// Dotted names for reference nodes

use crate::error::{Error, Result};
use crate::parser::ast::{Node, Value};

/// Dotted name of a reference: the base identifier followed by each accessed
/// property, e.g. `exports.util.helper`. `None` when the base is not a literal
/// (a destructuring pattern, a call result, ...).
pub fn full_name(value: &Value) -> Option<String> {
    let mut name = value.base_literal()?.to_string();
    for property in &value.properties {
        name.push('.');
        name.push_str(&property.name);
    }
    Some(name)
}

/// [`full_name`] of a node that is a reference
pub fn reference_name(node: &Node) -> Option<String> {
    node.as_value().and_then(full_name)
}

/// [`full_name`] for a reference the tree guarantees to be named; `what`
/// describes the construct in the error message.
pub fn require_name(value: &Value, what: &str) -> Result<String> {
    full_name(value).ok_or_else(|| {
        Error::malformed(format!(
            "{} is bound to {} instead of a name",
            what,
            value.base.tag()
        ))
    })
}
