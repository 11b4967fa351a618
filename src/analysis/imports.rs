// Dependency extraction from `require`-style bindings
//
// Two idioms are recognized:
//
//     local = require("path/to/module")
//     local = require(__dirname + "/path/to/module")
//
// The directory prefix of the second form becomes the configured relative prefix
// (`.` by default). Anything else contributes no dependency.

use crate::analysis::names::full_name;
use crate::config::ExtractConfig;
use crate::model::DependencyMap;
use crate::parser::ast::{Assign, Node};

/// Collect the module's dependencies from its top-level statements
pub fn dependencies(statements: &[Node], config: &ExtractConfig) -> DependencyMap {
    let mut deps = DependencyMap::new();

    for assign in statements.iter().filter_map(Node::as_assign) {
        let Some(path) = import_path(assign, config) else {
            continue;
        };
        let Some(local) = full_name(&assign.variable) else {
            tracing::debug!(path = %path, "import bound to a pattern; skipping");
            continue;
        };
        deps.insert(local, path);
    }

    deps
}

/// Module path imported by `assign`, if its value is an import call
fn import_path(assign: &Assign, config: &ExtractConfig) -> Option<String> {
    let Node::Call(call) = assign.value.as_ref() else {
        return None;
    };
    let callee = call.variable.as_value().and_then(full_name)?;
    if callee != config.import_function {
        return None;
    }

    let path = call.args.first().and_then(|arg| decode_argument(arg, config));
    if path.is_none() {
        tracing::debug!(
            callee = %callee,
            argument = call.args.first().map(|a| a.tag().as_str()).unwrap_or("none"),
            "unrecognized import argument"
        );
    }
    path
}

fn decode_argument(arg: &Node, config: &ExtractConfig) -> Option<String> {
    literal_path(arg).or_else(|| relative_path(arg, config))
}

/// `"path/to/module"`
fn literal_path(arg: &Node) -> Option<String> {
    let literal = arg.as_value()?.base_literal()?;
    Some(strip_quotes(literal))
}

/// `prefix + "/path/to/module"`
fn relative_path(arg: &Node, config: &ExtractConfig) -> Option<String> {
    let Node::Op(op) = arg else {
        return None;
    };
    if op.operator != "+" {
        return None;
    }
    let suffix = literal_path(op.second.as_deref()?)?;
    Some(format!("{}{}", config.relative_prefix, suffix))
}

fn strip_quotes(text: &str) -> String {
    text.chars().filter(|c| *c != '\'' && *c != '"').collect()
}
