// Function documentation

use crate::analysis::names::require_name;
use crate::analysis::whitespace::remove_leading_whitespace;
use crate::config::ExtractConfig;
use crate::error::{Error, Result};
use crate::model::FunctionDoc;
use crate::parser::ast::{Assign, Block, Param};

/// Document `name = (params) -> body`.
///
/// The docstring is a comment opening the body; the assignment target gives
/// the name. Fails only when the value is not a function literal or the target
/// has no name.
pub fn document_function(func: &Assign, config: &ExtractConfig) -> Result<FunctionDoc> {
    let code = func.value.as_code().ok_or_else(|| {
        Error::malformed(format!(
            "expected a function literal, found {}",
            func.value.tag()
        ))
    })?;

    let doc = FunctionDoc {
        name: require_name(&func.variable, "function")?,
        docstring: body_docstring(&code.body),
        params: code
            .params
            .iter()
            .map(|p| describe_param(p, config))
            .collect(),
    };
    tracing::trace!(name = %doc.name, params = doc.params.len(), "documented function");
    Ok(doc)
}

/// Normalized text of a non-empty comment opening `body`
pub(crate) fn body_docstring(body: &Block) -> Option<String> {
    body.first()
        .and_then(|first| first.comment_text())
        .filter(|text| !text.is_empty())
        .and_then(remove_leading_whitespace)
}

fn describe_param(param: &Param, config: &ExtractConfig) -> String {
    if param.splat {
        format!("{}{}", param.name, config.variadic_marker)
    } else {
        param.name.clone()
    }
}
