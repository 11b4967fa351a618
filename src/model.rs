//! Documentation records produced by the documenter.
//!
//! These are plain data: a renderer turns them into HTML, Markdown, or whatever
//! else it likes.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Local binding name -> imported module path
pub type DependencyMap = BTreeMap<String, String>;

/// Everything documented about one module
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModuleDoc {
    pub docstring: Option<String>,
    pub deps: DependencyMap,
    pub classes: Vec<ClassDoc>,
    pub functions: Vec<FunctionDoc>,
}

impl ModuleDoc {
    /// Check if nothing was documented
    pub fn is_empty(&self) -> bool {
        self.docstring.is_none()
            && self.deps.is_empty()
            && self.classes.is_empty()
            && self.functions.is_empty()
    }

    pub fn class(&self, name: &str) -> Option<&ClassDoc> {
        self.classes.iter().find(|c| c.name == name)
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDoc> {
        self.functions.iter().find(|f| f.name == name)
    }
}

/// A documented class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDoc {
    pub name: String,
    pub docstring: Option<String>,
    pub parent: Option<String>,
    /// Methods in declaration order
    pub methods: Vec<FunctionDoc>,
}

impl ClassDoc {
    pub fn method(&self, name: &str) -> Option<&FunctionDoc> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// A documented function or method
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDoc {
    pub name: String,
    pub docstring: Option<String>,
    /// Parameter names in declaration order; splats carry the variadic marker
    pub params: Vec<String>,
}

impl FunctionDoc {
    /// `name(a, b, rest...)`
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.params.join(", "))
    }
}
