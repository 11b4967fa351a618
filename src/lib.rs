//! Coffeedoc - Extract documentation from parsed source trees
//!
//! Walks the syntax tree of a module and collects its docstring, its
//! `require` dependencies, its classes and its functions into plain records
//! ready for rendering.

pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;

// Re-export main types
pub use analysis::{document_module, Documenter};
pub use config::{Config, ExtractConfig};
pub use error::{Error, Result};
pub use model::{ClassDoc, DependencyMap, FunctionDoc, ModuleDoc};
pub use parser::{JavaScriptParser, JsonAstParser, Layout, NodeSelector, SourceParser};
