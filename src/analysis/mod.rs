// Analysis module: turns parsed programs into documentation records

pub mod classes;
pub mod functions;
pub mod imports;
pub mod names;
pub mod tagger;
pub mod whitespace;

pub use classes::document_class;
pub use functions::document_function;
pub use imports::dependencies;
pub use names::full_name;
pub use tagger::{tag_tree, NodeId, TagTable};
pub use whitespace::remove_leading_whitespace;

use crate::config::{Config, ExtractConfig};
use crate::error::{Error, Result};
use crate::model::ModuleDoc;
use crate::parser::{Node, NodeSelector, Program, SourceParser, Tag};

/// Module documenter: parse, tag, and extract
#[derive(Debug, Clone, Default)]
pub struct Documenter {
    config: ExtractConfig,
}

impl Documenter {
    /// Create a documenter with the given configuration
    pub fn new(config: Config) -> Self {
        Self {
            config: config.extract,
        }
    }

    /// Extraction settings in effect, including the layout used by [`Self::document`]
    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Document a module using the configured layout
    pub fn document<P>(&self, source: &str, parser: &mut P) -> Result<ModuleDoc>
    where
        P: SourceParser + ?Sized,
    {
        self.document_module(source, parser, &self.config.layout)
    }

    /// Document a module from its source text
    pub fn document_module<P, S>(
        &self,
        source: &str,
        parser: &mut P,
        selector: &S,
    ) -> Result<ModuleDoc>
    where
        P: SourceParser + ?Sized,
        S: NodeSelector + ?Sized,
    {
        let program = parser.parse(source)?;
        self.document_program(&program, selector)
    }

    /// Document an already parsed module
    pub fn document_program<S>(&self, program: &Program, selector: &S) -> Result<ModuleDoc>
    where
        S: NodeSelector + ?Sized,
    {
        let tags = tag_tree(program);
        let statements = tagger::statements(program);

        let docstring = statements
            .first()
            .and_then(Node::comment_text)
            .and_then(remove_leading_whitespace);

        let deps = dependencies(statements, &self.config);

        let classes = selector
            .classes(statements)
            .into_iter()
            .map(|node| document_class(node, &self.config))
            .collect::<Result<Vec<_>>>()?;

        let functions = selector
            .functions(statements)
            .into_iter()
            .map(|node| {
                let assign = node.as_assign().ok_or_else(|| {
                    Error::malformed(format!("expected a function binding, found {}", node.tag()))
                })?;
                document_function(assign, &self.config)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            nodes = tags.len(),
            statements = statements.len(),
            comments = tags.count(Tag::Comment),
            deps = deps.len(),
            classes = classes.len(),
            functions = functions.len(),
            "documented module"
        );

        Ok(ModuleDoc {
            docstring,
            deps,
            classes,
            functions,
        })
    }
}

/// Document a module with the default configuration
pub fn document_module<P, S>(source: &str, parser: &mut P, selector: &S) -> Result<ModuleDoc>
where
    P: SourceParser + ?Sized,
    S: NodeSelector + ?Sized,
{
    Documenter::default().document_module(source, parser, selector)
}
