//! Source Analyzer: the C# front end consumed by the synthesis stage.
//!
//! The analyzer owns the lexer, the declaration parser, and the semantic
//! binder with its builtin value-type catalog.
//!
//! ## Modules
//!
//! - `lexer` - Tokenization of the C# declaration subset
//! - `parser` - Declaration parser (namespaces, classes, member signatures)
//! - `ast` - Syntax-level declaration records
//! - `symbols` - Semantic binding and the builtin catalog
//! - `diagnostics` - `AnalysisError` and syntax errors

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod symbols;

pub use diagnostics::AnalysisError;

use crate::frontend::ast::FileUnit;
use crate::frontend::symbols::{BuiltinCatalog, SemanticBinder};

/// Facade over the front end: parse source text and hand out the binder.
#[derive(Debug, Clone, Copy)]
pub struct SourceAnalyzer {
    catalog: &'static BuiltinCatalog,
}

impl SourceAnalyzer {
    /// An analyzer bound to the standard C# builtin catalog.
    pub fn new() -> Self {
        Self {
            catalog: BuiltinCatalog::standard(),
        }
    }

    /// Parse source text into its declaration tree.
    ///
    /// Input that is not C# yields an empty file unit; input that starts a
    /// declaration and breaks off mid-way is a syntax error, reported as a
    /// file-level `AnalysisError`.
    #[tracing::instrument(skip_all, fields(source_len = source.len()))]
    pub fn parse(&self, source: &str) -> Result<FileUnit, AnalysisError> {
        let tokens = lexer::lex(source);
        parser::parse(&tokens).map_err(|errors| AnalysisError::Syntax { errors })
    }

    /// The semantic binder for this analyzer's catalog.
    pub fn binder(&self) -> SemanticBinder<'static> {
        SemanticBinder::new(self.catalog)
    }

    /// The builtin value-type catalog in use.
    pub fn catalog(&self) -> &'static BuiltinCatalog {
        self.catalog
    }
}

impl Default for SourceAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
