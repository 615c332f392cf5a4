//! Analyzer diagnostics.
//!
//! `AnalysisError` is the unit-of-isolation error: a syntax error skips the
//! whole file, an unresolved type skips the offending class. Neither is fatal
//! to a pipeline run.

use miette::Diagnostic;
use thiserror::Error;

use crate::frontend::ast::Span;

/// A structural parse error with its source location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub message: String,
    pub span: Span,
}

impl SyntaxError {
    pub fn new(message: impl Into<String>, span: Span) -> Self {
        Self {
            message: message.into(),
            span,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at byte {}", self.message, self.span.start)
    }
}

/// Why a source unit (file or class) was skipped.
#[derive(Debug, Error, Diagnostic)]
pub enum AnalysisError {
    /// The file could not be parsed at all; the whole file is skipped.
    #[error("cannot parse source file: {}", first_message(.errors))]
    #[diagnostic(code(testsmith::frontend::syntax))]
    Syntax { errors: Vec<SyntaxError> },

    /// A parameter or return type of `class_name` could not be bound; only
    /// that class is skipped.
    #[error("cannot resolve type `{type_text}` in class `{class_name}`")]
    #[diagnostic(code(testsmith::frontend::unresolved_type))]
    UnresolvedType {
        class_name: String,
        type_text: String,
    },
}

fn first_message(errors: &[SyntaxError]) -> String {
    match errors.first() {
        Some(e) => e.to_string(),
        None => "unknown error".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display_includes_first_message() {
        let err = AnalysisError::Syntax {
            errors: vec![SyntaxError::new("unexpected end of file", Span::new(10, 10))],
        };
        let text = err.to_string();
        assert!(text.contains("unexpected end of file"));
        assert!(text.contains("byte 10"));
    }

    #[test]
    fn test_unresolved_type_display_names_class_and_type() {
        let err = AnalysisError::UnresolvedType {
            class_name: "Widget".into(),
            type_text: "".into(),
        };
        assert!(err.to_string().contains("Widget"));
    }
}
