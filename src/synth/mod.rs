//! Test skeleton synthesis.
//!
//! ## Modules
//!
//! - `classify` - Mock-or-value dependency classification
//! - `defaults` - Default literal resolution
//! - `testclass` - The synthesizer proper
//!
//! `generate_tests` is the whole front half of the pipeline's processing
//! stage: parse a source text, extract its classes, synthesize one test class
//! per extracted class (fan-out: zero or more outputs per input).

pub mod classify;
pub mod defaults;
pub mod testclass;

pub use classify::{DependencyKind, classify};
pub use defaults::default_literal;
pub use testclass::synthesize;

use crate::extract;
use crate::frontend::{AnalysisError, SourceAnalyzer};
use crate::model::GeneratedTestClass;

/// Everything one source text produced: generated classes plus per-class
/// skips.
#[derive(Debug, Default)]
pub struct Generation {
    pub classes: Vec<GeneratedTestClass>,
    pub skipped: Vec<AnalysisError>,
}

/// Generate test skeletons for every class in one source text.
///
/// A file-level parse failure is the only error; classes whose types cannot
/// be bound are skipped individually and reported in
/// [`Generation::skipped`].
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn generate_tests(source: &str) -> Result<Generation, AnalysisError> {
    let analyzer = SourceAnalyzer::new();
    let file = analyzer.parse(source)?;
    let extraction = extract::extract(&file, &analyzer.binder());
    let classes = extraction.classes.iter().map(synthesize).collect();
    Ok(Generation {
        classes,
        skipped: extraction.skipped,
    })
}
