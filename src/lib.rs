#![forbid(unsafe_code)]
//! testsmith - NUnit/Moq test skeleton generator for C# sources
//!
//! For every class found in a directory of C# files, testsmith synthesizes a
//! companion test skeleton: a fixture that constructs the class under test,
//! substitutes `Mock<T>` doubles for abstraction-typed dependencies, supplies
//! default literals for concrete ones, and stubs one failing test per public
//! method, ready for a human to fill in real assertions.
//!
//! ## Architecture
//!
//! - `frontend` - Source Analyzer: lexer, declaration parser, semantic binder
//! - `extract` - Class Model Extractor: declaration tree → flat class models
//! - `synth` - Dependency classification, default literals, test synthesis
//! - `emit` - Code Emitter: test-file description → canonical C# text
//! - `pipeline` - Four concurrent stages: discover → load → synthesize → write
//! - `cli` - Command-line interface
//!
//! ## Panic Policy
//!
//! Production code uses `Result` with `?`; the `cli` module enforces
//! `#![deny(clippy::unwrap_used)]`. `.unwrap()` and `.expect()` are
//! acceptable in tests.

pub mod cli;
pub mod emit;
pub mod extract;
pub mod frontend;
pub mod model;
pub mod pipeline;
pub mod synth;

pub use frontend::SourceAnalyzer;
pub use model::{ClassModel, GeneratedTestClass, MethodSignature, Parameter, ReturnType, TypeRef};
pub use pipeline::{ConfigError, PipelineConfig, PipelineError, RunSummary};
pub use synth::{Generation, generate_tests, synthesize};
