//! Language-neutral class descriptions shared by the extractor, the
//! synthesizer, and the pipeline.
//!
//! Everything here is an immutable value object: created once per pipeline
//! item, never mutated afterwards.

use crate::frontend::symbols::BuiltinType;

/// A resolved reference to a type as it appears in a signature.
///
/// `name` is the display form with namespace prefixes stripped and builtin
/// aliases folded to their canonical keyword (`Int32` → `int`). `builtin` is
/// the semantic binding when the type is a well-known builtin; user-defined
/// types carry no binding and are classified by naming convention instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub builtin: Option<&'static BuiltinType>,
    pub nullable: bool,
}

impl TypeRef {
    /// The simple name used for identifier derivation and classification:
    /// the display name cut before any generic or array suffix.
    pub fn simple_name(&self) -> &str {
        let end = self
            .name
            .find(|c| c == '<' || c == '[' || c == '?')
            .unwrap_or(self.name.len());
        &self.name[..end]
    }
}

/// A single formal parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub ty: TypeRef,
}

/// Return type of a method: `void` or a concrete type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReturnType {
    Void,
    Type(TypeRef),
}

impl ReturnType {
    pub fn is_void(&self) -> bool {
        matches!(self, ReturnType::Void)
    }
}

/// A bound method (or constructor) signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub return_type: ReturnType,
    pub is_static: bool,
}

/// One class found in a source file, ready for synthesis.
///
/// At most one constructor is considered: the first one in declaration order.
/// Overloads beyond the first are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassModel {
    pub name: String,
    pub namespace: String,
    pub is_static: bool,
    pub constructor: Option<MethodSignature>,
    pub public_methods: Vec<MethodSignature>,
}

/// A synthesized test class, ready to be written out.
///
/// `file_name` is derived from the source class name (`<Name>Tests.cs`). Two
/// classes with the same simple name anywhere in the input set collide, and
/// the later write overwrites the earlier one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedTestClass {
    pub file_name: String,
    pub source_text: String,
}

impl GeneratedTestClass {
    pub fn new(file_name: impl Into<String>, source_text: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            source_text: source_text.into(),
        }
    }
}
