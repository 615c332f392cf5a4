//! Declaration records produced by the parser.
//!
//! These are syntax-level: type references are raw text, visibility is a list
//! of modifier words. The extractor turns them into bound [`ClassModel`]s.
//!
//! [`ClassModel`]: crate::model::ClassModel

/// Byte range in the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A parsed source file: the top-level declaration list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileUnit {
    pub decls: Vec<Decl>,
}

/// A top-level or namespace-level declaration we track.
///
/// Declarations the generator has no use for (interfaces, structs, enums,
/// delegates, fields, properties) are skipped structurally by the parser and
/// never appear here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decl {
    Namespace(NamespaceDecl),
    Class(ClassDecl),
}

/// `namespace A.B { ... }` or the file-scoped `namespace A.B;` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceDecl {
    pub name: String,
    pub decls: Vec<Decl>,
    pub span: Span,
}

/// A class declaration with the members the generator cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    pub name: String,
    pub modifiers: Vec<String>,
    pub constructors: Vec<RawMethod>,
    pub methods: Vec<RawMethod>,
    pub nested: Vec<ClassDecl>,
    pub span: Span,
}

impl ClassDecl {
    pub fn has_modifier(&self, word: &str) -> bool {
        self.modifiers.iter().any(|m| m == word)
    }
}

/// An unbound method or constructor declaration.
///
/// `return_type` is `None` for constructors; method return types (including
/// `void`) are kept as raw text for the semantic binder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMethod {
    pub name: String,
    pub modifiers: Vec<String>,
    pub return_type: Option<String>,
    pub params: Vec<RawParam>,
    pub span: Span,
}

impl RawMethod {
    pub fn has_modifier(&self, word: &str) -> bool {
        self.modifiers.iter().any(|m| m == word)
    }
}

/// An unbound formal parameter: raw type text plus the declared name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawParam {
    pub name: String,
    pub type_text: String,
}
