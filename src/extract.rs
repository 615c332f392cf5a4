//! Class Model Extractor: declaration tree in, flat bound class models out.
//!
//! The walk is an explicit work stack over the declaration tree, so recursion
//! depth never couples to input nesting. Binding failures are isolated per
//! class: the offending class lands in `skipped` and the rest of the file is
//! still extracted.

use crate::frontend::ast::{ClassDecl, Decl, FileUnit, RawMethod};
use crate::frontend::diagnostics::AnalysisError;
use crate::frontend::symbols::SemanticBinder;
use crate::model::{ClassModel, MethodSignature, Parameter, ReturnType};

/// Result of extracting one file: bound models plus per-class skips.
#[derive(Debug, Default)]
pub struct Extraction {
    pub classes: Vec<ClassModel>,
    pub skipped: Vec<AnalysisError>,
}

/// One pending visit: a declaration subtree or a bare (nested) class, each
/// carrying its enclosing namespace.
enum Item<'a> {
    Tree(String, &'a Decl),
    Class(String, &'a ClassDecl),
}

/// Extract every class found anywhere in the file, in declaration order.
pub fn extract(file: &FileUnit, binder: &SemanticBinder<'_>) -> Extraction {
    let mut out = Extraction::default();
    // Seeded in reverse so popping restores declaration order.
    let mut work: Vec<Item<'_>> = file
        .decls
        .iter()
        .rev()
        .map(|d| Item::Tree(String::new(), d))
        .collect();

    while let Some(item) = work.pop() {
        match item {
            Item::Tree(namespace, Decl::Namespace(ns)) => {
                let qualified = if namespace.is_empty() {
                    ns.name.clone()
                } else {
                    format!("{namespace}.{}", ns.name)
                };
                for child in ns.decls.iter().rev() {
                    work.push(Item::Tree(qualified.clone(), child));
                }
            }
            Item::Tree(namespace, Decl::Class(class)) | Item::Class(namespace, class) => {
                match bind_class(class, &namespace, binder) {
                    Ok(model) => out.classes.push(model),
                    Err(e) => out.skipped.push(e),
                }
                // Nested classes share the enclosing namespace
                for nested in class.nested.iter().rev() {
                    work.push(Item::Class(namespace.clone(), nested));
                }
            }
        }
    }
    out
}

fn bind_class(
    class: &ClassDecl,
    namespace: &str,
    binder: &SemanticBinder<'_>,
) -> Result<ClassModel, AnalysisError> {
    // First constructor in declaration order; later overloads are ignored
    let constructor = match class.constructors.first() {
        Some(ctor) => Some(bind_method(ctor, &class.name, binder)?),
        None => None,
    };

    let mut public_methods = Vec::new();
    for method in &class.methods {
        if method.has_modifier("public") {
            public_methods.push(bind_method(method, &class.name, binder)?);
        }
    }

    Ok(ClassModel {
        name: class.name.clone(),
        namespace: namespace.to_string(),
        is_static: class.has_modifier("static"),
        constructor,
        public_methods,
    })
}

fn bind_method(
    method: &RawMethod,
    class_name: &str,
    binder: &SemanticBinder<'_>,
) -> Result<MethodSignature, AnalysisError> {
    let mut parameters = Vec::new();
    for param in &method.params {
        parameters.push(Parameter {
            name: param.name.clone(),
            ty: binder.bind(&param.type_text, class_name)?,
        });
    }

    let return_type = match method.return_type.as_deref() {
        None | Some("void") => ReturnType::Void,
        Some(text) => ReturnType::Type(binder.bind(text, class_name)?),
    };

    Ok(MethodSignature {
        name: method.name.clone(),
        parameters,
        return_type,
        is_static: method.has_modifier("static"),
    })
}
