//! Dependency classification: mock it or give it a value.
//!
//! Two decision paths, independently testable:
//!
//! 1. **Semantic**: a type the binder resolved to a builtin catalog entry is
//!    never an abstraction and is classified `Value` outright.
//! 2. **Syntactic fallback**: with no semantic information, the inherited
//!    naming convention applies: a simple name starting with `I` followed by
//!    an uppercase letter reads as an abstraction and is classified `Mock`.
//!
//! The fallback is a convention, not an interface check: a concrete class
//! named `Image` is misclassified as `Mock`. That behavior is inherited from
//! the original generator and kept deliberately.

use crate::model::TypeRef;

/// How a dependency gets satisfied in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyKind {
    /// Substitute a test double (`new Mock<T>()`)
    Mock,
    /// Supply a default literal
    Value,
}

/// Classify a type reference.
pub fn classify(ty: &TypeRef) -> DependencyKind {
    if ty.builtin.is_some() {
        return DependencyKind::Value;
    }
    if follows_abstraction_convention(ty.simple_name()) {
        DependencyKind::Mock
    } else {
        DependencyKind::Value
    }
}

/// The syntactic convention on its own: leading `I` followed by an uppercase
/// letter.
pub fn follows_abstraction_convention(simple_name: &str) -> bool {
    let mut chars = simple_name.chars();
    chars.next() == Some('I') && chars.next().is_some_and(|c| c.is_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::symbols::BuiltinCatalog;

    fn unbound(name: &str) -> TypeRef {
        TypeRef {
            name: name.to_string(),
            builtin: None,
            nullable: false,
        }
    }

    // ========================================================================
    // Syntactic path
    // ========================================================================

    #[test]
    fn test_interface_convention_is_mock() {
        assert_eq!(classify(&unbound("IDisposable")), DependencyKind::Mock);
        assert_eq!(classify(&unbound("IThing")), DependencyKind::Mock);
    }

    #[test]
    fn test_plain_class_is_value() {
        assert_eq!(classify(&unbound("Widget")), DependencyKind::Value);
    }

    #[test]
    fn test_lowercase_after_i_is_value() {
        assert_eq!(classify(&unbound("item")), DependencyKind::Value);
        assert_eq!(classify(&unbound("Input")), DependencyKind::Value);
    }

    #[test]
    fn test_inherited_misclassification_is_kept() {
        // A concrete class that happens to match the convention is mocked.
        assert_eq!(classify(&unbound("Image")), DependencyKind::Mock);
    }

    #[test]
    fn test_bare_i_is_value() {
        assert_eq!(classify(&unbound("I")), DependencyKind::Value);
    }

    #[test]
    fn test_generic_interface_is_mock() {
        assert_eq!(classify(&unbound("IList<int>")), DependencyKind::Mock);
    }

    // ========================================================================
    // Semantic path
    // ========================================================================

    #[test]
    fn test_builtin_binding_overrides_convention() {
        let catalog = BuiltinCatalog::standard();
        let ty = TypeRef {
            name: "int".to_string(),
            builtin: catalog.resolve("int"),
            nullable: false,
        };
        assert_eq!(classify(&ty), DependencyKind::Value);
    }

    #[test]
    fn test_convention_helper_is_independent() {
        assert!(follows_abstraction_convention("IFoo"));
        assert!(!follows_abstraction_convention("Foo"));
        assert!(!follows_abstraction_convention(""));
        assert!(!follows_abstraction_convention("Ix"));
    }
}
