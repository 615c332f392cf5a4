//! Default Value Resolver: a literal token for any value-bearing type.
//!
//! Total function: unresolvable input degrades to the null literal, it never
//! raises. A non-nullable builtin value type renders its zero value; reference
//! types, nullable value types, and unknown names all render `null`.

use crate::frontend::symbols::BuiltinKind;
use crate::model::TypeRef;

/// The C# null literal.
pub const NULL_LITERAL: &str = "null";

/// Resolve the default literal for a type.
pub fn default_literal(ty: &TypeRef) -> &'static str {
    match ty.builtin {
        Some(builtin) if builtin.kind == BuiltinKind::Value && !ty.nullable => {
            builtin.zero_literal
        }
        _ => NULL_LITERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::symbols::{BuiltinCatalog, SemanticBinder};

    fn bind(text: &str) -> TypeRef {
        SemanticBinder::new(BuiltinCatalog::standard())
            .bind(text, "T")
            .expect("bind failed")
    }

    #[test]
    fn test_int_defaults_to_zero() {
        assert_eq!(default_literal(&bind("int")), "0");
    }

    #[test]
    fn test_bool_defaults_to_false() {
        assert_eq!(default_literal(&bind("bool")), "false");
    }

    #[test]
    fn test_char_defaults_to_nul_escape() {
        assert_eq!(default_literal(&bind("char")), "'\\0'");
    }

    #[test]
    fn test_decimal_defaults_to_zero() {
        assert_eq!(default_literal(&bind("decimal")), "0");
    }

    #[test]
    fn test_string_is_a_reference_type() {
        assert_eq!(default_literal(&bind("string")), "null");
    }

    #[test]
    fn test_nullable_value_type_defaults_to_null() {
        assert_eq!(default_literal(&bind("int?")), "null");
    }

    #[test]
    fn test_unknown_type_defaults_to_null() {
        assert_eq!(default_literal(&bind("Widget")), "null");
    }

    #[test]
    fn test_canonical_alias_still_resolves() {
        assert_eq!(default_literal(&bind("System.Int32")), "0");
    }

    #[test]
    fn test_array_defaults_to_null() {
        assert_eq!(default_literal(&bind("int[]")), "null");
    }
}
