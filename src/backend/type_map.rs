//! WebIDL type reference to TypeScript type text
//!
//! Builtin spellings come from the `webidl_core` primitive registry; any other base name is a
//! user-defined reference and passes through unchanged.
//!
//! | WebIDL            | TypeScript                |
//! |-------------------|---------------------------|
//! | `T?`              | `T \| null`               |
//! | `T[]`             | `ReadonlyArray<T>`        |
//! | `sequence<T>`     | `T[]`                     |
//! | `FrozenArray<T>`  | `ReadonlyArray<T>`        |
//! | `Promise<T>`      | `Promise<T>`              |
//! | `record<K, V>`    | `Record<K, V>`            |
//! | `(A or B)`        | `A \| B`                  |

use super::errors::UnsupportedConstructError;
use webidl_core::lang::registry::Support;
use webidl_core::lang::types::{GenericTypeId, generics, primitives};
use webidl_syntax::ast::{TypeKind, TypeRef};

/// Map a type reference to TypeScript.
///
/// ## Errors
/// Nullable arrays (`T[]?`), nested arrays (`T[][]`) and generics without a mapping fail with an
/// [`UnsupportedConstructError`] whose definition/member context is left for the caller to attach.
pub fn map_type(ty: &TypeRef) -> Result<String, UnsupportedConstructError> {
    if ty.array_nullable {
        return Err(UnsupportedConstructError::new(
            format!("nullable array type '{}'", ty),
            ty.span,
        ));
    }
    if ty.array_depth > 1 {
        return Err(UnsupportedConstructError::new(
            format!("nested array type '{}'", ty),
            ty.span,
        ));
    }

    let mut element = map_kind(ty)?;
    if ty.nullable {
        element.push_str(" | null");
    }

    if ty.array_depth == 1 {
        Ok(format!("ReadonlyArray<{}>", element))
    } else {
        Ok(element)
    }
}

/// Map `ty` as the element of a mutable TypeScript array (`T[]`), parenthesizing union-like
/// elements so `(A | null)[]` keeps its meaning.
pub fn map_array_element(ty: &TypeRef) -> Result<String, UnsupportedConstructError> {
    let element = map_type(ty)?;
    if is_union_like(ty) {
        Ok(format!("({})[]", element))
    } else {
        Ok(format!("{}[]", element))
    }
}

/// Return `true` if the mapped text has a top-level `|`.
fn is_union_like(ty: &TypeRef) -> bool {
    ty.array_depth == 0 && (ty.nullable || matches!(ty.kind, TypeKind::Union(_)))
}

fn map_kind(ty: &TypeRef) -> Result<String, UnsupportedConstructError> {
    match &ty.kind {
        TypeKind::Named(name) => Ok(match primitives::ts_spelling(name) {
            Some(ts) => ts.to_string(),
            None => name.clone(),
        }),
        TypeKind::Generic { name, args } => map_generic(ty, name, args),
        TypeKind::Union(types) => {
            let mapped = types.iter().map(map_type).collect::<Result<Vec<_>, _>>()?;
            Ok(mapped.join(" | "))
        }
    }
}

fn map_generic(ty: &TypeRef, name: &str, args: &[TypeRef]) -> Result<String, UnsupportedConstructError> {
    let id = match generics::from_str(name) {
        Some(id) if generics::support(id) == Support::Mapped => id,
        Some(_) => {
            return Err(UnsupportedConstructError::new(format!("generic type '{}'", ty), ty.span));
        }
        None => {
            return Err(UnsupportedConstructError::new(
                format!("unknown generic type '{}'", name),
                ty.span,
            ));
        }
    };

    let expected = generics::arity(id);
    if args.len() != expected {
        return Err(UnsupportedConstructError::new(
            format!(
                "'{}' with {} type argument(s) (expected {})",
                name,
                args.len(),
                expected
            ),
            ty.span,
        ));
    }

    Ok(match (id, args) {
        (GenericTypeId::Sequence, [element]) => map_array_element(element)?,
        (GenericTypeId::FrozenArray, [element]) => format!("ReadonlyArray<{}>", map_type(element)?),
        (GenericTypeId::Promise, [inner]) => format!("Promise<{}>", map_type(inner)?),
        (GenericTypeId::Record, [key, value]) => format!("Record<{}, {}>", map_type(key)?, map_type(value)?),
        _ => {
            return Err(UnsupportedConstructError::new(format!("generic type '{}'", ty), ty.span));
        }
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use webidl_syntax::ast::Span;

    fn generic(name: &str, args: Vec<TypeRef>) -> TypeRef {
        TypeRef {
            kind: TypeKind::Generic {
                name: name.to_string(),
                args,
            },
            nullable: false,
            array_depth: 0,
            array_nullable: false,
            span: Span::default(),
        }
    }

    fn union(types: Vec<TypeRef>) -> TypeRef {
        TypeRef {
            kind: TypeKind::Union(types),
            nullable: false,
            array_depth: 0,
            array_nullable: false,
            span: Span::default(),
        }
    }

    #[test]
    fn test_builtin_names() {
        for (idl, ts) in [
            ("void", "void"),
            ("DOMString", "string"),
            ("unsigned long", "number"),
            ("long", "number"),
            ("unrestricted double", "number"),
            ("octet", "number"),
            ("boolean", "boolean"),
            ("any", "any"),
            ("VoidPtr", "unknown"),
        ] {
            assert_eq!(map_type(&TypeRef::named(idl)).unwrap(), ts, "mapping {}", idl);
        }
    }

    #[test]
    fn test_user_defined_passes_through() {
        assert_eq!(map_type(&TypeRef::named("Vec3")).unwrap(), "Vec3");
    }

    #[test]
    fn test_nullable_puts_null_last() {
        assert_eq!(map_type(&TypeRef::named("long").with_nullable(true)).unwrap(), "number | null");
    }

    #[test]
    fn test_array_sugar() {
        let ty = TypeRef::named("unsigned long").with_array_depth(1);
        assert_eq!(map_type(&ty).unwrap(), "ReadonlyArray<number>");
    }

    #[test]
    fn test_array_of_nullable_wraps_after_nullability() {
        let ty = TypeRef::named("long").with_nullable(true).with_array_depth(1);
        assert_eq!(map_type(&ty).unwrap(), "ReadonlyArray<number | null>");
    }

    #[test]
    fn test_nullable_array_is_unsupported() {
        let mut ty = TypeRef::named("long").with_array_depth(1);
        ty.array_nullable = true;
        let err = map_type(&ty).unwrap_err();
        assert_eq!(err.construct, "nullable array type 'long[]?'");
    }

    #[test]
    fn test_nested_array_is_unsupported() {
        let ty = TypeRef::named("long").with_array_depth(2);
        let err = map_type(&ty).unwrap_err();
        assert_eq!(err.construct, "nested array type 'long[][]'");
    }

    #[test]
    fn test_generics() {
        let seq = generic("sequence", vec![TypeRef::named("DOMString")]);
        assert_eq!(map_type(&seq).unwrap(), "string[]");

        let seq_nullable = generic("sequence", vec![TypeRef::named("long").with_nullable(true)]);
        assert_eq!(map_type(&seq_nullable).unwrap(), "(number | null)[]");

        let frozen = generic("FrozenArray", vec![TypeRef::named("octet")]);
        assert_eq!(map_type(&frozen).unwrap(), "ReadonlyArray<number>");

        let promise = generic("Promise", vec![TypeRef::named("void")]);
        assert_eq!(map_type(&promise).unwrap(), "Promise<void>");

        let record = generic("record", vec![TypeRef::named("DOMString"), TypeRef::named("any")]);
        assert_eq!(map_type(&record).unwrap(), "Record<string, any>");
    }

    #[test]
    fn test_union_and_nullable_union() {
        let ty = union(vec![TypeRef::named("long"), TypeRef::named("DOMString")]);
        assert_eq!(map_type(&ty).unwrap(), "number | string");
        assert_eq!(map_type(&ty.clone().with_nullable(true)).unwrap(), "number | string | null");
        assert_eq!(map_type(&generic("sequence", vec![ty])).unwrap(), "(number | string)[]");
    }

    #[test]
    fn test_unmapped_generics() {
        let err = map_type(&generic("ObservableArray", vec![TypeRef::named("long")])).unwrap_err();
        assert_eq!(err.construct, "generic type 'ObservableArray<long>'");

        let err = map_type(&generic("Map", vec![TypeRef::named("long")])).unwrap_err();
        assert_eq!(err.construct, "unknown generic type 'Map'");

        let err = map_type(&generic("sequence", vec![])).unwrap_err();
        assert_eq!(err.construct, "'sequence' with 0 type argument(s) (expected 1)");
    }
}
