//! Abstract Syntax Tree definitions for WebIDL
//!
//! The tree is the "definition tree" handed to the declaration backend: an ordered list of top-level
//! definitions, each carrying its ordered members. Nothing here knows about TypeScript.

use std::fmt;

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

/// Identifier, with WebIDL's leading-underscore escape already removed.
pub type Ident = String;

/// A WebIDL document: top-level definitions in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub definitions: Vec<Spanned<Definition>>,
}

/// Top-level definitions
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Interface(InterfaceDecl),
    Namespace(NamespaceDecl),
    Enum(EnumDecl),
    Dictionary(DictionaryDecl),
    Typedef(TypedefDecl),
    Callback(CallbackDecl),
    Includes(IncludesDecl),
}

impl Definition {
    /// Name the definition introduces (the target interface for `includes` statements).
    pub fn name(&self) -> &str {
        match self {
            Definition::Interface(d) => &d.name,
            Definition::Namespace(d) => &d.name,
            Definition::Enum(d) => &d.name,
            Definition::Dictionary(d) => &d.name,
            Definition::Typedef(d) => &d.name,
            Definition::Callback(d) => &d.name,
            Definition::Includes(d) => &d.target,
        }
    }

    /// Short human-readable kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Definition::Interface(d) => match d.kind {
                InterfaceKind::Plain => "interface",
                InterfaceKind::Mixin => "interface mixin",
                InterfaceKind::Callback => "callback interface",
            },
            Definition::Namespace(_) => "namespace",
            Definition::Enum(_) => "enum",
            Definition::Dictionary(_) => "dictionary",
            Definition::Typedef(_) => "typedef",
            Definition::Callback(_) => "callback",
            Definition::Includes(_) => "includes statement",
        }
    }
}

// ============================================================================
// Interfaces and namespaces
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterfaceKind {
    #[default]
    Plain,
    Mixin,
    Callback,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InterfaceDecl {
    pub name: Ident,
    pub kind: InterfaceKind,
    pub partial: bool,
    pub inherits: Option<Ident>,
    pub members: Vec<Spanned<Member>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NamespaceDecl {
    pub name: Ident,
    pub partial: bool,
    pub members: Vec<Spanned<Member>>,
}

/// Interface, mixin and namespace members
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    Operation(OperationMember),
    Attribute(AttributeMember),
    Const(ConstMember),
    Constructor(Vec<Param>),
    Maplike(MaplikeMember),
    Setlike(SetlikeMember),
    Iterable(IterableMember),
    Special(SpecialKind),
}

impl Member {
    /// Member name, for the kinds that have one.
    pub fn name(&self) -> Option<&str> {
        match self {
            Member::Operation(m) => Some(&m.name),
            Member::Attribute(m) => Some(&m.name),
            Member::Const(m) => Some(&m.name),
            _ => None,
        }
    }

    /// Short human-readable kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Member::Operation(_) => "operation",
            Member::Attribute(_) => "attribute",
            Member::Const(_) => "const",
            Member::Constructor(_) => "constructor",
            Member::Maplike(_) => "maplike",
            Member::Setlike(_) => "setlike",
            Member::Iterable(m) if m.is_async => "async iterable",
            Member::Iterable(_) => "iterable",
            Member::Special(kind) => kind.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OperationMember {
    pub name: Ident,
    pub is_static: bool,
    pub return_type: TypeRef,
    pub params: Vec<Param>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttributeMember {
    pub name: Ident,
    pub ty: TypeRef,
    pub readonly: bool,
    pub is_static: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConstMember {
    pub name: Ident,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MaplikeMember {
    pub key: TypeRef,
    pub value: TypeRef,
    pub readonly: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetlikeMember {
    pub element: TypeRef,
    pub readonly: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IterableMember {
    pub is_async: bool,
    pub key: Option<TypeRef>,
    pub value: TypeRef,
}

/// Special operations (`getter`, `setter`, `deleter`, `stringifier`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKind {
    Getter,
    Setter,
    Deleter,
    Stringifier,
}

impl SpecialKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpecialKind::Getter => "getter",
            SpecialKind::Setter => "setter",
            SpecialKind::Deleter => "deleter",
            SpecialKind::Stringifier => "stringifier",
        }
    }
}

/// Operation, constructor or callback parameter
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Ident,
    pub ty: TypeRef,
    pub optional: bool,
    pub variadic: bool,
}

// ============================================================================
// Other definitions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub name: Ident,
    /// Raw member literals, e.g. `"bar"` or `"ns::bar"` (without quotes).
    pub values: Vec<Spanned<String>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryDecl {
    pub name: Ident,
    pub partial: bool,
    pub inherits: Option<Ident>,
    pub fields: Vec<Spanned<DictionaryField>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DictionaryField {
    pub name: Ident,
    pub ty: TypeRef,
    pub required: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypedefDecl {
    pub name: Ident,
    pub ty: TypeRef,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallbackDecl {
    pub name: Ident,
    pub return_type: TypeRef,
    pub params: Vec<Param>,
}

/// `Target includes Mixin;`
#[derive(Debug, Clone, PartialEq)]
pub struct IncludesDecl {
    pub target: Ident,
    pub mixin: Ident,
}

// ============================================================================
// Types
// ============================================================================

/// A type reference as written in WebIDL.
///
/// `nullable` applies to the element type; `array_depth` counts `[]` suffixes applied afterwards and
/// `array_nullable` records a `?` after the last `[]`.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeRef {
    pub kind: TypeKind,
    pub nullable: bool,
    pub array_depth: u8,
    pub array_nullable: bool,
    pub span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeKind {
    /// Builtin or user-defined name; multi-word builtins are normalized to single spaces.
    Named(Ident),
    Generic { name: Ident, args: Vec<TypeRef> },
    Union(Vec<TypeRef>),
}

impl TypeRef {
    /// Plain, non-nullable, non-array reference to `name`.
    pub fn named(name: impl Into<Ident>) -> Self {
        Self {
            kind: TypeKind::Named(name.into()),
            nullable: false,
            array_depth: 0,
            array_nullable: false,
            span: Span::default(),
        }
    }

    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    pub fn with_array_depth(mut self, depth: u8) -> Self {
        self.array_depth = depth;
        self
    }

    /// Base name for named types.
    pub fn base_name(&self) -> Option<&str> {
        match &self.kind {
            TypeKind::Named(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for TypeRef {
    /// Render back in WebIDL syntax (used in diagnostics).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TypeKind::Named(name) => write!(f, "{}", name)?,
            TypeKind::Generic { name, args } => {
                write!(f, "{}<", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ">")?;
            }
            TypeKind::Union(types) => {
                write!(f, "(")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        write!(f, " or ")?;
                    }
                    write!(f, "{}", ty)?;
                }
                write!(f, ")")?;
            }
        }
        if self.nullable {
            write!(f, "?")?;
        }
        for _ in 0..self.array_depth {
            write!(f, "[]")?;
        }
        if self.array_nullable {
            write!(f, "?")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_display_round_trips_suffixes() {
        let ty = TypeRef::named("long").with_nullable(true).with_array_depth(1);
        assert_eq!(ty.to_string(), "long?[]");
    }

    #[test]
    fn test_generic_display() {
        let ty = TypeRef {
            kind: TypeKind::Generic {
                name: "record".to_string(),
                args: vec![TypeRef::named("DOMString"), TypeRef::named("long")],
            },
            nullable: true,
            array_depth: 0,
            array_nullable: false,
            span: Span::default(),
        };
        assert_eq!(ty.to_string(), "record<DOMString, long>?");
    }

    #[test]
    fn test_span_merge() {
        assert_eq!(Span::new(4, 8).merge(Span::new(2, 5)), Span::new(2, 8));
    }
}
