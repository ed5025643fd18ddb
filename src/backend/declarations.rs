//! Emit TypeScript declarations for WebIDL definitions.
//!
//! Interfaces and namespaces share one renderer: a member list of exactly one `maplike`/`setlike`
//! collapses to a `Map`/`Set` type alias, anything else becomes an `interface` block.
//!
//! ## Notes
//!
//! - Enums are rendered here as string literal unions. In Emscripten mode the document assembler
//!   routes them to [`crate::backend::emscripten`] instead.
//! - Members are indented one level below their header.
//! - `A includes B;` becomes an empty `interface A extends B {` / `}` block, relying on TypeScript interface
//!   merging to add `B`'s members to `A`.

use super::errors::UnsupportedConstructError;
use super::type_map::{map_array_element, map_type};
use super::writer::DeclWriter;
use webidl_syntax::ast::{
    CallbackDecl, Definition, DictionaryDecl, EnumDecl, Member, Param, Span, Spanned, TypedefDecl,
};

type EmitResult = Result<(), UnsupportedConstructError>;

/// Emit one top-level definition.
pub fn emit_definition(def: &Spanned<Definition>, out: &mut DeclWriter) -> EmitResult {
    tracing::debug!(kind = def.node.kind_name(), name = def.node.name(), "emitting definition");
    match &def.node {
        Definition::Interface(d) => emit_interface_like(&d.name, d.inherits.as_deref(), &d.members, out),
        Definition::Namespace(d) => emit_interface_like(&d.name, None, &d.members, out),
        Definition::Enum(d) => {
            out.writeln(&enum_union(d));
            Ok(())
        }
        Definition::Dictionary(d) => emit_dictionary(d, out),
        Definition::Typedef(d) => emit_typedef(d, out),
        Definition::Callback(d) => emit_callback(d, out),
        Definition::Includes(d) => {
            out.writeln(&format!("interface {} extends {} {{", d.target, d.mixin));
            out.writeln("}");
            Ok(())
        }
    }
}

/// Render an interface or namespace body: a collection alias or an `interface` block.
pub fn emit_interface_like(
    name: &str,
    inherits: Option<&str>,
    members: &[Spanned<Member>],
    out: &mut DeclWriter,
) -> EmitResult {
    if let Some(alias) = collection_alias(name, members)? {
        out.writeln(&format!("type {} = {};", name, alias));
        return Ok(());
    }

    let header = match inherits {
        Some(base) => format!("interface {} extends {} {{", name, base),
        None => format!("interface {} {{", name),
    };
    out.braced(&header, |out| {
        for member in members {
            let line = member_line(name, &member.node, member.span)
                .map_err(|e| e.within(name, Some(member.node.name().unwrap_or(member.node.kind_name()))))?;
            out.writeln(&line);
        }
        Ok(())
    })
}

/// `Some(alias)` when the members are exactly one maplike or setlike declaration.
///
/// A collection declaration next to any other member has no single TypeScript shape and is rejected.
fn collection_alias(name: &str, members: &[Spanned<Member>]) -> Result<Option<String>, UnsupportedConstructError> {
    if let [only] = members {
        match &only.node {
            Member::Maplike(m) => {
                let map = if m.readonly { "ReadonlyMap" } else { "Map" };
                let key = map_type(&m.key).map_err(|e| e.within(name, Some("maplike")))?;
                let value = map_type(&m.value).map_err(|e| e.within(name, Some("maplike")))?;
                return Ok(Some(format!("{}<{}, {}>", map, key, value)));
            }
            Member::Setlike(s) => {
                let set = if s.readonly { "ReadonlySet" } else { "Set" };
                let element = map_type(&s.element).map_err(|e| e.within(name, Some("setlike")))?;
                return Ok(Some(format!("{}<{}>", set, element)));
            }
            _ => {}
        }
    }

    match members
        .iter()
        .find(|m| matches!(m.node, Member::Maplike(_) | Member::Setlike(_)))
    {
        Some(collection) => Err(UnsupportedConstructError::new(
            format!("{} declaration alongside other members", collection.node.kind_name()),
            collection.span,
        )
        .within(name, Some(collection.node.kind_name()))),
        None => Ok(None),
    }
}

fn member_line(owner: &str, member: &Member, span: Span) -> Result<String, UnsupportedConstructError> {
    match member {
        Member::Operation(op) => {
            let prefix = if op.is_static { "static " } else { "" };
            Ok(format!(
                "{}{}({}): {};",
                prefix,
                op.name,
                param_list(&op.params)?,
                map_type(&op.return_type)?
            ))
        }
        Member::Attribute(attr) => {
            let mut prefix = String::new();
            if attr.is_static {
                prefix.push_str("static ");
            }
            if attr.readonly {
                prefix.push_str("readonly ");
            }
            Ok(format!("{}{}: {};", prefix, attr.name, map_type(&attr.ty)?))
        }
        Member::Const(c) => Ok(format!("readonly {}: {};", c.name, map_type(&c.ty)?)),
        Member::Constructor(params) => Ok(format!("new({}): {};", param_list(params)?, owner)),
        Member::Maplike(_) | Member::Setlike(_) | Member::Iterable(_) | Member::Special(_) => Err(
            UnsupportedConstructError::new(format!("{} declaration", member.kind_name()), span),
        ),
    }
}

/// Render a parameter list: `a: T, b?: U, ...rest: V[]`.
pub fn param_list(params: &[Param]) -> Result<String, UnsupportedConstructError> {
    let rendered = params
        .iter()
        .map(|p| {
            let param = if p.variadic {
                format!("...{}: {}", p.name, map_array_element(&p.ty)?)
            } else if p.optional {
                format!("{}?: {}", p.name, map_type(&p.ty)?)
            } else {
                format!("{}: {}", p.name, map_type(&p.ty)?)
            };
            Ok(param)
        })
        .collect::<Result<Vec<_>, UnsupportedConstructError>>()?;
    Ok(rendered.join(", "))
}

/// `type Foo = "bar" | "baz";` with the raw, unstripped literals.
fn enum_union(decl: &EnumDecl) -> String {
    let literals: Vec<String> = decl.values.iter().map(|v| format!("\"{}\"", v.node)).collect();
    format!("type {} = {};", decl.name, literals.join(" | "))
}

fn emit_dictionary(decl: &DictionaryDecl, out: &mut DeclWriter) -> EmitResult {
    let header = match &decl.inherits {
        Some(base) => format!("interface {} extends {} {{", decl.name, base),
        None => format!("interface {} {{", decl.name),
    };
    out.braced(&header, |out| {
        for field in &decl.fields {
            let ty = map_type(&field.node.ty).map_err(|e| e.within(&decl.name, Some(field.node.name.as_str())))?;
            let marker = if field.node.required { "" } else { "?" };
            out.writeln(&format!("{}{}: {};", field.node.name, marker, ty));
        }
        Ok(())
    })
}

fn emit_typedef(decl: &TypedefDecl, out: &mut DeclWriter) -> EmitResult {
    let ty = map_type(&decl.ty).map_err(|e| e.within(&decl.name, None))?;
    out.writeln(&format!("type {} = {};", decl.name, ty));
    Ok(())
}

fn emit_callback(decl: &CallbackDecl, out: &mut DeclWriter) -> EmitResult {
    let params = param_list(&decl.params).map_err(|e| e.within(&decl.name, None))?;
    let ret = map_type(&decl.return_type).map_err(|e| e.within(&decl.name, None))?;
    out.writeln(&format!("type {} = ({}) => {};", decl.name, params, ret));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn emit(source: &str) -> Result<String, UnsupportedConstructError> {
        let program = webidl_syntax::parse_definitions(source).unwrap();
        let mut out = DeclWriter::new();
        for def in &program.definitions {
            emit_definition(def, &mut out)?;
        }
        Ok(out.finish())
    }

    #[test]
    fn test_operation_and_static_operation() {
        let ts = emit("interface Foo {\n    void bar();\n    static long baz(DOMString s);\n};").unwrap();
        assert_eq!(ts, "interface Foo {\n    bar(): void;\n    static baz(s: string): number;\n}");
    }

    #[test]
    fn test_namespace_renders_like_interface() {
        let iface = emit("interface Foo {\n    void bar();\n};").unwrap();
        let ns = emit("namespace Foo {\n    void bar();\n};").unwrap();
        assert_eq!(iface, ns);
    }

    #[test]
    fn test_empty_interface() {
        assert_eq!(emit("interface Foo {\n};").unwrap(), "interface Foo {\n}");
    }

    #[test]
    fn test_maplike_and_setlike_collapse() {
        assert_eq!(
            emit("interface Foo {\n    maplike<unsigned long, DOMString>;\n};").unwrap(),
            "type Foo = Map<number, string>;"
        );
        assert_eq!(
            emit("namespace Foo {\n    readonly setlike<DOMString>;\n};").unwrap(),
            "type Foo = ReadonlySet<string>;"
        );
    }

    #[test]
    fn test_mixed_collection_members_rejected() {
        let err = emit("interface Foo {\n    setlike<long>;\n    void clear();\n};").unwrap_err();
        assert_eq!(err.definition, "Foo");
        assert_eq!(err.member.as_deref(), Some("setlike"));
        assert_eq!(err.construct, "setlike declaration alongside other members");
    }

    #[test]
    fn test_attributes_consts_and_constructors() {
        let ts = emit(
            "interface Foo : Base {\n    constructor(optional long size, any... rest);\n    const unsigned short MAX = 4;\n    readonly attribute long? a;\n    static attribute boolean b;\n};",
        )
        .unwrap();
        assert_eq!(
            ts,
            "interface Foo extends Base {\n    new(size?: number, ...rest: any[]): Foo;\n    readonly MAX: number;\n    readonly a: number | null;\n    static b: boolean;\n}"
        );
    }

    #[test]
    fn test_enum_keeps_raw_literals() {
        assert_eq!(
            emit("enum Foo { \"ns::bar\", \"baz\" };").unwrap(),
            "type Foo = \"ns::bar\" | \"baz\";"
        );
    }

    #[test]
    fn test_dictionary_typedef_callback_includes() {
        let ts = emit(
            "dictionary Opts : Base {\n    required DOMString name;\n    long retries = 3;\n};\ntypedef sequence<Opts> OptsList;\ncallback Done = void (boolean ok);\nWindow includes Mixin;",
        )
        .unwrap();
        assert_eq!(
            ts,
            "interface Opts extends Base {\n    name: string;\n    retries?: number;\n}\ntype OptsList = Opts[];\ntype Done = (ok: boolean) => void;\ninterface Window extends Mixin {\n}"
        );
    }

    #[test]
    fn test_unsupported_member_names_context() {
        let err = emit("interface Foo {\n    iterable<long>;\n};").unwrap_err();
        assert_eq!(err.definition, "Foo");
        assert_eq!(err.member.as_deref(), Some("iterable"));

        let err = emit("interface Foo {\n    attribute long[][] grid;\n};").unwrap_err();
        assert_eq!(err.member.as_deref(), Some("grid"));
        assert_eq!(err.construct, "nested array type 'long[][]'");
    }
}
