//! Snapshot tests for rendered syntax diagnostics.
//!
//! Review changes: `cargo insta review`

use webidl_syntax::diagnostics::format_error;
use webidl_syntax::{lexer, parser};

fn first_error(source: &str) -> String {
    let errors = match lexer::lex(source) {
        Ok(tokens) => parser::parse(&tokens).expect_err("source should not parse"),
        Err(errors) => errors,
    };
    format_error("in.webidl", source, &errors[0]).trim_end().to_string()
}

#[test]
fn missing_attribute_name() {
    let rendered = first_error("interface Foo {\n    attribute long;\n};");
    insta::assert_snapshot!(rendered, @r"
syntax error: Expected identifier, found ';'
  --> in.webidl:2:19
    |
  2 |     attribute long;
    |                   ^
");
}

#[test]
fn unterminated_block_comment_has_hint() {
    let rendered = first_error("/* open\ninterface Foo {};");
    insta::assert_snapshot!(rendered, @r"
error: Unterminated block comment
  --> in.webidl:1:1
    |
  1 | /* open
    | ^^^^^^^
  = hint: Close the comment with '*/'
");
}

#[test]
fn partial_without_target() {
    let rendered = first_error("partial enum Foo { \"a\" };");
    insta::assert_snapshot!(rendered, @r#"
syntax error: Expected 'interface', 'namespace' or 'dictionary' after 'partial', found keyword 'enum'
  --> in.webidl:1:9
    |
  1 | partial enum Foo { "a" };
    |         ^^^^
"#);
}
