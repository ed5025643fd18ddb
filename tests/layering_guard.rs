//! Layering guardrails for the workspace crates.
//!
//! `webidl_syntax` and `webidl_core` are reusable libraries: they must not pull in CLI or logging
//! backend crates. This test scans their `Cargo.toml` `[dependencies]` tables.

fn dependencies(manifest: &str) -> Vec<String> {
    let mut in_dependencies = false;
    let mut deps = Vec::new();

    for raw_line in manifest.lines() {
        let line = raw_line.trim();
        // Track when we enter/exit the `[dependencies]` table.
        if line.starts_with('[') {
            in_dependencies = line == "[dependencies]";
            continue;
        }

        if !in_dependencies || line.is_empty() || line.starts_with('#') {
            continue;
        }

        // Strip inline comments for robustness.
        let line_no_comment = line.split('#').next().unwrap_or("").trim();
        if let Some(name) = line_no_comment.split('=').next() {
            deps.push(name.trim().to_string());
        }
    }
    deps
}

const FORBIDDEN_IN_LIBRARIES: &[&str] = &["clap", "tracing-subscriber"];

#[test]
fn syntax_crate_does_not_depend_on_cli_crates() {
    let deps = dependencies(include_str!("../crates/webidl_syntax/Cargo.toml"));
    for forbidden in FORBIDDEN_IN_LIBRARIES {
        assert!(
            !deps.iter().any(|d| d == forbidden),
            "`{}` must not appear in webidl_syntax [dependencies]",
            forbidden
        );
    }
    assert!(deps.iter().any(|d| d == "webidl_core"));
}

#[test]
fn core_crate_has_no_dependencies() {
    let deps = dependencies(include_str!("../crates/webidl_core/Cargo.toml"));
    assert!(deps.is_empty(), "webidl_core must stay dependency-free, found {:?}", deps);
}

#[test]
fn root_crate_does_not_depend_on_removed_stacks() {
    let deps = dependencies(include_str!("../Cargo.toml"));
    assert!(deps.iter().any(|d| d == "webidl_syntax"));
    assert!(!deps.iter().any(|d| d == "tokio"), "conversion is synchronous");
}
