//! Guard against orphaned button variants in the shared theme.
//!
//! Every `.button--*` modifier declared in `assets/theme/main.css` must be
//! emitted by at least one component under `src/`, otherwise the stylesheet
//! accumulates dead selectors nobody notices.

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;

const THEME: &str = include_str!("../assets/theme/main.css");

fn modifier_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Collect `button--<modifier>` tokens from the stylesheet.
fn declared_button_variants(css: &str) -> BTreeSet<String> {
    let mut variants = BTreeSet::new();
    let needle = ".button--";
    let mut i = 0;
    while let Some(pos) = css[i..].find(needle) {
        let start = i + pos + 1; // skip the leading dot
        let rest = &css[start..];
        let end = rest.find(|c: char| !modifier_char(c)).unwrap_or(rest.len());
        variants.insert(rest[..end].to_string());
        i = start + end;
    }
    variants
}

fn collect_rust_sources(root: &PathBuf) -> String {
    let mut combined = String::new();
    let mut stack = vec![root.clone()];
    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                for entry in read_dir.flatten() {
                    stack.push(entry.path());
                }
            }
            continue;
        }
        if path.extension().and_then(|s| s.to_str()) == Some("rs") {
            if let Ok(content) = fs::read_to_string(&path) {
                combined.push_str(&content);
                combined.push('\n');
            }
        }
    }
    combined
}

#[test]
fn every_declared_button_variant_is_emitted() {
    let variants = declared_button_variants(THEME);
    assert!(
        !variants.is_empty(),
        "no button variants found in the theme; selector scan is broken"
    );

    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let sources = collect_rust_sources(&src_root);

    let orphaned: Vec<_> = variants
        .iter()
        .filter(|v| !sources.contains(v.as_str()))
        .collect();
    assert!(
        orphaned.is_empty(),
        "theme declares button variants no component emits: {orphaned:?}"
    );
}

#[test]
fn known_variants_stay_in_use() {
    let src_root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("src");
    let sources = collect_rust_sources(&src_root);
    for variant in ["button--primary", "button--accent", "button--ghost"] {
        assert!(
            sources.contains(variant),
            "expected a component to emit `{variant}`"
        );
    }
}
