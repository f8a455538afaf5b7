use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// Catalog guard.
/// Every `t!("key")` used under `src/` must exist in the es-ES catalog,
/// every catalog entry must be used somewhere, and no key may be defined twice.
///
/// The `fl!` macro already rejects unknown keys at compile time; this test
/// additionally catches dead entries and duplicates.
const CATALOG: &str = include_str!("../i18n/es-ES/inventario_ui.ftl");

#[test]
fn every_used_key_exists_in_catalog() {
    let catalog = parse_ftl_keys(CATALOG);
    let used = extract_translation_keys_from_source(&src_root());

    let missing: BTreeSet<&String> = used.iter().filter(|k| !catalog.contains(*k)).collect();
    assert!(
        missing.is_empty(),
        "Keys used in src/ but missing from the catalog:\n  {}",
        missing.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
    );
}

#[test]
fn every_catalog_key_is_used() {
    let catalog = parse_ftl_keys(CATALOG);
    let used = extract_translation_keys_from_source(&src_root());

    let unused: BTreeSet<&String> = catalog.iter().filter(|k| !used.contains(*k)).collect();
    assert!(
        unused.is_empty(),
        "Catalog entries never referenced by t!():\n  {}",
        unused.into_iter().cloned().collect::<Vec<_>>().join("\n  ")
    );
}

#[test]
fn catalog_has_no_duplicate_keys() {
    let mut seen = HashSet::new();
    let mut dups = BTreeSet::new();
    for key in CATALOG.lines().filter_map(message_id) {
        if !seen.insert(key.to_string()) {
            dups.insert(key.to_string());
        }
    }
    assert!(
        dups.is_empty(),
        "Duplicate key definitions:\n  {}",
        dups.into_iter().collect::<Vec<_>>().join("\n  ")
    );
}

fn src_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src")
}

/// Simple parser: extract message IDs from a Fluent file.
fn parse_ftl_keys(content: &str) -> HashSet<String> {
    content
        .lines()
        .filter_map(message_id)
        .map(str::to_string)
        .collect()
}

/// `Some(id)` when the line is of the form `<identifier> = ...`.
/// Comments, terms (-prefix), attributes and blank lines are ignored.
fn message_id(line: &str) -> Option<&str> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') || line.starts_with('-') || line.starts_with('.') {
        return None;
    }
    let (maybe_id, _) = line.split_once('=')?;
    let id = maybe_id.trim();
    if !id.is_empty() && id.chars().all(valid_key_char) {
        Some(id)
    } else {
        None
    }
}

fn valid_key_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '-')
}

/// Extract all t!("...") occurrences (and t!("...", ...) forms) from source files.
/// Only a direct literal first argument is matched.
fn extract_translation_keys_from_source(src_root: &Path) -> HashSet<String> {
    let mut found = HashSet::new();
    let mut stack = vec![src_root.to_path_buf()];

    while let Some(path) = stack.pop() {
        if path.is_dir() {
            if let Ok(read_dir) = fs::read_dir(&path) {
                for entry in read_dir.flatten() {
                    stack.push(entry.path());
                }
            }
            continue;
        }
        if path.extension().and_then(|e| e.to_str()) != Some("rs") {
            continue;
        }
        let Ok(content) = fs::read_to_string(&path) else {
            continue;
        };
        // The macro definition itself documents `t!("...")` forms in comments;
        // skip comment lines so examples don't count as usage.
        for line in content.lines() {
            if line.trim_start().starts_with("//") {
                continue;
            }
            found.extend(keys_in_line(line));
        }
    }

    found
}

/// Literal first arguments of `t!` calls on one line. The macro name must
/// start a token, so `format!("...")` and friends never match.
fn keys_in_line(line: &str) -> Vec<String> {
    const CALL: &str = "t!(\"";
    let mut keys = Vec::new();
    let mut offset = 0;
    while let Some(pos) = line[offset..].find(CALL) {
        let start = offset + pos;
        let after = start + CALL.len();
        let at_token_start = line[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !(c.is_alphanumeric() || c == '_'));
        let Some(len) = line[after..].find('"') else {
            break;
        };
        if at_token_start {
            keys.push(line[after..after + len].to_string());
        }
        offset = after + len;
    }
    keys
}

#[test]
fn only_bare_t_calls_count_as_keys() {
    assert_eq!(keys_in_line(r#"format!("{value}%")"#), Vec::<String>::new());
    assert_eq!(keys_in_line(r#"let s = t!("app-title");"#), vec!["app-title"]);
    assert_eq!(
        keys_in_line(r#"{t!("action-send")} {crate::t!("action-reset")} {print!("x")}"#),
        vec!["action-send", "action-reset"]
    );
    assert_eq!(
        keys_in_line(r#"t!("status-saved", path = format!("{dir}/a.csv"))"#),
        vec!["status-saved"]
    );
}

