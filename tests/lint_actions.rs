//! Lint: action IDs must be unique and leave room for the row-select range.
//!
//! Click dispatch funnels every target through a single `u16` ID space, so a
//! duplicated constant silently routes one button to another. This test
//! parses `src/game/actions.rs` and flags collisions, including any constant
//! landing inside the 30-wide band reserved above `SELECT_BASE`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

const SELECT_RANGE: u16 = 30;

/// Extract `pub const NAME: u16 = N;` declarations from source text.
fn parse_action_ids(source: &str) -> Vec<(String, u16)> {
    let mut ids = Vec::new();
    for line in source.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with("//") {
            continue;
        }
        let Some(rest) = trimmed.strip_prefix("pub const ") else {
            continue;
        };
        let Some((name, rest)) = rest.split_once(": u16 = ") else {
            continue;
        };
        let Some(value) = rest.strip_suffix(';') else {
            continue;
        };
        if let Ok(v) = value.trim().parse::<u16>() {
            ids.push((name.trim().to_string(), v));
        }
    }
    ids
}

fn load_action_ids() -> Vec<(String, u16)> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("src/game/actions.rs");
    let source = fs::read_to_string(&path).expect("actions.rs readable");
    let ids = parse_action_ids(&source);
    assert!(!ids.is_empty(), "no action IDs found in {}", path.display());
    ids
}

#[test]
fn action_ids_are_unique() {
    let ids = load_action_ids();
    let mut seen: HashMap<u16, &str> = HashMap::new();
    for (name, v) in &ids {
        if let Some(other) = seen.insert(*v, name) {
            panic!("action ID {v} assigned to both {other} and {name}");
        }
    }
}

#[test]
fn select_band_is_reserved() {
    let ids = load_action_ids();
    let base = ids
        .iter()
        .find(|(name, _)| name == "SELECT_BASE")
        .map(|(_, v)| *v)
        .expect("SELECT_BASE declared");
    for (name, v) in &ids {
        if name == "SELECT_BASE" {
            continue;
        }
        assert!(
            *v < base || *v >= base + SELECT_RANGE,
            "{name} ({v}) collides with the row-select band {base}..{}",
            base + SELECT_RANGE
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_const_declarations() {
        let source = "pub const BUY: u16 = 1;\npub const SELL: u16 = 2;\n";
        let ids = parse_action_ids(source);
        assert_eq!(ids, vec![("BUY".to_string(), 1), ("SELL".to_string(), 2)]);
    }

    #[test]
    fn ignores_comments_and_other_items() {
        let source = "// pub const OLD: u16 = 9;\npub fn f() {}\nconst PRIVATE: u16 = 3;\n";
        assert!(parse_action_ids(source).is_empty());
    }
}
