//! Skill-name input recovery.
//!
//! Clients send a project's skill list in four wire shapes, depending on
//! how their HTTP library encodes forms:
//!
//! 1. a structured JSON list in a JSON request body;
//! 2. a repeated multipart field (`skills` given several times);
//! 3. a single field holding a JSON-encoded array string (`"[\"a\",\"b\"]"`);
//! 4. a single field holding a comma-separated string (`"a, b"`).
//!
//! Shape 1 never reaches this module — a JSON body deserializes straight
//! into `Option<Vec<String>>`. [`recover_names`] normalizes the remaining
//! three, in that priority order, into one ordered list of names.
//!
//! The distinction between "no skill data" (`None`) and "explicitly empty"
//! (`Some(vec![])`) matters: on update the former leaves the skill set
//! untouched while the latter clears it.

/// Normalize the raw values of a form's `skills` field(s) into skill names.
///
/// - no values at all, or a single blank value → `None` (nothing supplied);
/// - several values → used verbatim, one name per field occurrence;
/// - one value that parses as a JSON string array → the parsed list
///   (`"[]"` therefore means "explicitly empty");
/// - any other single value → split on commas, entries trimmed, blanks
///   dropped.
pub fn recover_names(values: &[String]) -> Option<Vec<String>> {
    match values {
        [] => None,
        [single] => recover_from_scalar(single),
        many => Some(many.to_vec()),
    }
}

fn recover_from_scalar(raw: &str) -> Option<Vec<String>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(parsed) = serde_json::from_str::<Vec<String>>(trimmed) {
        return Some(parsed);
    }

    Some(
        trimmed
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vals(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn absent_field_is_none() {
        assert_eq!(recover_names(&[]), None);
    }

    #[test]
    fn blank_scalar_is_none() {
        assert_eq!(recover_names(&vals(&["   "])), None);
    }

    #[test]
    fn repeated_fields_used_verbatim() {
        assert_eq!(
            recover_names(&vals(&["Rust", "Axum", "Postgres"])),
            Some(vals(&["Rust", "Axum", "Postgres"]))
        );
    }

    #[test]
    fn repeated_fields_win_over_json_looking_values() {
        // Two occurrences: each is a literal name, never re-parsed.
        assert_eq!(
            recover_names(&vals(&["[]", "Rust"])),
            Some(vals(&["[]", "Rust"]))
        );
    }

    #[test]
    fn json_array_string_is_parsed() {
        assert_eq!(
            recover_names(&vals(&[r#"["Rust", "Axum"]"#])),
            Some(vals(&["Rust", "Axum"]))
        );
    }

    #[test]
    fn json_empty_array_means_explicitly_empty() {
        assert_eq!(recover_names(&vals(&["[]"])), Some(vec![]));
    }

    #[test]
    fn comma_separated_string_is_split_and_trimmed() {
        assert_eq!(
            recover_names(&vals(&["Rust,  Axum , Postgres"])),
            Some(vals(&["Rust", "Axum", "Postgres"]))
        );
    }

    #[test]
    fn stray_commas_drop_blank_entries() {
        assert_eq!(recover_names(&vals(&[",Rust,,"])), Some(vals(&["Rust"])));
    }

    #[test]
    fn single_plain_name() {
        assert_eq!(recover_names(&vals(&["Rust"])), Some(vals(&["Rust"])));
    }

    #[test]
    fn malformed_json_falls_back_to_comma_split() {
        assert_eq!(
            recover_names(&vals(&[r#"["Rust", 42]"#])),
            Some(vals(&["[\"Rust\"", "42]"]))
        );
    }
}
