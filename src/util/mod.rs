//
//  employes-client
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by the CLI commands and output formatting.
//!
//! ## Categories
//!
//! - **Argument Parsing**: [`parse_key_value`], [`to_params`]
//! - **Display**: [`display_value`], [`truncate`]
//!
//! ## Example
//!
//! ```rust
//! use employes_client::util::{display_value, parse_key_value, truncate};
//! use serde_json::json;
//!
//! let (key, value) = parse_key_value("per_page=25").unwrap();
//! assert_eq!(key, "per_page");
//! assert_eq!(value, json!(25));
//!
//! assert_eq!(display_value(&json!("Jane")), "Jane");
//! assert_eq!(truncate("a very long description", 15), "a very long ...");
//! ```

use anyhow::{bail, Result};
use serde_json::Value;

use crate::api::request::Params;

/// Parses a `KEY=VALUE` argument.
///
/// Used as a clap `value_parser` for `--param` and `--set`. The value is kept
/// as a string unless it is a JSON boolean, number or `null`, in which case the
/// typed value is returned so it encodes the way the API expects (booleans as
/// `1`/`0`, `null` omitted).
///
/// # Errors
///
/// Returns an error if the argument has no `=` or the key is empty.
///
/// # Example
///
/// ```rust
/// use employes_client::util::parse_key_value;
/// use serde_json::json;
///
/// assert_eq!(parse_key_value("active=true").unwrap().1, json!(true));
/// assert_eq!(parse_key_value("city=Den Haag").unwrap().1, json!("Den Haag"));
/// // Leading zeros are not JSON numbers, so phone numbers stay strings
/// assert_eq!(parse_key_value("phone=0612345678").unwrap().1, json!("0612345678"));
/// assert!(parse_key_value("missing").is_err());
/// ```
pub fn parse_key_value(s: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = s.split_once('=') else {
        bail!("Invalid KEY=VALUE argument: no `=` found in `{s}`");
    };

    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid KEY=VALUE argument: empty key in `{s}`");
    }

    let value = match serde_json::from_str::<Value>(raw) {
        Ok(typed @ (Value::Bool(_) | Value::Number(_) | Value::Null)) => typed,
        _ => Value::String(raw.to_string()),
    };

    Ok((key.to_string(), value))
}

/// Collects parsed `KEY=VALUE` pairs into request parameters.
///
/// Later pairs overwrite earlier ones with the same key.
pub fn to_params(pairs: &[(String, Value)]) -> Params {
    pairs
        .iter()
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Renders a JSON value for a table cell.
///
/// Strings are shown without quotes and `null` as an empty cell. Arrays and
/// objects fall back to compact JSON.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Truncates a string to `max_len` characters, adding an ellipsis if needed.
///
/// Counts characters rather than bytes, so multi-byte names such as
/// "Zoë" are never split mid-character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len > 3 {
        let head: String = s.chars().take(max_len - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max_len).collect()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_parse_key_value() {
        assert_eq!(
            parse_key_value("first_name=Jane").unwrap(),
            ("first_name".to_string(), json!("Jane"))
        );
        assert_eq!(parse_key_value("page=2").unwrap().1, json!(2));
        assert_eq!(parse_key_value("end_date=null").unwrap().1, Value::Null);
        assert_eq!(parse_key_value("note=a=b").unwrap().1, json!("a=b"));
        assert_eq!(parse_key_value("note=").unwrap().1, json!(""));
        assert!(parse_key_value("=value").is_err());
    }

    #[test]
    fn test_to_params_last_wins() {
        let pairs = vec![
            ("page".to_string(), json!(1)),
            ("page".to_string(), json!(2)),
        ];
        let params = to_params(&pairs);
        assert_eq!(params.len(), 1);
        assert_eq!(params["page"], json!(2));
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::Null), "");
        assert_eq!(display_value(&json!(true)), "true");
        assert_eq!(display_value(&json!(12.5)), "12.5");
        assert_eq!(display_value(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
        assert_eq!(truncate("Zoë Zoë", 5), "Zo...");
        assert_eq!(truncate("short", 3), "sho");
    }
}
