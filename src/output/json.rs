//
//  employes-client
//  output/json.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # JSON Output Formatting
//!
//! Machine-readable output for scripting. Attribute maps keep the key order the
//! API returned, so piping `employes --json employee get ID` to `jq` shows the
//! fields exactly as received.
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`write_json`] | Pretty-printed JSON on stdout |
//! | [`write_json_to`] | Pretty-printed JSON on any writer |

use serde::Serialize;
use std::io::Write;

/// Writes `value` as pretty-printed JSON to stdout.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Writes `value` as pretty-printed JSON followed by a newline.
pub fn write_json_to<W: Write, T: Serialize + ?Sized>(
    writer: &mut W,
    value: &T,
) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_write_json_to_preserves_key_order() {
        let value = json!({"surname": "Doe", "id": "42", "first_name": "Jane"});
        let mut buffer = Vec::new();

        write_json_to(&mut buffer, &value).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let surname = text.find("surname").unwrap();
        let id = text.find("\"id\"").unwrap();
        let first_name = text.find("first_name").unwrap();
        assert!(surname < id && id < first_name);
        assert!(text.ends_with("}\n"));
    }
}
