//
//  employes-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the `employes` CLI:
//!
//! - **Table format**: Human-readable tables for interactive terminal use
//! - **JSON format**: Machine-readable JSON for scripting and automation
//!
//! ## Architecture
//!
//! - [`table`]: Attribute tables using `comfy_table`
//! - [`json`]: JSON serialization using `serde_json`
//!
//! ## Example
//!
//! ```rust,no_run
//! use employes_client::output::{OutputFormat, OutputWriter};
//! use serde_json::json;
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! let record = json!({"id": "42", "first_name": "Jane"});
//! writer.write_record(record.as_object().unwrap())?;
//! writer.write_success("Employee 42 updated");
//! # Ok::<(), anyhow::Error>(())
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde_json::Value;

use crate::entity::Attributes;

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tables with optional color. The default.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
}

/// Writes records and status messages in the selected [`OutputFormat`].
///
/// Color is detected once at construction; it is off when output is piped or
/// `NO_COLOR` is set.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn json() -> Self {
        Self::new(OutputFormat::Json)
    }

    pub fn table() -> Self {
        Self::new(OutputFormat::Table)
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Writes a list of records: a JSON array or one table row per record.
    ///
    /// An empty table list prints a notice instead of an empty table.
    pub fn write_records(&self, records: &[&Attributes]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(records),
            OutputFormat::Table => {
                if records.is_empty() {
                    self.write_info("No records found");
                } else {
                    println!("{}", records_table(records, self.color));
                }
                Ok(())
            }
        }
    }

    /// Writes a single record: a JSON object or a `Field | Value` table.
    pub fn write_record(&self, record: &Attributes) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(record),
            OutputFormat::Table => {
                println!("{}", record_table(record, self.color));
                Ok(())
            }
        }
    }

    /// Writes a raw response value, such as the body returned by a delete.
    ///
    /// Objects render as records in table mode; `null` prints nothing.
    pub fn write_value(&self, value: &Value) -> anyhow::Result<()> {
        match (self.format, value) {
            (OutputFormat::Json, _) => write_json(value),
            (OutputFormat::Table, Value::Object(record)) => self.write_record(record),
            (OutputFormat::Table, Value::Null) => Ok(()),
            (OutputFormat::Table, other) => {
                self.write_info(&crate::util::display_value(other));
                Ok(())
            }
        }
    }

    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Prints a success message with a check mark.
    ///
    /// Suppressed in JSON mode so stdout stays parseable.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        match (self.format, self.color) {
            (OutputFormat::Json, _) => {}
            (OutputFormat::Table, true) => println!("{} {}", style("✓").green().bold(), msg),
            (OutputFormat::Table, false) => println!("✓ {}", msg),
        }
    }
}

impl Default for OutputWriter {
    fn default() -> Self {
        Self::table()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_select_format() {
        assert_eq!(OutputWriter::json().format(), OutputFormat::Json);
        assert_eq!(OutputWriter::table().format(), OutputFormat::Table);
        assert_eq!(OutputWriter::default().format(), OutputFormat::Table);
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }
}
