//
//  employes-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Renders resource attributes as terminal tables using `comfy_table`.
//!
//! Resources carry free-form attribute maps rather than fixed structs, so
//! columns are derived from the data: [`records_table`] uses the union of all
//! keys in first-seen order, and [`record_table`] lays a single record out as
//! `Field | Value` rows.
//!
//! ## Example
//!
//! ```rust
//! use employes_client::output::TableBuilder;
//!
//! let table = TableBuilder::new()
//!     .color(false)
//!     .headers(["id", "first_name"])
//!     .row(["42", "Jane"])
//!     .build();
//! assert!(table.to_string().contains("Jane"));
//! ```

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::entity::Attributes;
use crate::util::{display_value, truncate};

/// Maximum characters shown per cell in multi-record tables.
pub const MAX_CELL_WIDTH: usize = 48;

/// Creates a table with the standard preset and dynamic arrangement.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builder for tables with optionally colored headers.
pub struct TableBuilder {
    table: Table,
    color: bool,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self {
            table: create_table(),
            color: console::colors_enabled(),
        }
    }

    pub fn color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Sets the header row. Headers are cyan when color is enabled.
    pub fn headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        if self.color {
            let cells: Vec<Cell> = headers.iter().map(|h| Cell::new(h).fg(Color::Cyan)).collect();
            self.table.set_header(cells);
        } else {
            self.table.set_header(headers);
        }
        self
    }

    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        self.table.add_row(row);
        self
    }

    pub fn build(self) -> Table {
        self.table
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns the union of attribute keys across `records`, in first-seen order.
pub fn collect_columns(records: &[&Attributes]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
        }
    }
    columns
}

/// Builds a table with one row per record.
///
/// Missing attributes render as empty cells and long values are truncated to
/// [`MAX_CELL_WIDTH`].
pub fn records_table(records: &[&Attributes], color: bool) -> Table {
    let columns = collect_columns(records);
    let mut builder = TableBuilder::new().color(color).headers(columns.iter().cloned());

    for record in records {
        let cells = columns.iter().map(|column| {
            record
                .get(column)
                .map(|value| truncate(&display_value(value), MAX_CELL_WIDTH))
                .unwrap_or_default()
        });
        builder = builder.row(cells);
    }

    builder.build()
}

/// Builds a two-column `Field | Value` table for a single record.
pub fn record_table(record: &Attributes, color: bool) -> Table {
    record
        .iter()
        .fold(
            TableBuilder::new().color(color).headers(["Field", "Value"]),
            |builder, (key, value)| builder.row([key.clone(), display_value(value)]),
        )
        .build()
}
