//! Rendering primitives shared by the command handlers.
//!
//! Tables are ASCII grids with a header row and a separator line between
//! every data row. Row sorting is owned by the table primitive; handlers
//! only decide whether to ask for it.

use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use crate::error::Result;

pub struct TableView {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableView {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Lexicographic sort by the first column, ties broken by subsequent
    /// columns.
    pub fn sort(&mut self) {
        self.rows.sort();
    }

    /// Renders the grid. An empty row set still renders the header row.
    pub fn render(&self) -> String {
        let mut builder = Builder::default();
        builder.push_record(self.headers.clone());
        for row in &self.rows {
            builder.push_record(row.clone());
        }

        let mut table = builder.build();
        table.with(Style::ascii());

        let mut rendered = table.to_string();
        rendered.push('\n');
        rendered
    }
}

pub fn json_pretty<T: Serialize>(value: &T) -> Result<String> {
    let mut rendered = serde_json::to_string_pretty(value)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Plan option values come as JSON strings or numbers; strings print bare,
/// everything else through its JSON form.
pub fn opt_display(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
