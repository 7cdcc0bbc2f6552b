//! Output formatting for CLI results
//!
//! Tables are for people, JSON is the raw payload for scripts.

use serde::Serialize;
use tabled::settings::object::Rows;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::cli::OutputFormat;
use lacework_sdk::Result;

const EMPTY_TABLE: &str = "There are no results to display.";

/// Types that can be rendered in every output format
pub trait Formattable {
    /// Format the data according to the specified format
    fn format(&self, format: OutputFormat) -> Result<String>;

    /// Format and print to stdout
    fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.format(format)?);
        Ok(())
    }
}

impl<T: Tabled + Serialize> Formattable for Vec<T> {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => Ok(render_table(self)),
            OutputFormat::Json => render_json(self),
        }
    }
}

/// Print a single resource: the full model as JSON, or its display row as a table
pub fn print_item<M, D>(model: &M, row: D, format: OutputFormat) -> Result<()>
where
    M: Serialize,
    D: Tabled + Serialize,
{
    match format {
        OutputFormat::Json => println!("{}", render_json(model)?),
        OutputFormat::Table => println!("{}", render_table(&[row])),
    }
    Ok(())
}

fn render_table<T: Tabled>(rows: &[T]) -> String {
    if rows.is_empty() {
        return EMPTY_TABLE.to_string();
    }

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Rows::first()).with(Alignment::center()));
    table.to_string()
}

/// Pretty JSON for any serializable value
pub fn render_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Tabled)]
    struct Row {
        #[tabled(rename = "TOKEN")]
        token: String,
        #[tabled(rename = "STATE")]
        state: String,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                token: "T1".into(),
                state: "Enabled".into(),
            },
            Row {
                token: "T2".into(),
                state: "Disabled".into(),
            },
        ]
    }

    #[test]
    fn test_table_has_headers_and_rows() {
        let table = rows().format(OutputFormat::Table).unwrap();
        assert!(table.contains("TOKEN"));
        assert!(table.contains("STATE"));
        assert!(table.contains("T2"));
        assert!(table.contains("Disabled"));
    }

    #[test]
    fn test_empty_table() {
        let rows: Vec<Row> = vec![];
        assert_eq!(rows.format(OutputFormat::Table).unwrap(), EMPTY_TABLE);
    }

    #[test]
    fn test_json_is_the_bare_payload() {
        let json = rows().format(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["token"], "T1");
        assert_eq!(value[1]["state"], "Disabled");
    }

    #[test]
    fn test_empty_json_is_an_array() {
        let rows: Vec<Row> = vec![];
        assert_eq!(rows.format(OutputFormat::Json).unwrap(), "[]");
    }
}
