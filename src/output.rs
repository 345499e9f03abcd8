//! Table and JSON output formatting for CLI commands.

use serde::Serialize;
use serde_json::Value;
use tabled::builder::Builder;
use tabled::settings::Style;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print a list of rows that know their own columns
pub fn print_list<T: Serialize + Tabled>(items: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if items.is_empty() {
                println!("No results found.");
            } else {
                let mut table = Table::new(items);
                table.with(Style::rounded());
                println!("{table}");
            }
        }
        OutputFormat::Json => print_json(&items),
    }
}

/// Print API records, showing `columns` in table mode
pub fn print_records<T: Serialize>(records: &[T], columns: &[&str], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No results found.");
                return;
            }
            println!("{}", record_table(records, columns));
        }
        OutputFormat::Json => print_json(&records),
    }
}

/// Print a single item in the selected format
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => match serde_json::to_value(item) {
            Ok(Value::Object(fields)) => {
                for (key, value) in &fields {
                    print_kv(key, &cell(value));
                }
            }
            Ok(other) => println!("{}", cell(&other)),
            Err(_) => println!("<unprintable>"),
        },
        OutputFormat::Json => print_json(item),
    }
}

/// Print a success message
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning message
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error message
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<24} {}", format!("{key}:"), value);
}

fn print_json<T: Serialize + ?Sized>(item: &T) {
    let json = serde_json::to_string_pretty(item).unwrap_or_else(|_| "null".to_string());
    println!("{json}");
}

fn record_table<T: Serialize>(records: &[T], columns: &[&str]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(columns.iter().map(|c| c.to_string()));
    for record in records {
        let value = serde_json::to_value(record).unwrap_or(Value::Null);
        builder.push_record(
            columns
                .iter()
                .map(|c| value.get(*c).map(cell).unwrap_or_default()),
        );
    }
    let mut table = builder.build();
    table.with(Style::rounded());
    table
}

fn cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => String::from(if *b { "是" } else { "否" }),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_record_table_picks_columns() {
        let records = vec![
            json!({"awardId": "AW1", "awardName": "国家奖学金", "awardAmount": 8000}),
            json!({"awardId": "AW2", "awardName": null}),
        ];
        let table = record_table(&records, &["awardId", "awardName"]).to_string();
        assert!(table.contains("awardId"));
        assert!(table.contains("国家奖学金"));
        assert!(table.contains("AW2"));
        assert!(!table.contains("8000"));
    }

    #[test]
    fn test_cell_rendering() {
        assert_eq!(cell(&Value::Null), "");
        assert_eq!(cell(&json!(true)), "是");
        assert_eq!(cell(&json!(3)), "3");
        assert_eq!(cell(&json!("x")), "x");
    }
}
