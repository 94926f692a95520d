pub mod csv_out;
pub mod currency;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::{Map, Value};

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// A result object split into scalar fields and row-shaped arrays
/// (amortization schedule, slab breakdown).
#[derive(Debug, Default, PartialEq)]
pub struct Sections {
    pub fields: Vec<(String, String)>,
    pub tables: Vec<(String, Vec<Value>)>,
}

impl Sections {
    pub fn from_object(map: &Map<String, Value>) -> Self {
        let mut sections = Sections::default();
        sections.collect("", map);
        sections
    }

    fn collect(&mut self, prefix: &str, map: &Map<String, Value>) {
        for (key, val) in map {
            let name = if prefix.is_empty() {
                key.clone()
            } else {
                format!("{prefix}.{key}")
            };
            match val {
                Value::Object(inner) => self.collect(&name, inner),
                Value::Array(rows) if rows.first().is_some_and(Value::is_object) => {
                    self.tables.push((name, rows.clone()));
                }
                other => self.fields.push((name, format_value(other))),
            }
        }
    }
}

/// The `result` object of an envelope, or the value itself.
pub fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            items.join(", ")
        }
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}
