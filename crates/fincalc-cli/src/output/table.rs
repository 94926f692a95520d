use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_value, result_of, Sections};

/// Format output as tables: one for the headline fields, one per row array.
pub fn print_table(value: &Value) {
    match result_of(value) {
        Value::Object(result) => {
            let sections = Sections::from_object(result);
            println!("{}", fields_table(&sections.fields));
            for (title, rows) in &sections.tables {
                println!("\n{}:", title);
                println!("{}", rows_table(rows));
            }
        }
        other => println!("{}", format_value(other)),
    }

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn fields_table(fields: &[(String, String)]) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in fields {
        builder.push_record([key.as_str(), val.as_str()]);
    }
    builder.build()
}

fn rows_table(rows: &[Value]) -> Table {
    let mut builder = Builder::default();
    let headers: Vec<String> = match rows.first() {
        Some(Value::Object(first)) => first.keys().cloned().collect(),
        _ => Vec::new(),
    };
    builder.push_record(headers.iter().map(|h| column_title(h)));

    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(h.as_str()).map(format_value).unwrap_or_default())
                .collect();
            builder.push_record(row);
        }
    }
    builder.build()
}

/// `principal_component` becomes `Principal Component`.
fn column_title(key: &str) -> String {
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
