use serde_json::Value;
use std::io::{self, Write};

use super::{result_of, Sections};

/// Write output as CSV to stdout.
///
/// A result carrying row data (amortization schedule, slab breakdown) exports
/// those rows; otherwise a two-column `field,value` listing.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(stdout.lock(), value) {
        tracing::error!(error = %e, "CSV output failed");
    }
}

fn write_csv<W: Write>(out: W, value: &Value) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(out);

    match result_of(value) {
        Value::Object(result) => {
            let sections = Sections::from_object(result);
            match sections.tables.first() {
                Some((_, rows)) => write_rows(&mut wtr, rows)?,
                None => {
                    wtr.write_record(["field", "value"])?;
                    for (key, val) in &sections.fields {
                        wtr.write_record([key.as_str(), val.as_str()])?;
                    }
                }
            }
        }
        other => wtr.write_record([super::format_value(other)])?,
    }

    wtr.flush()?;
    Ok(())
}

fn write_rows<W: Write>(wtr: &mut csv::Writer<W>, rows: &[Value]) -> Result<(), csv::Error> {
    let headers: Vec<&str> = match rows.first() {
        Some(Value::Object(first)) => first.keys().map(|k| k.as_str()).collect(),
        _ => return Ok(()),
    };
    wtr.write_record(&headers)?;

    for item in rows {
        if let Value::Object(map) = item {
            let row: Vec<String> = headers
                .iter()
                .map(|h| map.get(*h).map(super::format_value).unwrap_or_default())
                .collect();
            wtr.write_record(&row)?;
        }
    }
    Ok(())
}
