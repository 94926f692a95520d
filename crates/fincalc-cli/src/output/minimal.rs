use serde_json::Value;

use super::{format_value, result_of};

/// The headline figure of each calculator, in priority order.
const PRIORITY_KEYS: &[&str] = &[
    "monthly_installment",
    "final_price",
    "total_tax",
    "recommended",
    "total_payment_difference",
];

/// Print just the key answer value from the output.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let result_obj = result_of(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    return format_value(val);
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_value(val));
        }
    }

    format_value(result_obj)
}
