//! `--inr`: rewrite decimal fields as display strings before rendering.

use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use fincalc_core::format::{format_inr, format_inr_whole, format_percent};

/// Field names holding rupee amounts across all calculator outputs.
const MONETARY_FIELDS: &[&str] = &[
    "principal",
    "monthly_installment",
    "total_interest",
    "total_payment",
    "installment",
    "principal_component",
    "interest_component",
    "remaining_balance",
    "amount",
    "base_price",
    "tax_amount",
    "final_price",
    "cgst",
    "sgst",
    "igst",
    "annual_income",
    "taxable_income",
    "deductions",
    "total_tax",
    "tax_for_slab",
    "savings",
];

/// Loan comparison deltas, shown to the whole rupee.
const WHOLE_RUPEE_FIELDS: &[&str] = &[
    "emi_difference",
    "interest_difference",
    "total_payment_difference",
];

/// Walk the value and format monetary and `*_percent` fields in place.
pub fn localize(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                let formatter: Option<fn(Decimal) -> String> =
                    if MONETARY_FIELDS.contains(&key.as_str()) {
                        Some(format_inr)
                    } else if WHOLE_RUPEE_FIELDS.contains(&key.as_str()) {
                        Some(format_inr_whole)
                    } else if key.ends_with("_percent") {
                        Some(format_percent)
                    } else {
                        None
                    };
                match (formatter, as_decimal(val)) {
                    (Some(fmt), Some(amount)) => *val = Value::String(fmt(amount)),
                    _ => localize(val),
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(localize),
        _ => {}
    }
}

fn as_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::String(s) => Decimal::from_str(s).ok(),
        Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_localize_envelope() {
        let mut value = json!({
            "result": {
                "total_tax": "22500",
                "effective_rate_percent": "3.7500",
                "regime": "new",
                "slab_breakdown": [
                    {
                        "range_label": "250001 - 500000",
                        "rate_percent": "5",
                        "tax_for_slab": "12500"
                    }
                ]
            },
            "metadata": { "computation_time_us": 12 }
        });
        localize(&mut value);

        let result = &value["result"];
        assert_eq!(result["total_tax"], "₹22,500.00");
        assert_eq!(result["effective_rate_percent"], "3.75%");
        assert_eq!(result["regime"], "new");
        assert_eq!(result["slab_breakdown"][0]["tax_for_slab"], "₹12,500.00");
        assert_eq!(result["slab_breakdown"][0]["range_label"], "250001 - 500000");
        assert_eq!(value["metadata"]["computation_time_us"], 12);
    }

    #[test]
    fn test_comparison_differences_are_whole_rupees() {
        let mut value = json!({ "emi_difference": "1595.136", "lower_cost": "first" });
        localize(&mut value);
        assert_eq!(value["emi_difference"], "₹1,595");
        assert_eq!(value["lower_cost"], "first");
    }

    #[test]
    fn test_null_rate_left_alone() {
        let mut value = json!({ "rate_percent": null, "tax_for_slab": "112500" });
        localize(&mut value);
        assert!(value["rate_percent"].is_null());
        assert_eq!(value["tax_for_slab"], "₹1,12,500.00");
    }
}
