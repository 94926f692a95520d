use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::rates::is_standard_rate;
use crate::error::FinCalcError;
use crate::types::*;
use crate::FinCalcResult;

/// Whether the entered amount excludes or already includes GST
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GstMode {
    /// Amount is the base price; tax is added on top
    #[default]
    Exclusive,
    /// Amount is the final price; tax is extracted from it
    Inclusive,
}

/// Intra-state supplies split GST into CGST and SGST; inter-state supplies pay IGST
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SupplyType {
    #[default]
    IntraState,
    InterState,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstInput {
    pub amount: Money,
    pub rate_percent: Percent,
    #[serde(default)]
    pub mode: GstMode,
    #[serde(default)]
    pub supply: SupplyType,
}

impl GstInput {
    /// Tax added on top of `base_price`, intra-state.
    pub fn exclusive(base_price: Money, rate_percent: Percent) -> Self {
        Self {
            amount: base_price,
            rate_percent,
            mode: GstMode::Exclusive,
            supply: SupplyType::IntraState,
        }
    }

    /// Tax already contained in `final_price`, intra-state.
    pub fn inclusive(final_price: Money, rate_percent: Percent) -> Self {
        Self {
            amount: final_price,
            rate_percent,
            mode: GstMode::Inclusive,
            supply: SupplyType::IntraState,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstComponents {
    pub cgst: Money,
    pub sgst: Money,
    pub igst: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstOutput {
    pub base_price: Money,
    pub tax_amount: Money,
    pub final_price: Money,
    pub rate_percent: Percent,
    pub mode: GstMode,
    pub components: GstComponents,
}

/// Compute GST on a price.
///
/// Exclusive: `tax = base × rate / 100`, `final = base + tax`.
/// Inclusive: `base = final × 100 / (100 + rate)`, `tax = final − base`.
/// Either way `final_price − base_price == tax_amount` holds exactly.
pub fn calculate_gst(input: &GstInput) -> FinCalcResult<ComputationOutput<GstOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    if input.amount <= Decimal::ZERO {
        return Err(FinCalcError::validation("amount", "Price must be positive"));
    }
    if input.rate_percent < Decimal::ZERO {
        return Err(FinCalcError::validation(
            "rate_percent",
            "GST rate cannot be negative",
        ));
    }
    if !is_standard_rate(input.rate_percent) {
        warnings.push(format!(
            "{}% is not a standard GST slab (0, 5, 12, 18, 28)",
            input.rate_percent.normalize()
        ));
    }

    let rate = input.rate_percent / Decimal::ONE_HUNDRED;
    let (base_price, tax_amount, final_price) = match input.mode {
        GstMode::Exclusive => {
            let tax = input
                .amount
                .checked_mul(rate)
                .ok_or_else(|| out_of_range("amount"))?;
            let final_price = input
                .amount
                .checked_add(tax)
                .ok_or_else(|| out_of_range("amount"))?;
            (input.amount, tax, final_price)
        }
        GstMode::Inclusive => {
            let base = input
                .amount
                .checked_div(Decimal::ONE + rate)
                .ok_or_else(|| out_of_range("rate_percent"))?;
            (base, input.amount - base, input.amount)
        }
    };

    let components = match input.supply {
        SupplyType::IntraState => {
            let half = tax_amount / dec!(2);
            GstComponents {
                cgst: half,
                sgst: tax_amount - half,
                igst: Decimal::ZERO,
            }
        }
        SupplyType::InterState => GstComponents {
            cgst: Decimal::ZERO,
            sgst: Decimal::ZERO,
            igst: tax_amount,
        },
    };

    debug!(
        amount = %input.amount,
        rate_percent = %input.rate_percent,
        mode = ?input.mode,
        tax_amount = %tax_amount,
        "computed GST"
    );

    let output = GstOutput {
        base_price,
        tax_amount,
        final_price,
        rate_percent: input.rate_percent,
        mode: input.mode,
        components,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        match input.mode {
            GstMode::Exclusive => "GST exclusive (tax added to base price)",
            GstMode::Inclusive => "GST inclusive (tax extracted from final price)",
        },
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn out_of_range(field: &str) -> FinCalcError {
    FinCalcError::validation(field, "Value is out of range")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_exclusive_known_answer() {
        let result = calculate_gst(&GstInput::exclusive(dec!(100), dec!(18))).unwrap();
        let gst = &result.result;
        assert_eq!(gst.base_price, dec!(100));
        assert_eq!(gst.tax_amount, dec!(18));
        assert_eq!(gst.final_price, dec!(118));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_inclusive_known_answer() {
        let gst = calculate_gst(&GstInput::inclusive(dec!(118), dec!(18)))
            .unwrap()
            .result;
        assert_eq!(gst.base_price, dec!(100));
        assert_eq!(gst.tax_amount, dec!(18));
        assert_eq!(gst.final_price, dec!(118));
    }

    #[test]
    fn test_final_minus_base_is_tax_exactly() {
        for amount in [dec!(0.01), dec!(99.99), dec!(1234.567), dec!(1000000)] {
            for rate in [dec!(0), dec!(5), dec!(12), dec!(18), dec!(28), dec!(7.25)] {
                for input in [
                    GstInput::exclusive(amount, rate),
                    GstInput::inclusive(amount, rate),
                ] {
                    let gst = calculate_gst(&input).unwrap().result;
                    assert_eq!(gst.final_price - gst.base_price, gst.tax_amount);
                }
            }
        }
    }

    #[test]
    fn test_zero_rate_has_no_tax() {
        let gst = calculate_gst(&GstInput::exclusive(dec!(500), dec!(0)))
            .unwrap()
            .result;
        assert_eq!(gst.tax_amount, Decimal::ZERO);
        assert_eq!(gst.final_price, dec!(500));
    }

    #[test]
    fn test_intra_state_splits_cgst_sgst() {
        let gst = calculate_gst(&GstInput::exclusive(dec!(1000), dec!(18)))
            .unwrap()
            .result;
        assert_eq!(gst.components.cgst, dec!(90));
        assert_eq!(gst.components.sgst, dec!(90));
        assert_eq!(gst.components.igst, Decimal::ZERO);
    }

    #[test]
    fn test_inter_state_is_igst() {
        let mut input = GstInput::exclusive(dec!(1000), dec!(28));
        input.supply = SupplyType::InterState;
        let gst = calculate_gst(&input).unwrap().result;
        assert_eq!(gst.components.igst, dec!(280));
        assert_eq!(gst.components.cgst + gst.components.sgst, Decimal::ZERO);
    }

    #[test]
    fn test_non_standard_rate_warns() {
        let result = calculate_gst(&GstInput::exclusive(dec!(100), dec!(3))).unwrap();
        assert_eq!(result.result.tax_amount, dec!(3));
        assert_eq!(result.warnings.len(), 1);
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        for amount in [dec!(0), dec!(-10)] {
            match calculate_gst(&GstInput::exclusive(amount, dec!(18))) {
                Err(FinCalcError::Validation { field, .. }) => assert_eq!(field, "amount"),
                other => panic!("Expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_negative_rate_rejected() {
        match calculate_gst(&GstInput::exclusive(dec!(100), dec!(-1))) {
            Err(FinCalcError::Validation { field, .. }) => assert_eq!(field, "rate_percent"),
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_max_amount_exclusive_is_out_of_range() {
        let amount = Decimal::MAX;
        match calculate_gst(&GstInput::exclusive(amount, dec!(18))) {
            Err(FinCalcError::Validation { field, .. }) => assert_eq!(field, "amount"),
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_max_amount_inclusive_extracts_tax() {
        let gst = calculate_gst(&GstInput::inclusive(Decimal::MAX, dec!(18)))
            .unwrap()
            .result;
        assert_eq!(gst.final_price, Decimal::MAX);
        assert_eq!(gst.final_price - gst.base_price, gst.tax_amount);
        assert!(gst.base_price < gst.final_price);
    }

    #[test]
    fn test_max_rate_never_panics() {
        for input in [
            GstInput::exclusive(dec!(1000000), Decimal::MAX),
            GstInput::inclusive(dec!(1000000), Decimal::MAX),
        ] {
            assert!(matches!(
                calculate_gst(&input),
                Ok(_) | Err(FinCalcError::Validation { .. })
            ));
        }
    }

    #[test]
    fn test_mode_deserializes_with_default() {
        let input: GstInput =
            serde_json::from_str(r#"{"amount": "250", "rate_percent": "12"}"#).unwrap();
        assert_eq!(input.mode, GstMode::Exclusive);
        assert_eq!(input.supply, SupplyType::IntraState);

        let input: GstInput = serde_json::from_str(
            r#"{"amount": "112", "rate_percent": "12", "mode": "inclusive"}"#,
        )
        .unwrap();
        assert_eq!(input.mode, GstMode::Inclusive);
    }
}
