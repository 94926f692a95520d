use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::emi::{amortize, EmiOutput, LoanInput};
use crate::types::*;
use crate::FinCalcResult;

/// Two loan offers to compare side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanComparisonInput {
    pub first: LoanInput,
    pub second: LoanInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoanChoice {
    First,
    Second,
}

/// Both EMI results plus their absolute differences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanComparisonOutput {
    pub first: EmiOutput,
    pub second: EmiOutput,
    pub emi_difference: Money,
    pub interest_difference: Money,
    pub total_payment_difference: Money,
    /// Loan with the smaller total payment; `None` when they cost the same
    pub lower_cost: Option<LoanChoice>,
}

/// Run the EMI engine on both loans and derive the pairwise differences.
pub fn compare_loans(
    input: &LoanComparisonInput,
) -> FinCalcResult<ComputationOutput<LoanComparisonOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let first = amortize(&input.first, &mut warnings).map_err(|e| e.in_scope("first"))?;
    let second = amortize(&input.second, &mut warnings).map_err(|e| e.in_scope("second"))?;

    let lower_cost = match first.total_payment.cmp(&second.total_payment) {
        std::cmp::Ordering::Less => Some(LoanChoice::First),
        std::cmp::Ordering::Greater => Some(LoanChoice::Second),
        std::cmp::Ordering::Equal => None,
    };

    let output = LoanComparisonOutput {
        emi_difference: (first.monthly_installment - second.monthly_installment).abs(),
        interest_difference: (first.total_interest - second.total_interest).abs(),
        total_payment_difference: (first.total_payment - second.total_payment).abs(),
        lower_cost,
        first,
        second,
    };

    debug!(
        emi_difference = %output.emi_difference,
        total_payment_difference = %output.total_payment_difference,
        lower_cost = ?output.lower_cost,
        "compared loans"
    );

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Side-by-side EMI comparison",
        &input,
        warnings,
        elapsed,
        output,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FinCalcError;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn offers() -> LoanComparisonInput {
        LoanComparisonInput {
            first: LoanInput::new(dec!(5000000), dec!(8.5), dec!(20)),
            second: LoanInput::new(dec!(5000000), dec!(9), dec!(20)),
        }
    }

    #[test]
    fn test_identical_loans_have_no_difference() {
        let loan = LoanInput::new(dec!(750000), dec!(11), dec!(3));
        let input = LoanComparisonInput {
            first: loan.clone(),
            second: loan,
        };
        let result = compare_loans(&input).unwrap().result;
        assert_eq!(result.emi_difference, Decimal::ZERO);
        assert_eq!(result.interest_difference, Decimal::ZERO);
        assert_eq!(result.total_payment_difference, Decimal::ZERO);
        assert_eq!(result.lower_cost, None);
    }

    #[test]
    fn test_lower_rate_costs_less() {
        let result = compare_loans(&offers()).unwrap().result;
        assert_eq!(result.lower_cost, Some(LoanChoice::First));
        // ~43,391.16 vs ~44,986.30
        assert!((result.emi_difference - dec!(1595.14)).abs() < dec!(0.01));
        assert!(result.interest_difference > Decimal::ZERO);
        // Same principal, so interest and total payment differ by the same amount
        assert!(
            (result.interest_difference - result.total_payment_difference).abs()
                < dec!(0.000001)
        );
    }

    #[test]
    fn test_differences_are_symmetric() {
        let forward = compare_loans(&offers()).unwrap().result;
        let swapped = offers();
        let reverse = compare_loans(&LoanComparisonInput {
            first: swapped.second,
            second: swapped.first,
        })
        .unwrap()
        .result;

        assert_eq!(forward.emi_difference, reverse.emi_difference);
        assert_eq!(forward.total_payment_difference, reverse.total_payment_difference);
        assert_eq!(reverse.lower_cost, Some(LoanChoice::Second));
    }

    #[test]
    fn test_invalid_second_loan_is_scoped() {
        let mut input = offers();
        input.second.tenure_years = Decimal::ZERO;
        match compare_loans(&input) {
            Err(FinCalcError::Validation { field, .. }) => assert_eq!(field, "second.tenure_years"),
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_first_loan_is_scoped() {
        let mut input = offers();
        input.first.annual_rate_percent = Decimal::ZERO;
        match compare_loans(&input) {
            Err(FinCalcError::Validation { field, .. }) => {
                assert_eq!(field, "first.annual_rate_percent")
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }
}
