use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::income_tax::{assess, TaxInput, TaxOutput, TaxRegime};
use crate::types::*;
use crate::FinCalcResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeComparisonInput {
    pub annual_income: Money,
    #[serde(default)]
    pub deductions: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegimeComparisonOutput {
    pub new_regime: TaxOutput,
    pub old_regime: TaxOutput,
    /// Regime with the lower liability; new on a tie
    pub recommended: TaxRegime,
    pub savings: Money,
}

/// Assess the same income under both regimes and pick the cheaper one.
pub fn compare_regimes(
    input: &RegimeComparisonInput,
) -> FinCalcResult<ComputationOutput<RegimeComparisonOutput>> {
    let start = Instant::now();
    // Deductions are expected here; only old-regime behaviour is worth reporting.
    let mut ignored: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    let new_regime = assess(
        &TaxInput {
            annual_income: input.annual_income,
            regime: TaxRegime::New,
            deductions: input.deductions,
        },
        &mut ignored,
    )?;
    let old_regime = assess(
        &TaxInput {
            annual_income: input.annual_income,
            regime: TaxRegime::Old,
            deductions: input.deductions,
        },
        &mut warnings,
    )?;

    let (recommended, savings) = if old_regime.total_tax < new_regime.total_tax {
        (TaxRegime::Old, new_regime.total_tax - old_regime.total_tax)
    } else {
        (TaxRegime::New, old_regime.total_tax - new_regime.total_tax)
    };
    if savings.is_zero() && input.annual_income > Decimal::ZERO {
        warnings.push("Both regimes produce the same liability".into());
    }

    let output = RegimeComparisonOutput {
        new_regime,
        old_regime,
        recommended,
        savings,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Income tax regime comparison",
        input,
        warnings,
        elapsed,
        output,
    ))
}
