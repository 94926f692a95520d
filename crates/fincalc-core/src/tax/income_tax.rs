use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::debug;

use super::slabs::{apply_slabs, sum_slab_tax, SlabTax, NEW_REGIME_SLABS, OLD_REGIME_BANDS};
use crate::error::FinCalcError;
use crate::types::*;
use crate::FinCalcResult;

const OLD_REGIME_LABEL: &str = "As per old regime";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    /// Progressive slabs, no deductions
    #[default]
    New,
    /// Simplified bands; deductions reduce taxable income
    Old,
}

impl std::fmt::Display for TaxRegime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TaxRegime::New => write!(f, "new"),
            TaxRegime::Old => write!(f, "old"),
        }
    }
}

impl std::str::FromStr for TaxRegime {
    type Err = FinCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "new" => Ok(TaxRegime::New),
            "old" => Ok(TaxRegime::Old),
            other => Err(FinCalcError::validation(
                "regime",
                format!("Unknown tax regime '{other}' (expected 'new' or 'old')"),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxInput {
    pub annual_income: Money,
    #[serde(default)]
    pub regime: TaxRegime,
    /// 80C, HRA and similar; honoured under the old regime only
    #[serde(default)]
    pub deductions: Money,
}

impl TaxInput {
    pub fn new(annual_income: Money, regime: TaxRegime) -> Self {
        Self {
            annual_income,
            regime,
            deductions: Decimal::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxOutput {
    pub regime: TaxRegime,
    pub annual_income: Money,
    pub taxable_income: Money,
    pub total_tax: Money,
    /// `total_tax / annual_income × 100`; `None` for zero income
    pub effective_rate_percent: Option<Percent>,
    pub slab_breakdown: Vec<SlabTax>,
}

/// Compute annual income tax under the chosen regime.
///
/// New regime: slabs are applied cumulatively and only slabs that carry tax
/// appear in the breakdown. Old regime: the simplified bands are reported as
/// a single opaque slab.
pub fn calculate_income_tax(input: &TaxInput) -> FinCalcResult<ComputationOutput<TaxOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let output = assess(input, &mut warnings)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        match input.regime {
            TaxRegime::New => "Income tax, new regime (progressive slabs)",
            TaxRegime::Old => "Income tax, old regime (simplified bands)",
        },
        input,
        warnings,
        elapsed,
        output,
    ))
}

pub(crate) fn assess(input: &TaxInput, warnings: &mut Vec<String>) -> FinCalcResult<TaxOutput> {
    if input.annual_income < Decimal::ZERO {
        return Err(FinCalcError::validation(
            "annual_income",
            "Income cannot be negative",
        ));
    }
    if input.deductions < Decimal::ZERO {
        return Err(FinCalcError::validation(
            "deductions",
            "Deductions cannot be negative",
        ));
    }

    let (taxable_income, total_tax, slab_breakdown) = match input.regime {
        TaxRegime::New => {
            if !input.deductions.is_zero() {
                warnings.push("Deductions are not available under the new regime; ignored".into());
            }
            let slabs = apply_slabs(&NEW_REGIME_SLABS, input.annual_income)?;
            let total = sum_slab_tax(&slabs)?;
            let breakdown = slabs
                .into_iter()
                .filter(|(_, tax)| *tax > Decimal::ZERO)
                .map(|(slab, tax)| SlabTax {
                    range_label: slab.range_label(),
                    rate_percent: Some(slab.rate_percent),
                    tax_for_slab: tax,
                })
                .collect();
            (input.annual_income, total, breakdown)
        }
        TaxRegime::Old => {
            let taxable = (input.annual_income - input.deductions).max(Decimal::ZERO);
            let total = sum_slab_tax(&apply_slabs(&OLD_REGIME_BANDS, taxable)?)?;
            let breakdown = vec![SlabTax {
                range_label: OLD_REGIME_LABEL.into(),
                rate_percent: None,
                tax_for_slab: total,
            }];
            (taxable, total, breakdown)
        }
    };

    let effective_rate_percent = if input.annual_income.is_zero() {
        None
    } else {
        Some(total_tax / input.annual_income * Decimal::ONE_HUNDRED)
    };

    debug!(
        regime = %input.regime,
        taxable_income = %taxable_income,
        total_tax = %total_tax,
        "assessed income tax"
    );

    Ok(TaxOutput {
        regime: input.regime,
        annual_income: input.annual_income,
        taxable_income,
        total_tax,
        effective_rate_percent,
        slab_breakdown,
    })
}
