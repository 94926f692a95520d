//! Income tax slab tables (annual INR) and the cumulative slab walk.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FinCalcError;
use crate::types::{Money, Percent};
use crate::FinCalcResult;

/// An income range taxed at a single marginal rate. `upper: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub lower: Money,
    pub upper: Option<Money>,
    pub rate_percent: Percent,
}

/// Tax attributed to one slab in a breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlabTax {
    pub range_label: String,
    /// `None` for an opaque slab whose rate varies across the range
    pub rate_percent: Option<Percent>,
    pub tax_for_slab: Money,
}

pub const NEW_REGIME_SLABS: [TaxSlab; 7] = [
    TaxSlab::new(dec!(0), Some(dec!(250000)), dec!(0)),
    TaxSlab::new(dec!(250000), Some(dec!(500000)), dec!(5)),
    TaxSlab::new(dec!(500000), Some(dec!(750000)), dec!(10)),
    TaxSlab::new(dec!(750000), Some(dec!(1000000)), dec!(15)),
    TaxSlab::new(dec!(1000000), Some(dec!(1250000)), dec!(20)),
    TaxSlab::new(dec!(1250000), Some(dec!(1500000)), dec!(25)),
    TaxSlab::new(dec!(1500000), None, dec!(30)),
];

/// Simplified old-regime bands. Cumulative application reproduces the
/// fixed bases of 12,500 at 500,000 and 112,500 at 1,000,000.
pub const OLD_REGIME_BANDS: [TaxSlab; 4] = [
    TaxSlab::new(dec!(0), Some(dec!(250000)), dec!(0)),
    TaxSlab::new(dec!(250000), Some(dec!(500000)), dec!(5)),
    TaxSlab::new(dec!(500000), Some(dec!(1000000)), dec!(20)),
    TaxSlab::new(dec!(1000000), None, dec!(30)),
];

impl TaxSlab {
    pub const fn new(lower: Money, upper: Option<Money>, rate_percent: Percent) -> Self {
        Self {
            lower,
            upper,
            rate_percent,
        }
    }

    /// Display label, e.g. `250001 - 500000` or `Above 1500000`.
    pub fn range_label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{} - {}", self.lower + Decimal::ONE, upper),
            None => format!("Above {}", self.lower),
        }
    }

    /// Portion of `income` that falls inside this slab.
    pub fn taxable_portion(&self, income: Money) -> Money {
        if income <= self.lower {
            return Decimal::ZERO;
        }
        let above = income - self.lower;
        match self.upper {
            Some(upper) => above.min(upper - self.lower),
            None => above,
        }
    }

    pub fn tax_on(&self, income: Money) -> Option<Money> {
        self.taxable_portion(income)
            .checked_mul(self.rate_percent / Decimal::ONE_HUNDRED)
    }
}

/// Walk the slabs in ascending order and return the tax owed in each.
pub fn apply_slabs(slabs: &[TaxSlab], income: Money) -> FinCalcResult<Vec<(TaxSlab, Money)>> {
    slabs
        .iter()
        .map(|slab| {
            slab.tax_on(income).map(|tax| (*slab, tax)).ok_or_else(|| {
                FinCalcError::validation("annual_income", "Income is out of range")
            })
        })
        .collect()
}

/// Sum of the per-slab taxes.
pub fn sum_slab_tax(slabs: &[(TaxSlab, Money)]) -> FinCalcResult<Money> {
    slabs.iter().try_fold(Decimal::ZERO, |acc, (_, tax)| {
        acc.checked_add(*tax)
            .ok_or_else(|| FinCalcError::validation("annual_income", "Income is out of range"))
    })
}
