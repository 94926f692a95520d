//! Raw text form fields and their conversion into engine inputs.
//!
//! Every field arrives as free text. Blank or unparseable text is treated as
//! a missing field; domain checks (positivity and so on) stay with the engines.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::FinCalcError;
use crate::FinCalcResult;

#[cfg(feature = "gst")]
use crate::gst::{GstInput, GstMode, SupplyType};
#[cfg(feature = "loan")]
use crate::loan::emi::LoanInput;
#[cfg(feature = "tax")]
use crate::tax::{TaxInput, TaxRegime};

/// Parse one numeric form field.
///
/// Accepts plain decimals, `,`/`_` thousands separators and scientific
/// notation (`1e5`).
pub fn parse_field(field: &str, text: &str) -> FinCalcResult<Decimal> {
    let cleaned: String = text
        .trim()
        .chars()
        .filter(|c| *c != ',' && *c != '_')
        .collect();
    if cleaned.is_empty() {
        return Err(missing(field));
    }
    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|_| missing(field))
}

/// Like [`parse_field`], but blank text yields `None`.
pub fn parse_optional_field(field: &str, text: &str) -> FinCalcResult<Option<Decimal>> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        parse_field(field, text).map(Some)
    }
}

fn missing(field: &str) -> FinCalcError {
    FinCalcError::validation(field, "is required (enter a number)")
}

#[cfg(feature = "loan")]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanForm {
    #[serde(default)]
    pub principal: String,
    #[serde(default)]
    pub annual_rate_percent: String,
    #[serde(default)]
    pub tenure_years: String,
}

#[cfg(feature = "loan")]
impl LoanForm {
    pub fn parse(&self) -> FinCalcResult<LoanInput> {
        Ok(LoanInput {
            principal: parse_field("principal", &self.principal)?,
            annual_rate_percent: parse_field("annual_rate_percent", &self.annual_rate_percent)?,
            tenure_years: parse_field("tenure_years", &self.tenure_years)?,
        })
    }
}

#[cfg(feature = "gst")]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GstForm {
    #[serde(default)]
    pub amount: String,
    #[serde(default)]
    pub rate_percent: String,
    #[serde(default)]
    pub mode: GstMode,
    #[serde(default)]
    pub supply: SupplyType,
}

#[cfg(feature = "gst")]
impl GstForm {
    pub fn parse(&self) -> FinCalcResult<GstInput> {
        Ok(GstInput {
            amount: parse_field("amount", &self.amount)?,
            rate_percent: parse_field("rate_percent", &self.rate_percent)?,
            mode: self.mode,
            supply: self.supply,
        })
    }
}

#[cfg(feature = "tax")]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxForm {
    #[serde(default)]
    pub annual_income: String,
    #[serde(default)]
    pub regime: TaxRegime,
    /// Optional; blank means no deductions
    #[serde(default)]
    pub deductions: String,
}

#[cfg(feature = "tax")]
impl TaxForm {
    pub fn parse(&self) -> FinCalcResult<TaxInput> {
        Ok(TaxInput {
            annual_income: parse_field("annual_income", &self.annual_income)?,
            regime: self.regime,
            deductions: parse_optional_field("deductions", &self.deductions)?
                .unwrap_or(Decimal::ZERO),
        })
    }
}
