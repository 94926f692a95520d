use napi::Result as NapiResult;
use napi_derive::napi;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::str::FromStr;

use fincalc_core::forms::{GstForm, LoanForm, TaxForm};
use fincalc_core::{FinCalcError, FinCalcResult};

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

/// Deserialize `input_json`, run `f`, serialize the envelope back.
fn run_json<I, O, F>(input_json: &str, f: F) -> NapiResult<String>
where
    I: DeserializeOwned,
    O: Serialize,
    F: FnOnce(&I) -> FinCalcResult<O>,
{
    let input: I = serde_json::from_str(input_json)
        .map_err(FinCalcError::from)
        .map_err(to_napi_error)?;
    let output = f(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Loans
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_emi(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::loan::emi::calculate_emi)
}

#[napi]
pub fn calculate_emi_from_form(form_json: String) -> NapiResult<String> {
    run_json(&form_json, |form: &LoanForm| {
        fincalc_core::loan::emi::calculate_emi(&form.parse()?)
    })
}

#[napi]
pub fn compare_loans(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::loan::comparison::compare_loans)
}

// ---------------------------------------------------------------------------
// GST
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_gst(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::gst::calculate_gst)
}

#[napi]
pub fn calculate_gst_from_form(form_json: String) -> NapiResult<String> {
    run_json(&form_json, |form: &GstForm| {
        fincalc_core::gst::calculate_gst(&form.parse()?)
    })
}

// ---------------------------------------------------------------------------
// Income tax
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_income_tax(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::tax::calculate_income_tax)
}

#[napi]
pub fn calculate_income_tax_from_form(form_json: String) -> NapiResult<String> {
    run_json(&form_json, |form: &TaxForm| {
        fincalc_core::tax::calculate_income_tax(&form.parse()?)
    })
}

#[napi]
pub fn compare_tax_regimes(input_json: String) -> NapiResult<String> {
    run_json(&input_json, fincalc_core::tax::compare_regimes)
}

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Format a decimal string as rupees, e.g. `"100000"` to `"₹1,00,000.00"`.
#[napi]
pub fn format_inr(amount: String) -> NapiResult<String> {
    let value = Decimal::from_str(amount.trim()).map_err(to_napi_error)?;
    Ok(fincalc_core::format::format_inr(value))
}
