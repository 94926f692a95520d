use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use crate::error::FinCalcError;
use crate::types::*;
use crate::FinCalcResult;

const MONTHS_PER_YEAR: Decimal = dec!(12);

pub const MAX_TENURE_YEARS: u32 = 100;
/// Upper bound on schedule length
pub const MAX_TENURE_MONTHS: u32 = MAX_TENURE_YEARS * 12;

/// Loan terms as entered on the EMI form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanInput {
    pub principal: Money,
    /// Annual interest rate in percent (10 = 10% p.a.)
    pub annual_rate_percent: Percent,
    pub tenure_years: Years,
}

impl LoanInput {
    pub fn new(principal: Money, annual_rate_percent: Percent, tenure_years: Years) -> Self {
        Self {
            principal,
            annual_rate_percent,
            tenure_years,
        }
    }

    /// Monthly rate as a fraction: annual percent / 12 / 100.
    pub fn monthly_rate(&self) -> Decimal {
        self.annual_rate_percent / MONTHS_PER_YEAR / Decimal::ONE_HUNDRED
    }
}

/// One month of the amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmortizationRow {
    pub month: u32,
    pub installment: Money,
    pub principal_component: Money,
    pub interest_component: Money,
    pub remaining_balance: Money,
}

/// Principal versus interest split of the total payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub principal: Money,
    pub total_interest: Money,
    pub principal_share_percent: Percent,
    pub interest_share_percent: Percent,
}

/// Output of the EMI calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiOutput {
    pub principal: Money,
    /// Monthly rate as a fraction (0.008333 for 10% p.a.)
    pub monthly_rate: Decimal,
    pub tenure_months: Decimal,
    pub monthly_installment: Money,
    pub total_interest: Money,
    pub total_payment: Money,
    pub breakdown: PaymentBreakdown,
    pub schedule: Vec<AmortizationRow>,
}

/// Calculate the equated monthly installment and full amortization schedule.
///
/// `installment = P·r·(1+r)^n / ((1+r)^n − 1)` with `r` the monthly rate and
/// `n` the tenure in months. A zero rate is rejected: the closed form divides
/// by zero there.
pub fn calculate_emi(input: &LoanInput) -> FinCalcResult<ComputationOutput<EmiOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let output = amortize(input, &mut warnings)?;

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Equated Monthly Installment (reducing balance)",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_percent": input.annual_rate_percent.to_string(),
            "tenure_years": input.tenure_years.to_string(),
            "compounding": "monthly",
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Shared by the single-loan calculator and the loan comparison.
pub(crate) fn amortize(input: &LoanInput, warnings: &mut Vec<String>) -> FinCalcResult<EmiOutput> {
    let (monthly_rate, months) = validate_loan(input)?;
    let factor = growth_factor(monthly_rate, months)?;

    let denominator = factor - Decimal::ONE;
    if denominator.is_zero() {
        return Err(FinCalcError::validation(
            "annual_rate_percent",
            "Interest rate is too small to amortize",
        ));
    }

    let installment = factor
        .checked_div(denominator)
        .and_then(|annuity| input.principal.checked_mul(monthly_rate)?.checked_mul(annuity))
        .ok_or_else(|| out_of_range("principal"))?;
    let total_payment = installment
        .checked_mul(months)
        .ok_or_else(|| out_of_range("principal"))?;
    let total_interest = total_payment - input.principal;

    debug!(
        principal = %input.principal,
        monthly_rate = %monthly_rate,
        months = %months,
        installment = %installment,
        "computed EMI"
    );

    let whole_months = months.trunc().to_u32().ok_or_else(|| {
        FinCalcError::validation("tenure_years", "Tenure is too long to schedule")
    })?;
    if !months.fract().is_zero() {
        warn!(months = %months, "fractional tenure; schedule truncated");
        warnings.push(format!(
            "Tenure of {} months is not a whole number; schedule covers {} months",
            months.normalize(),
            whole_months
        ));
    }

    let mut schedule = Vec::with_capacity(whole_months as usize);
    let mut balance = input.principal;
    for month in 1..=whole_months {
        let interest_component = balance * monthly_rate;
        let principal_component = installment - interest_component;
        balance -= principal_component;

        schedule.push(AmortizationRow {
            month,
            installment,
            principal_component,
            interest_component,
            remaining_balance: balance,
        });
    }

    Ok(EmiOutput {
        principal: input.principal,
        monthly_rate,
        tenure_months: months,
        monthly_installment: installment,
        total_interest,
        total_payment,
        breakdown: PaymentBreakdown {
            principal: input.principal,
            total_interest,
            principal_share_percent: share_percent(input.principal, total_payment),
            interest_share_percent: share_percent(total_interest, total_payment),
        },
        schedule,
    })
}

/// Returns the monthly rate and tenure in months.
fn validate_loan(input: &LoanInput) -> FinCalcResult<(Decimal, Decimal)> {
    if input.principal <= Decimal::ZERO {
        return Err(FinCalcError::validation(
            "principal",
            "Loan amount must be positive",
        ));
    }

    let monthly_rate = input.monthly_rate();
    if monthly_rate <= Decimal::ZERO {
        return Err(FinCalcError::validation(
            "annual_rate_percent",
            "Interest rate must be positive; zero-rate loans have no EMI",
        ));
    }

    let months = input
        .tenure_years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| out_of_range("tenure_years"))?;
    if months <= Decimal::ZERO {
        return Err(FinCalcError::validation(
            "tenure_years",
            "Tenure must be positive",
        ));
    }
    if months > Decimal::from(MAX_TENURE_MONTHS) {
        return Err(FinCalcError::validation(
            "tenure_years",
            format!("Tenure cannot exceed {MAX_TENURE_YEARS} years"),
        ));
    }

    Ok((monthly_rate, months))
}

fn out_of_range(field: &str) -> FinCalcError {
    FinCalcError::validation(field, "Value is out of range for this rate and tenure")
}

/// `(1 + r)^n`, exact repeated multiplication for whole months.
fn growth_factor(monthly_rate: Decimal, months: Decimal) -> FinCalcResult<Decimal> {
    let base = Decimal::ONE + monthly_rate;
    let factor = if months.fract().is_zero() {
        months.to_u64().and_then(|n| base.checked_powu(n))
    } else {
        base.checked_powd(months)
    };
    factor.ok_or_else(|| {
        FinCalcError::validation("tenure_years", "Tenure is too long for the given rate")
    })
}
