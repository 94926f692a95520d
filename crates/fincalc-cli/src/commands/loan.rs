use clap::Args;
use serde_json::Value;

use fincalc_core::forms::LoanForm;
use fincalc_core::loan::comparison::{self, LoanComparisonInput};
use fincalc_core::loan::emi::{self, LoanInput};

use crate::input;

/// Arguments for the EMI calculator
#[derive(Args)]
pub struct EmiArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan amount
    #[arg(long)]
    pub principal: Option<String>,

    /// Annual interest rate in percent (e.g. 8.5)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// Tenure in years
    #[arg(long)]
    pub tenure: Option<String>,

    /// Omit the month-by-month schedule from the output
    #[arg(long)]
    pub no_schedule: bool,
}

impl EmiArgs {
    fn has_flags(&self) -> bool {
        self.principal.is_some() || self.rate.is_some() || self.tenure.is_some()
    }

    fn form(&self) -> LoanForm {
        LoanForm {
            principal: self.principal.clone().unwrap_or_default(),
            annual_rate_percent: self.rate.clone().unwrap_or_default(),
            tenure_years: self.tenure.clone().unwrap_or_default(),
        }
    }
}

pub fn run_emi(args: EmiArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let loan: LoanInput = match input::read_structured(args.input.as_deref(), args.has_flags())? {
        Some(loan) => loan,
        None => args.form().parse()?,
    };

    let output = emi::calculate_emi(&loan)?;
    let mut value = serde_json::to_value(output)?;
    if args.no_schedule {
        if let Some(result) = value.get_mut("result").and_then(Value::as_object_mut) {
            result.remove("schedule");
        }
    }
    Ok(value)
}

/// Arguments for comparing two loans
#[derive(Args)]
pub struct CompareLoansArgs {
    /// Path to JSON/YAML input file with `first` and `second` loans
    #[arg(long)]
    pub input: Option<String>,

    /// First loan amount
    #[arg(long)]
    pub principal1: Option<String>,

    /// First loan annual rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub rate1: Option<String>,

    /// First loan tenure in years
    #[arg(long)]
    pub tenure1: Option<String>,

    /// Second loan amount
    #[arg(long)]
    pub principal2: Option<String>,

    /// Second loan annual rate in percent
    #[arg(long, allow_hyphen_values = true)]
    pub rate2: Option<String>,

    /// Second loan tenure in years
    #[arg(long)]
    pub tenure2: Option<String>,

    /// Include both amortization schedules in the output
    #[arg(long)]
    pub with_schedules: bool,
}

impl CompareLoansArgs {
    fn has_flags(&self) -> bool {
        [
            &self.principal1,
            &self.rate1,
            &self.tenure1,
            &self.principal2,
            &self.rate2,
            &self.tenure2,
        ]
        .iter()
        .any(|flag| flag.is_some())
    }

    fn forms(&self) -> (LoanForm, LoanForm) {
        let text = |flag: &Option<String>| flag.clone().unwrap_or_default();
        (
            LoanForm {
                principal: text(&self.principal1),
                annual_rate_percent: text(&self.rate1),
                tenure_years: text(&self.tenure1),
            },
            LoanForm {
                principal: text(&self.principal2),
                annual_rate_percent: text(&self.rate2),
                tenure_years: text(&self.tenure2),
            },
        )
    }
}

pub fn run_compare_loans(args: CompareLoansArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let cmp_input: LoanComparisonInput =
        match input::read_structured(args.input.as_deref(), args.has_flags())? {
            Some(cmp_input) => cmp_input,
            None => {
                let (first, second) = args.forms();
                LoanComparisonInput {
                    first: first.parse().map_err(|e| e.in_scope("first"))?,
                    second: second.parse().map_err(|e| e.in_scope("second"))?,
                }
            }
        };

    let output = comparison::compare_loans(&cmp_input)?;
    let mut value = serde_json::to_value(output)?;
    if !args.with_schedules {
        if let Some(result) = value.get_mut("result").and_then(Value::as_object_mut) {
            for loan in ["first", "second"] {
                if let Some(obj) = result.get_mut(loan).and_then(Value::as_object_mut) {
                    obj.remove("schedule");
                }
            }
        }
    }
    Ok(value)
}
