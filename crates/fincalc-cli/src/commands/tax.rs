use clap::Args;
use serde_json::Value;

use fincalc_core::forms::TaxForm;
use fincalc_core::tax::{self, RegimeComparisonInput, TaxInput, TaxRegime};

use crate::input;

/// Arguments for the income tax calculator
#[derive(Args)]
pub struct TaxArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Annual income
    #[arg(long, allow_hyphen_values = true)]
    pub income: Option<String>,

    /// Tax regime: new or old [default: new]; also overrides the input document
    #[arg(long)]
    pub regime: Option<String>,

    /// Deductions such as 80C and HRA (old regime only)
    #[arg(long)]
    pub deductions: Option<String>,
}

pub fn run_tax(args: TaxArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let has_flags = args.income.is_some() || args.deductions.is_some();
    let regime = args
        .regime
        .as_deref()
        .map(str::parse::<TaxRegime>)
        .transpose()?;
    let tax_input: TaxInput = match input::read_structured::<TaxInput>(args.input.as_deref(), has_flags)? {
        Some(document) => TaxInput {
            regime: regime.unwrap_or(document.regime),
            ..document
        },
        None => TaxForm {
            annual_income: args.income.unwrap_or_default(),
            regime: regime.unwrap_or_default(),
            deductions: args.deductions.unwrap_or_default(),
        }
        .parse()?,
    };

    let result = tax::calculate_income_tax(&tax_input)?;
    Ok(serde_json::to_value(result)?)
}

/// Arguments for comparing the two tax regimes
#[derive(Args)]
pub struct TaxCompareArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Annual income
    #[arg(long, allow_hyphen_values = true)]
    pub income: Option<String>,

    /// Deductions claimable under the old regime
    #[arg(long)]
    pub deductions: Option<String>,
}

pub fn run_tax_compare(args: TaxCompareArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let has_flags = args.income.is_some() || args.deductions.is_some();
    let cmp_input: RegimeComparisonInput =
        match input::read_structured(args.input.as_deref(), has_flags)? {
            Some(cmp_input) => cmp_input,
            None => {
                let form = TaxForm {
                    annual_income: args.income.unwrap_or_default(),
                    regime: TaxRegime::Old,
                    deductions: args.deductions.unwrap_or_default(),
                };
                let parsed = form.parse()?;
                RegimeComparisonInput {
                    annual_income: parsed.annual_income,
                    deductions: parsed.deductions,
                }
            }
        };

    let result = tax::compare_regimes(&cmp_input)?;
    Ok(serde_json::to_value(result)?)
}
