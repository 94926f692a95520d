use clap::Args;
use serde_json::Value;

use fincalc_core::forms::GstForm;
use fincalc_core::gst::{self, GstInput, GstMode, SupplyType};

use crate::input;

/// Arguments for the GST calculator
#[derive(Args)]
pub struct GstArgs {
    /// Path to JSON/YAML input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Price: the base price, or the final price with --inclusive
    #[arg(long)]
    pub amount: Option<String>,

    /// GST rate in percent (standard slabs: 5, 12, 18, 28)
    #[arg(long, allow_hyphen_values = true)]
    pub rate: Option<String>,

    /// The amount already includes GST
    #[arg(long)]
    pub inclusive: bool,

    /// Inter-state supply (IGST instead of CGST + SGST)
    #[arg(long)]
    pub inter_state: bool,
}

pub fn run_gst(args: GstArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let has_flags = args.amount.is_some() || args.rate.is_some();
    let gst_input: GstInput = match input::read_structured(args.input.as_deref(), has_flags)? {
        Some(gst_input) => gst_input,
        None => GstForm {
            amount: args.amount.unwrap_or_default(),
            rate_percent: args.rate.unwrap_or_default(),
            mode: if args.inclusive {
                GstMode::Inclusive
            } else {
                GstMode::Exclusive
            },
            supply: if args.inter_state {
                SupplyType::InterState
            } else {
                SupplyType::IntraState
            },
        }
        .parse()?,
    };

    let result = gst::calculate_gst(&gst_input)?;
    Ok(serde_json::to_value(result)?)
}
