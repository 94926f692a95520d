pub mod calculator;
pub mod rates;

pub use calculator::{calculate_gst, GstComponents, GstInput, GstMode, GstOutput, SupplyType};
