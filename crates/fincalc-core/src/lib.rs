//! Loan EMI, GST and Indian income tax calculations.
//!
//! Every engine is a pure function from a validated input to a
//! [`ComputationOutput`] envelope. Amounts and rates are [`rust_decimal::Decimal`]
//! throughout; rates are percentages (`dec!(18)` is 18%).
//!
//! ```rust
//! use fincalc_core::gst::{calculate_gst, GstInput};
//! use rust_decimal_macros::dec;
//!
//! let output = calculate_gst(&GstInput::exclusive(dec!(100), dec!(18))).unwrap();
//! assert_eq!(output.result.tax_amount, dec!(18));
//! assert_eq!(output.result.final_price, dec!(118));
//! ```

pub mod error;
pub mod format;
pub mod forms;
pub mod types;

#[cfg(feature = "loan")]
pub mod loan;

#[cfg(feature = "gst")]
pub mod gst;

#[cfg(feature = "tax")]
pub mod tax;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for all fincalc operations
pub type FinCalcResult<T> = Result<T, FinCalcError>;
