use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Percent;

/// Statutory GST slabs, including the nil rate.
pub const STANDARD_GST_RATES: [Percent; 5] = [dec!(0), dec!(5), dec!(12), dec!(18), dec!(28)];

/// Rates offered on the calculator form.
pub const FORM_GST_RATES: [Percent; 4] = [dec!(5), dec!(12), dec!(18), dec!(28)];

pub fn is_standard_rate(rate_percent: Decimal) -> bool {
    STANDARD_GST_RATES.contains(&rate_percent)
}
