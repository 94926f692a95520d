pub mod income_tax;
pub mod regime;
pub mod slabs;

pub use income_tax::{calculate_income_tax, TaxInput, TaxOutput, TaxRegime};
pub use regime::{compare_regimes, RegimeComparisonInput, RegimeComparisonOutput};
pub use slabs::{SlabTax, TaxSlab};
