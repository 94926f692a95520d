pub mod comparison;
pub mod emi;
