pub mod gst;
pub mod loan;
pub mod tax;
