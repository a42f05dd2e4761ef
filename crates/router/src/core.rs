pub mod errors;
pub mod orders;
pub mod payments;
