pub mod app;
pub mod health;
pub mod orders;
pub mod payments;

pub use self::app::{AppState, Health, Orders, Payments};
