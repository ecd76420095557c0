//! Session lifecycle across games.

pub mod controller;

pub use controller::{BankOutcome, BankRejection, SessionController};
