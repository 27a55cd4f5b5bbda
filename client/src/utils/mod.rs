//! # Utility Functions
//!
//! - `validation`: user-input checks that answer yes/no with a message

pub mod validation;

pub use validation::{validate_address, validate_amount, validate_slippage, ValidationResult};
