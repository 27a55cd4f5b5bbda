//! Validation utilities for user input
//!
//! These return a [`ValidationResult`] instead of an error so callers can
//! decide whether a failure blocks anything.

use crate::core::error::{AppError, Result};

pub struct ValidationResult {
    pub is_valid: bool,
    pub error: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error: Some(message.into()),
        }
    }

    /// Turn a failed check into [`AppError::Validation`].
    pub fn into_result(self) -> Result<()> {
        match self.error {
            Some(message) if !self.is_valid => Err(AppError::Validation(message)),
            _ => Ok(()),
        }
    }
}

pub const MIN_SLIPPAGE: f64 = 0.0;
pub const MAX_SLIPPAGE: f64 = 100.0;

/// Validate a slippage tolerance in percent
pub fn validate_slippage(slippage: f64) -> ValidationResult {
    if !slippage.is_finite() {
        return ValidationResult::err("Slippage must be a number");
    }

    if !(MIN_SLIPPAGE..=MAX_SLIPPAGE).contains(&slippage) {
        return ValidationResult::err(format!(
            "Slippage must be between {} and {}",
            MIN_SLIPPAGE, MAX_SLIPPAGE
        ));
    }

    ValidationResult::ok()
}

/// Validate an account address (`0x` + 40 hex digits)
pub fn validate_address(address: &str) -> ValidationResult {
    if address.is_empty() {
        return ValidationResult::err("Address is required");
    }

    if !shared::is_hex_address(address) {
        return ValidationResult::err("Address must be 0x followed by 40 hex characters");
    }

    ValidationResult::ok()
}

/// Validate a typed token amount (non-negative decimal, empty allowed while typing)
pub fn validate_amount(amount: &str) -> ValidationResult {
    let amount = amount.trim();
    if amount.is_empty() {
        return ValidationResult::ok();
    }

    if amount.chars().filter(|c| *c == '.').count() > 1
        || !amount.chars().all(|c| c.is_ascii_digit() || c == '.')
        || amount == "."
    {
        return ValidationResult::err("Amount must be a decimal number");
    }

    ValidationResult::ok()
}
