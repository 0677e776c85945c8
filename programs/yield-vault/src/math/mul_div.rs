//! Multiply-then-divide with explicit rounding direction
//!
//! Products are formed in u128 before the single division so that
//! truncation happens exactly once.

use anchor_lang::prelude::*;
use crate::errors::VaultError;
use super::safe_math::{checked_mul, safe_u128_to_u64};

/// Multiply then divide, rounding DOWN
/// Order: (a * b) / c
pub fn mul_div_down(a: u64, b: u64, c: u64) -> Result<u64> {
    if c == 0 {
        return Err(VaultError::DivisionByZero.into());
    }

    if a == 0 || b == 0 {
        return Ok(0);
    }

    let product = checked_mul(a as u128, b as u128)?;
    safe_u128_to_u64(product / c as u128)
}

/// Multiply then divide, rounding UP
/// Formula: (a * b + c - 1) / c
pub fn mul_div_up(a: u64, b: u64, c: u64) -> Result<u64> {
    if c == 0 {
        return Err(VaultError::DivisionByZero.into());
    }

    if a == 0 || b == 0 {
        return Ok(0);
    }

    let product = checked_mul(a as u128, b as u128)?;
    let c = c as u128;
    // (product + c - 1) / c = ceil division
    let result = product
        .checked_add(c - 1)
        .ok_or(VaultError::MathOverflow)?
        / c;

    safe_u128_to_u64(result)
}
