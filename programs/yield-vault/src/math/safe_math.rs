//! Safe math utilities to prevent overflow/underflow
//!
//! All u128 → u64 narrowing must go through safe_u128_to_u64()
//! so that token and share amounts never truncate silently.

use anchor_lang::prelude::*;
use crate::errors::VaultError;

/// Safely convert u128 to u64, erroring on overflow
#[inline]
pub fn safe_u128_to_u64(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| VaultError::AmountOverflow.into())
}

/// Checked addition with custom error
#[inline]
pub fn checked_add(a: u64, b: u64) -> Result<u64> {
    a.checked_add(b).ok_or_else(|| VaultError::MathOverflow.into())
}

/// Checked subtraction with custom error
#[inline]
pub fn checked_sub(a: u64, b: u64) -> Result<u64> {
    a.checked_sub(b).ok_or_else(|| VaultError::MathUnderflow.into())
}

/// Checked multiplication with custom error
#[inline]
pub fn checked_mul(a: u128, b: u128) -> Result<u128> {
    a.checked_mul(b).ok_or_else(|| VaultError::MathOverflow.into())
}

/// `10^decimals` as u64, erroring when it does not fit
pub fn decimal_scale(decimals: u8) -> Result<u64> {
    10u64
        .checked_pow(decimals as u32)
        .ok_or_else(|| VaultError::MathOverflow.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_u128_to_u64_within_range() {
        assert_eq!(safe_u128_to_u64(0).unwrap(), 0u64);
        assert_eq!(safe_u128_to_u64(1000).unwrap(), 1000u64);
        assert_eq!(safe_u128_to_u64(u64::MAX as u128).unwrap(), u64::MAX);
    }

    #[test]
    fn test_safe_u128_to_u64_overflow() {
        assert!(safe_u128_to_u64(u64::MAX as u128 + 1).is_err());
    }

    #[test]
    fn test_checked_add_sub() {
        assert_eq!(checked_add(1, 2).unwrap(), 3);
        assert!(checked_add(u64::MAX, 1).is_err());
        assert_eq!(checked_sub(5, 3).unwrap(), 2);
        assert!(checked_sub(3, 5).is_err());
    }

    #[test]
    fn test_checked_mul() {
        assert_eq!(checked_mul(3, 4).unwrap(), 12);
        assert!(checked_mul(u128::MAX, 2).is_err());
    }

    #[test]
    fn test_decimal_scale() {
        assert_eq!(decimal_scale(6).unwrap(), 1_000_000);
        assert_eq!(decimal_scale(19).unwrap(), 10_000_000_000_000_000_000);
        assert!(decimal_scale(20).is_err());
    }
}
