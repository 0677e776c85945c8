//! Exchange-rate engine: conversion between underlying tokens and shares
//!
//! The exchange rate is `reserve / total_shares`, where `reserve` is the
//! underlying balance attributable to the vault. While no shares exist the
//! rate is 1 (one share per underlying unit).
//!
//! ## Rounding Rules (Always favor existing holders)
//!
//! | Operation | Convert         | Rounding | Reason                      |
//! |-----------|-----------------|----------|-----------------------------|
//! | Supply    | tokens → shares | DOWN     | Depositor gets fewer shares |
//! | Redeem    | tokens → shares | UP       | Redeemer burns more shares  |
//! | Quote     | shares → tokens | DOWN     | Holder value never overstated |
//!
//! A round trip `shares_to_tokens(tokens_to_shares(x))` never exceeds `x`,
//! so rounding dust always stays in the reserve.

use anchor_lang::prelude::*;
use rust_decimal::Decimal;
use crate::errors::VaultError;
use super::mul_div::{mul_div_down, mul_div_up};
use super::safe_math::{checked_mul, decimal_scale};

/// Convert underlying tokens to shares for SUPPLY
///
/// Rounding: DOWN
///
/// Formula: shares = tokens * total_shares / reserve
pub fn tokens_to_shares(tokens: u64, total_shares: u64, reserve: u64) -> Result<u64> {
    if tokens == 0 {
        return Ok(0);
    }
    if total_shares == 0 {
        return Ok(tokens);
    }
    require!(reserve > 0, VaultError::ReserveDepleted);
    mul_div_down(tokens, total_shares, reserve)
}

/// Convert underlying tokens to the shares a REDEEM must burn
///
/// Rounding: UP, so the burnt shares are worth at least `tokens`
pub fn tokens_to_shares_up(tokens: u64, total_shares: u64, reserve: u64) -> Result<u64> {
    if tokens == 0 {
        return Ok(0);
    }
    if total_shares == 0 {
        return Ok(tokens);
    }
    require!(reserve > 0, VaultError::ReserveDepleted);
    mul_div_up(tokens, total_shares, reserve)
}

/// Convert shares to underlying tokens
///
/// Rounding: DOWN
///
/// Formula: tokens = shares * reserve / total_shares
pub fn shares_to_tokens(shares: u64, total_shares: u64, reserve: u64) -> Result<u64> {
    if shares == 0 {
        return Ok(0);
    }
    if total_shares == 0 {
        return Ok(shares);
    }
    mul_div_down(shares, reserve, total_shares)
}

/// Underlying value of one whole share, scaled by `10^decimals`
///
/// Kept in u128: `reserve * 10^19` always fits, and a donated reserve can
/// push the quotient past `u64::MAX`.
pub fn price_per_share(total_shares: u64, reserve: u64, decimals: u8) -> Result<u128> {
    let scale = decimal_scale(decimals)? as u128;
    if total_shares == 0 {
        return Ok(scale);
    }
    let scaled = checked_mul(reserve as u128, scale)?;
    Ok(scaled / total_shares as u128)
}

/// Human-readable price per share for program logs
///
/// `None` when the price does not fit a `Decimal` mantissa (96 bits).
pub fn price_per_share_decimal(total_shares: u64, reserve: u64, decimals: u8) -> Option<Decimal> {
    let scaled = price_per_share(total_shares, reserve, decimals).ok()?;
    let mantissa = i128::try_from(scaled).ok()?;
    Decimal::try_from_i128_with_scale(mantissa, decimals as u32).ok()
}

/// Snapshot of `(total_shares, reserve)` taken once per operation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExchangeRate {
    pub total_shares: u64,
    pub reserve: u64,
}

impl ExchangeRate {
    pub fn new(total_shares: u64, reserve: u64) -> Self {
        Self { total_shares, reserve }
    }

    pub fn tokens_to_shares(&self, tokens: u64) -> Result<u64> {
        tokens_to_shares(tokens, self.total_shares, self.reserve)
    }

    pub fn tokens_to_shares_up(&self, tokens: u64) -> Result<u64> {
        tokens_to_shares_up(tokens, self.total_shares, self.reserve)
    }

    pub fn shares_to_tokens(&self, shares: u64) -> Result<u64> {
        shares_to_tokens(shares, self.total_shares, self.reserve)
    }

    pub fn price_per_share(&self, decimals: u8) -> Result<u128> {
        price_per_share(self.total_shares, self.reserve, decimals)
    }

    pub fn price_per_share_decimal(&self, decimals: u8) -> Option<Decimal> {
        price_per_share_decimal(self.total_shares, self.reserve, decimals)
    }
}
