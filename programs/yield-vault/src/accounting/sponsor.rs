//! SponsorFlow: raise the exchange rate for every holder without minting

use anchor_lang::prelude::*;
use crate::errors::VaultError;
use super::{with_lock, VaultHost};

pub fn sponsor<H: VaultHost + ?Sized>(host: &mut H, amount: u64) -> Result<u64> {
    with_lock(host, |host| {
        require!(amount > 0, VaultError::ZeroAmount);

        host.pull_from_caller(amount)?;
        host.deposit(amount)?;

        msg!("Sponsored {} tokens", amount);
        Ok(amount)
    })
}
