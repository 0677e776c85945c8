//! DepositFlow
//!
//! Moves exactly the caller-specified amount. Rounding dust from the share
//! conversion stays in the reserve, to the benefit of existing holders.

use anchor_lang::prelude::*;
use crate::errors::VaultError;
use super::{current_rate, with_lock, VaultHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SupplyReceipt {
    pub tokens: u64,
    pub shares: u64,
}

pub fn supply<H: VaultHost + ?Sized>(
    host: &mut H,
    amount: u64,
    recipient: &Pubkey,
) -> Result<SupplyReceipt> {
    with_lock(host, |host| {
        let shares = current_rate(host)?.tokens_to_shares(amount)?;
        // A donation-inflated rate can round a real deposit to nothing
        require!(shares > 0, VaultError::ZeroShares);

        host.pull_from_caller(amount)?;
        host.deposit(amount)?;
        host.mint(recipient, shares)?;

        msg!("Supplied {} tokens, minted {} shares", amount, shares);
        Ok(SupplyReceipt { tokens: amount, shares })
    })
}
