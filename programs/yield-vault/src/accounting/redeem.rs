//! RedeemFlow
//!
//! The burn is sized from the requested amount, rounded up. The caller is
//! paid the custody balance change across the venue withdrawal, never the
//! requested or venue-reported amount.

use anchor_lang::prelude::*;
use crate::errors::VaultError;
use crate::math::checked_sub;
use super::{current_rate, with_lock, VaultHost};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RedeemReceipt {
    pub requested: u64,
    pub shares: u64,
    pub venue_reported: u64,
    pub returned: u64,
}

pub fn redeem<H: VaultHost + ?Sized>(host: &mut H, amount: u64) -> Result<RedeemReceipt> {
    with_lock(host, |host| {
        let shares = current_rate(host)?.tokens_to_shares_up(amount)?;
        require!(shares > 0, VaultError::ZeroShares);

        let caller = host.caller();
        let held = host.shares_of(&caller)?;
        if held < shares {
            msg!("Redeem needs {} shares, holder has {}", shares, held);
            return err!(VaultError::InsufficientBalance);
        }
        host.burn(&caller, shares)?;

        let before = host.custody_balance()?;
        let venue_reported = host.withdraw(amount)?;
        let after = host.custody_balance()?;
        let returned = checked_sub(after, before)?;

        if returned != venue_reported {
            msg!(
                "Venue reported {} but custody received {}",
                venue_reported,
                returned
            );
        }
        if returned > 0 {
            host.push_to_caller(returned)?;
        }

        msg!("Redeemed {} tokens, burnt {} shares", returned, shares);
        Ok(RedeemReceipt {
            requested: amount,
            shares,
            venue_reported,
            returned,
        })
    })
}
