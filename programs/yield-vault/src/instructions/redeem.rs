//! Redeem instruction
//!
//! Burns the caller's shares for `amount` of underlying and pays out what
//! actually arrived in custody from the venue.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::accounting;
use crate::constants::PROGRAM_SEED_PREFIX;
use crate::errors::VaultError;
use crate::events;
use crate::state::ShareBalance;
use super::host::*;

#[derive(Accounts)]
pub struct Redeem<'info> {
    pub caller: Signer<'info>,

    pub funds: VaultFunds<'info>,

    #[account(
        mut,
        seeds = [
            PROGRAM_SEED_PREFIX,
            ShareBalance::SEED,
            funds.vault.key().as_ref(),
            caller.key().as_ref(),
        ],
        bump = share_balance.bump,
        constraint = share_balance.owner == caller.key() @ VaultError::HolderMismatch,
    )]
    pub share_balance: Account<'info, ShareBalance>,

    /// Receives the withdrawn underlying
    #[account(
        mut,
        constraint = caller_token_account.mint == funds.vault.underlying_mint,
    )]
    pub caller_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
}

/// Returns the underlying amount delivered to the caller
pub fn redeem<'info>(
    ctx: Context<'_, '_, '_, 'info, Redeem<'info>>,
    amount: u64,
) -> Result<u64> {
    let accounts = &mut *ctx.accounts;
    let caller = accounts.caller.key();

    let receipt = {
        let mut host = accounts.funds.host(
            &accounts.caller,
            &mut accounts.caller_token_account,
            Some(&mut accounts.share_balance),
            ctx.remaining_accounts,
        )?;
        accounting::redeem(&mut host, amount)?
    };

    emit!(events::Redeemed {
        vault: accounts.funds.vault.key(),
        holder: caller,
        requested: receipt.requested,
        venue_reported: receipt.venue_reported,
        returned: receipt.returned,
        shares: receipt.shares,
        total_shares: accounts.funds.vault.total_shares,
    });

    Ok(receipt.returned)
}
