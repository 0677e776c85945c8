//! Supply instruction
//!
//! Pull underlying from the caller, forward it to the venue and mint shares
//! to the recipient at the pre-deposit exchange rate.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::accounting;
use crate::constants::PROGRAM_SEED_PREFIX;
use crate::errors::VaultError;
use crate::events;
use crate::state::ShareBalance;
use super::host::*;

#[derive(Accounts)]
#[instruction(amount: u64, recipient: Pubkey)]
pub struct Supply<'info> {
    pub caller: Signer<'info>,

    pub funds: VaultFunds<'info>,

    #[account(
        mut,
        seeds = [
            PROGRAM_SEED_PREFIX,
            ShareBalance::SEED,
            funds.vault.key().as_ref(),
            recipient.as_ref(),
        ],
        bump = share_balance.bump,
        constraint = share_balance.owner == recipient @ VaultError::HolderMismatch,
    )]
    pub share_balance: Account<'info, ShareBalance>,

    #[account(
        mut,
        constraint = caller_token_account.mint == funds.vault.underlying_mint,
    )]
    pub caller_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
}

/// Remaining accounts are forwarded to the venue deposit CPI
pub fn supply<'info>(
    ctx: Context<'_, '_, '_, 'info, Supply<'info>>,
    amount: u64,
    recipient: Pubkey,
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
        accounting::supply(&mut host, amount, &recipient)?
    };

    accounts.funds.log_price();

    emit!(events::Supplied {
        vault: accounts.funds.vault.key(),
        caller,
        recipient,
        tokens: receipt.tokens,
        shares: receipt.shares,
        total_shares: accounts.funds.vault.total_shares,
    });

    Ok(receipt.shares)
}
