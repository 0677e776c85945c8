//! Read-only queries; results are returned through program return data

use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::constants::PROGRAM_SEED_PREFIX;
use crate::math::ExchangeRate;
use crate::state::{ShareBalance, VaultState};

#[derive(Accounts)]
pub struct VaultView<'info> {
    #[account(
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, VaultState>>,

    #[account(address = vault.yield_account)]
    pub yield_account: Box<InterfaceAccount<'info, TokenAccount>>,
}

impl VaultView<'_> {
    fn rate(&self) -> ExchangeRate {
        ExchangeRate::new(self.vault.total_shares, self.yield_account.amount)
    }
}

pub fn tokens_to_shares(ctx: Context<VaultView>, amount: u64) -> Result<u64> {
    ctx.accounts.rate().tokens_to_shares(amount)
}

pub fn shares_to_tokens(ctx: Context<VaultView>, shares: u64) -> Result<u64> {
    ctx.accounts.rate().shares_to_tokens(shares)
}

/// Underlying units per whole share, scaled by 10^decimals
pub fn price_per_share(ctx: Context<VaultView>) -> Result<u128> {
    let rate = ctx.accounts.rate();
    let decimals = ctx.accounts.vault.decimals;
    if let Some(price) = rate.price_per_share_decimal(decimals) {
        msg!("Price per share: {}", price);
    }
    rate.price_per_share(decimals)
}

#[derive(Accounts)]
pub struct HolderView<'info> {
    #[account(
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, VaultState>>,

    #[account(address = vault.yield_account)]
    pub yield_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        seeds = [
            PROGRAM_SEED_PREFIX,
            ShareBalance::SEED,
            vault.key().as_ref(),
            share_balance.owner.as_ref(),
        ],
        bump = share_balance.bump,
    )]
    pub share_balance: Account<'info, ShareBalance>,
}

/// Holder's shares valued in underlying units
pub fn balance_of_token(ctx: Context<HolderView>) -> Result<u64> {
    let rate = ExchangeRate::new(
        ctx.accounts.vault.total_shares,
        ctx.accounts.yield_account.amount,
    );
    rate.shares_to_tokens(ctx.accounts.share_balance.shares)
}
