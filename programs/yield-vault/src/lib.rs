//! Yield-bearing vault adapter on Solana
//!
//! Wraps a lending venue's yield-bearing asset in a share token. Holders own
//! a fraction of the vault's yield-asset balance, which grows as the venue
//! accrues interest.
//!
//! ## Features
//! - Share accounting with rounding that always favors existing holders
//! - Venue resolved through a two-level registry on every call
//! - Redemptions pay the observed custody balance change, not the venue's claim
//! - Reentrancy lock around every venue interaction
//! - Sponsored deposits that raise the exchange rate without minting
//! - Two-step ownership transfer and an optional manager
//! - Token escape hatches that can never move the yield-bearing asset

use anchor_lang::prelude::*;

pub mod accounting;
pub mod constants;
pub mod errors;
pub mod events;
pub mod math;
pub mod state;
pub mod interfaces;
pub mod instructions;

use instructions::*;
use state::VaultConfig;

declare_id!("AzAhHUTWQA6VsNFQu8BUT8KyhqxyU7yoamPmVjoEGnKm");

#[program]
pub mod yield_vault {
    use super::*;

    // =========================================================================
    // Admin Instructions
    // =========================================================================

    pub fn initialize(ctx: Context<Initialize>, config: VaultConfig) -> Result<()> {
        instructions::admin::initialize(ctx, config)
    }

    pub fn transfer_ownership(
        ctx: Context<TransferOwnership>,
        new_owner: Pubkey,
    ) -> Result<()> {
        instructions::admin::transfer_ownership(ctx, new_owner)
    }

    pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
        instructions::admin::accept_ownership(ctx)
    }

    pub fn set_manager(ctx: Context<SetManager>, new_manager: Pubkey) -> Result<()> {
        instructions::admin::set_manager(ctx, new_manager)
    }

    // =========================================================================
    // Holder Instructions
    // =========================================================================

    pub fn open_share_account(ctx: Context<OpenShareAccount>) -> Result<()> {
        instructions::holder::open_share_account(ctx)
    }

    pub fn close_share_account(ctx: Context<CloseShareAccount>) -> Result<()> {
        instructions::holder::close_share_account(ctx)
    }

    pub fn supply<'info>(
        ctx: Context<'_, '_, '_, 'info, Supply<'info>>,
        amount: u64,
        recipient: Pubkey,
    ) -> Result<u64> {
        instructions::supply::supply(ctx, amount, recipient)
    }

    pub fn redeem<'info>(
        ctx: Context<'_, '_, '_, 'info, Redeem<'info>>,
        amount: u64,
    ) -> Result<u64> {
        instructions::redeem::redeem(ctx, amount)
    }

    pub fn sponsor<'info>(
        ctx: Context<'_, '_, '_, 'info, Sponsor<'info>>,
        amount: u64,
    ) -> Result<()> {
        instructions::sponsor::sponsor(ctx, amount)
    }

    // =========================================================================
    // Owner / Manager Instructions
    // =========================================================================

    pub fn claim_rewards<'info>(
        ctx: Context<'_, '_, '_, 'info, ClaimRewards<'info>>,
        to: Pubkey,
    ) -> Result<()> {
        instructions::rewards::claim_rewards(ctx, to)
    }

    pub fn transfer_token(ctx: Context<TransferToken>, amount: u64) -> Result<()> {
        instructions::token_admin::transfer_token(ctx, amount)
    }

    pub fn approve_token(ctx: Context<ApproveToken>, amount: u64) -> Result<()> {
        instructions::token_admin::approve_token(ctx, amount)
    }

    pub fn revoke_token(ctx: Context<RevokeToken>) -> Result<()> {
        instructions::token_admin::revoke_token(ctx)
    }

    // =========================================================================
    // Views
    // =========================================================================

    pub fn tokens_to_shares(ctx: Context<VaultView>, amount: u64) -> Result<u64> {
        instructions::views::tokens_to_shares(ctx, amount)
    }

    pub fn shares_to_tokens(ctx: Context<VaultView>, shares: u64) -> Result<u64> {
        instructions::views::shares_to_tokens(ctx, shares)
    }

    pub fn price_per_share(ctx: Context<VaultView>) -> Result<u128> {
        instructions::views::price_per_share(ctx)
    }

    pub fn balance_of_token(ctx: Context<HolderView>) -> Result<u64> {
        instructions::views::balance_of_token(ctx)
    }
}
