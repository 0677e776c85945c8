//! Share account management (open, close)

use anchor_lang::prelude::*;
use crate::constants::PROGRAM_SEED_PREFIX;
use crate::errors::VaultError;
use crate::events::{ShareAccountClosed, ShareAccountOpened};
use crate::state::{ShareBalance, VaultState};

// ============================================================================
// Open Share Account
// ============================================================================

#[derive(Accounts)]
pub struct OpenShareAccount<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// CHECK: Share account owner - can be any account
    pub owner: UncheckedAccount<'info>,

    #[account(
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, VaultState>,

    #[account(
        init_if_needed,
        payer = payer,
        space = ShareBalance::space(),
        seeds = [
            PROGRAM_SEED_PREFIX,
            ShareBalance::SEED,
            vault.key().as_ref(),
            owner.key().as_ref(),
        ],
        bump,
    )]
    pub share_balance: Account<'info, ShareBalance>,

    pub system_program: Program<'info, System>,
}

/// Idempotent: an already open account is left untouched
pub fn open_share_account(ctx: Context<OpenShareAccount>) -> Result<()> {
    let share_balance = &mut ctx.accounts.share_balance;
    if share_balance.owner != Pubkey::default() {
        return Ok(());
    }

    share_balance.bump = ctx.bumps.share_balance;
    share_balance.vault = ctx.accounts.vault.key();
    share_balance.owner = ctx.accounts.owner.key();
    share_balance.shares = 0;

    emit!(ShareAccountOpened {
        vault: share_balance.vault,
        owner: share_balance.owner,
    });
    Ok(())
}

// ============================================================================
// Close Share Account
// ============================================================================

#[derive(Accounts)]
pub struct CloseShareAccount<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: Rent receiver - can be any account
    #[account(mut)]
    pub rent_receiver: UncheckedAccount<'info>,

    #[account(
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, VaultState>,

    #[account(
        mut,
        close = rent_receiver,
        seeds = [
            PROGRAM_SEED_PREFIX,
            ShareBalance::SEED,
            vault.key().as_ref(),
            owner.key().as_ref(),
        ],
        bump = share_balance.bump,
        constraint = share_balance.owner == owner.key() @ VaultError::Unauthorized,
        constraint = share_balance.can_close() @ VaultError::ShareAccountNotEmpty,
    )]
    pub share_balance: Account<'info, ShareBalance>,
}

pub fn close_share_account(ctx: Context<CloseShareAccount>) -> Result<()> {
    emit!(ShareAccountClosed {
        vault: ctx.accounts.vault.key(),
        owner: ctx.accounts.owner.key(),
    });
    Ok(())
}
