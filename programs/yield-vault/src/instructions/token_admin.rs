//! Escape hatches over vault-owned token accounts
//!
//! Owner or manager may move, approve or revoke any token the vault holds
//! except the yield-bearing asset backing the shares. The asset check runs
//! before authorization so every caller gets the same `ForbiddenAsset`.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    approve, revoke, transfer_checked, Approve, Mint, Revoke, TokenAccount, TokenInterface,
    TransferChecked,
};
use crate::constants::PROGRAM_SEED_PREFIX;
use crate::events::{TokenApproved, TokenRevoked, TokenTransferred};
use crate::state::VaultState;

// ============================================================================
// Transfer Token
// ============================================================================

#[derive(Accounts)]
pub struct TransferToken<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, VaultState>>,

    #[account(
        mut,
        constraint = source.owner == vault.key(),
    )]
    pub source: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = source.mint)]
    pub mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        constraint = destination.mint == source.mint,
    )]
    pub destination: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn transfer_token(ctx: Context<TransferToken>, amount: u64) -> Result<()> {
    let vault = &ctx.accounts.vault;
    let caller = ctx.accounts.caller.key();
    vault.ensure_movable(&ctx.accounts.source.mint)?;
    vault.require_owner_or_manager(&caller)?;

    let seeds = vault.signer_seeds();
    transfer_checked(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            TransferChecked {
                from: ctx.accounts.source.to_account_info(),
                mint: ctx.accounts.mint.to_account_info(),
                to: ctx.accounts.destination.to_account_info(),
                authority: vault.to_account_info(),
            },
            &[&seeds[..]],
        ),
        amount,
        ctx.accounts.mint.decimals,
    )?;

    emit!(TokenTransferred {
        vault: vault.key(),
        caller,
        mint: ctx.accounts.mint.key(),
        destination: ctx.accounts.destination.key(),
        amount,
    });
    Ok(())
}

// ============================================================================
// Approve / Revoke
// ============================================================================

#[derive(Accounts)]
pub struct ApproveToken<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, VaultState>>,

    #[account(
        mut,
        constraint = token_account.owner == vault.key(),
    )]
    pub token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: Spender - can be any account
    pub delegate: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn approve_token(ctx: Context<ApproveToken>, amount: u64) -> Result<()> {
    let vault = &ctx.accounts.vault;
    let caller = ctx.accounts.caller.key();
    vault.ensure_movable(&ctx.accounts.token_account.mint)?;
    vault.require_owner_or_manager(&caller)?;

    let seeds = vault.signer_seeds();
    approve(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Approve {
                to: ctx.accounts.token_account.to_account_info(),
                delegate: ctx.accounts.delegate.to_account_info(),
                authority: vault.to_account_info(),
            },
            &[&seeds[..]],
        ),
        amount,
    )?;

    emit!(TokenApproved {
        vault: vault.key(),
        caller,
        token_account: ctx.accounts.token_account.key(),
        delegate: ctx.accounts.delegate.key(),
        amount,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct RevokeToken<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, VaultState>>,

    #[account(
        mut,
        constraint = token_account.owner == vault.key(),
    )]
    pub token_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

pub fn revoke_token(ctx: Context<RevokeToken>) -> Result<()> {
    let vault = &ctx.accounts.vault;
    let caller = ctx.accounts.caller.key();
    vault.ensure_movable(&ctx.accounts.token_account.mint)?;
    vault.require_owner_or_manager(&caller)?;

    let seeds = vault.signer_seeds();
    revoke(CpiContext::new_with_signer(
        ctx.accounts.token_program.to_account_info(),
        Revoke {
            source: ctx.accounts.token_account.to_account_info(),
            authority: vault.to_account_info(),
        },
        &[&seeds[..]],
    ))?;

    emit!(TokenRevoked {
        vault: vault.key(),
        caller,
        token_account: ctx.accounts.token_account.key(),
    });
    Ok(())
}
