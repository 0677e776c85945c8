//! Admin instructions for vault management
//!
//! - Initialize a vault
//! - Two-step ownership transfer
//! - Manager assignment

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};
use crate::constants::PROGRAM_SEED_PREFIX;
use crate::errors::VaultError;
use crate::events::*;
use crate::state::{VaultConfig, VaultState};

// ============================================================================
// Initialize
// ============================================================================

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    pub yield_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        payer = payer,
        space = VaultState::space(),
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, yield_mint.key().as_ref()],
        bump,
    )]
    pub vault: Box<Account<'info, VaultState>>,

    #[account(
        init,
        payer = payer,
        token::mint = underlying_mint,
        token::authority = vault,
        token::token_program = token_program,
        seeds = [PROGRAM_SEED_PREFIX, VaultState::CUSTODY_SEED, vault.key().as_ref()],
        bump,
    )]
    pub custody: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        token::mint = yield_mint,
        token::authority = vault,
        token::token_program = token_program,
        seeds = [PROGRAM_SEED_PREFIX, VaultState::YIELD_ACCOUNT_SEED, vault.key().as_ref()],
        bump,
    )]
    pub yield_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>, config: VaultConfig) -> Result<()> {
    let underlying_mint = ctx.accounts.underlying_mint.key();
    let yield_mint = ctx.accounts.yield_mint.key();
    config.validate(
        &underlying_mint,
        ctx.accounts.underlying_mint.decimals,
        &yield_mint,
    )?;

    let custody = ctx.accounts.custody.key();
    let yield_account = ctx.accounts.yield_account.key();

    let vault = &mut ctx.accounts.vault;
    vault.bump = ctx.bumps.vault;
    vault.owner = config.owner;
    vault.pending_owner = Pubkey::default();
    vault.manager = Pubkey::default();
    vault.underlying_mint = underlying_mint;
    vault.yield_mint = yield_mint;
    vault.custody = custody;
    vault.yield_account = yield_account;
    vault.venue_registry = config.venue_registry;
    vault.rewards_program = config.rewards_program;
    vault.decimals = config.decimals;
    vault.name = config.name;
    vault.symbol = config.symbol;
    vault.total_shares = 0;
    vault.locked = false;
    vault.custody_bump = ctx.bumps.custody;
    vault.yield_account_bump = ctx.bumps.yield_account;
    vault.reserved = [0u8; 64];

    msg!("Vault {} ({}) initialized", vault.name, vault.symbol);

    emit!(VaultInitialized {
        vault: vault.key(),
        owner: vault.owner,
        underlying_mint,
        yield_mint,
        venue_registry: vault.venue_registry,
        rewards_program: vault.rewards_program,
        decimals: vault.decimals,
    });
    Ok(())
}

// ============================================================================
// Ownership Transfer (Two-Step)
// ============================================================================

#[derive(Accounts)]
pub struct TransferOwnership<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
        constraint = vault.owner == owner.key() @ VaultError::Unauthorized,
    )]
    pub vault: Account<'info, VaultState>,
}

pub fn transfer_ownership(ctx: Context<TransferOwnership>, new_owner: Pubkey) -> Result<()> {
    require!(new_owner != Pubkey::default(), VaultError::InvalidOwner);
    ctx.accounts.vault.pending_owner = new_owner;

    emit!(OwnershipTransferStarted {
        vault: ctx.accounts.vault.key(),
        current_owner: ctx.accounts.owner.key(),
        pending_owner: new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct AcceptOwnership<'info> {
    pub pending_owner: Signer<'info>,

    #[account(
        mut,
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
        constraint = vault.pending_owner == pending_owner.key() @ VaultError::Unauthorized,
    )]
    pub vault: Account<'info, VaultState>,
}

pub fn accept_ownership(ctx: Context<AcceptOwnership>) -> Result<()> {
    let vault = &mut ctx.accounts.vault;
    let previous_owner = vault.owner;

    vault.owner = vault.pending_owner;
    vault.pending_owner = Pubkey::default();

    emit!(OwnershipTransferred {
        vault: vault.key(),
        previous_owner,
        new_owner: vault.owner,
    });
    Ok(())
}

// ============================================================================
// Manager
// ============================================================================

#[derive(Accounts)]
pub struct SetManager<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
        constraint = vault.owner == owner.key() @ VaultError::Unauthorized,
    )]
    pub vault: Account<'info, VaultState>,
}

/// Null key removes the manager
pub fn set_manager(ctx: Context<SetManager>, new_manager: Pubkey) -> Result<()> {
    let old_manager = ctx.accounts.vault.manager;
    ctx.accounts.vault.manager = new_manager;

    emit!(ManagerSet {
        vault: ctx.accounts.vault.key(),
        old_manager,
        new_manager,
    });
    Ok(())
}
