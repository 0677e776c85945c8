//! Minimal lending venue for end-to-end tests
//!
//! Deposits move underlying into a liquidity account and mint the yield
//! asset 1:1. Withdrawals burn the yield asset and pay underlying back,
//! less a configurable shortfall, while reporting the full amount.

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{
    burn, mint_to, transfer_checked, Burn, Mint, MintTo, TokenAccount, TokenInterface,
    TransferChecked,
};

declare_id!("AMVh4cWZYEYX6U5bQtoge4Za5i9g6Fsxey3kCGKJFi2W");

#[program]
pub mod stub_venue {
    use super::*;

    pub fn initialize_venue(ctx: Context<InitializeVenue>) -> Result<()> {
        let venue = &mut ctx.accounts.venue_state;
        venue.bump = ctx.bumps.venue_state;
        venue.shortfall = 0;
        Ok(())
    }

    /// Underlying withheld from every subsequent withdrawal
    pub fn set_shortfall(ctx: Context<SetShortfall>, shortfall: u64) -> Result<()> {
        ctx.accounts.venue_state.shortfall = shortfall;
        Ok(())
    }

    /// Interest: mint the yield asset straight to a holder
    pub fn accrue(ctx: Context<Accrue>, amount: u64) -> Result<()> {
        let bump = ctx.accounts.venue_state.bump;
        mint_to(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                MintTo {
                    mint: ctx.accounts.yield_mint.to_account_info(),
                    to: ctx.accounts.beneficiary.to_account_info(),
                    authority: ctx.accounts.venue_state.to_account_info(),
                },
                &[&[VenueState::SEED, &[bump]]],
            ),
            amount,
        )
    }

    pub fn deposit(
        ctx: Context<VenueCall>,
        _asset: Pubkey,
        amount: u64,
        _on_behalf_of: Pubkey,
        _referral_code: u16,
    ) -> Result<()> {
        let accounts = &ctx.accounts;
        transfer_checked(
            CpiContext::new(
                accounts.token_program.to_account_info(),
                TransferChecked {
                    from: accounts.custody.to_account_info(),
                    mint: accounts.underlying_mint.to_account_info(),
                    to: accounts.liquidity.to_account_info(),
                    authority: accounts.vault.to_account_info(),
                },
            ),
            amount,
            accounts.underlying_mint.decimals,
        )?;

        let bump = accounts.venue_state.bump;
        mint_to(
            CpiContext::new_with_signer(
                accounts.token_program.to_account_info(),
                MintTo {
                    mint: accounts.yield_mint.to_account_info(),
                    to: accounts.yield_account.to_account_info(),
                    authority: accounts.venue_state.to_account_info(),
                },
                &[&[VenueState::SEED, &[bump]]],
            ),
            amount,
        )
    }

    /// Reports `amount` regardless of what was actually delivered
    pub fn withdraw(
        ctx: Context<VenueCall>,
        _asset: Pubkey,
        amount: u64,
        _to: Pubkey,
    ) -> Result<u64> {
        let accounts = &ctx.accounts;
        burn(
            CpiContext::new(
                accounts.token_program.to_account_info(),
                Burn {
                    mint: accounts.yield_mint.to_account_info(),
                    from: accounts.yield_account.to_account_info(),
                    authority: accounts.vault.to_account_info(),
                },
            ),
            amount,
        )?;

        let delivered = amount.saturating_sub(accounts.venue_state.shortfall);
        let bump = accounts.venue_state.bump;
        transfer_checked(
            CpiContext::new_with_signer(
                accounts.token_program.to_account_info(),
                TransferChecked {
                    from: accounts.liquidity.to_account_info(),
                    mint: accounts.underlying_mint.to_account_info(),
                    to: accounts.custody.to_account_info(),
                    authority: accounts.venue_state.to_account_info(),
                },
                &[&[VenueState::SEED, &[bump]]],
            ),
            delivered,
            accounts.underlying_mint.decimals,
        )?;
        Ok(amount)
    }
}

/// Venue state; also the yield-mint authority and liquidity owner
#[account]
pub struct VenueState {
    pub bump: u8,
    pub shortfall: u64,
}

impl VenueState {
    pub const SEED: &'static [u8] = b"venue_state";

    pub const fn space() -> usize {
        8 + 1 + 8
    }
}

pub fn derive_venue_state() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VenueState::SEED], &ID)
}

#[derive(Accounts)]
pub struct InitializeVenue<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = VenueState::space(),
        seeds = [VenueState::SEED],
        bump,
    )]
    pub venue_state: Account<'info, VenueState>,

    pub system_program: Program<'info, System>,
}

#[derive(Accounts)]
pub struct SetShortfall<'info> {
    #[account(mut, seeds = [VenueState::SEED], bump = venue_state.bump)]
    pub venue_state: Account<'info, VenueState>,
}

#[derive(Accounts)]
pub struct Accrue<'info> {
    #[account(seeds = [VenueState::SEED], bump = venue_state.bump)]
    pub venue_state: Account<'info, VenueState>,

    #[account(mut)]
    pub yield_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub beneficiary: InterfaceAccount<'info, TokenAccount>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Account order the vault uses for both venue calls; `liquidity` arrives
/// as the first forwarded account
#[derive(Accounts)]
pub struct VenueCall<'info> {
    #[account(mut, seeds = [VenueState::SEED], bump = venue_state.bump)]
    pub venue_state: Account<'info, VenueState>,

    pub vault: Signer<'info>,

    #[account(mut)]
    pub custody: InterfaceAccount<'info, TokenAccount>,

    #[account(mut)]
    pub yield_account: InterfaceAccount<'info, TokenAccount>,

    pub underlying_mint: InterfaceAccount<'info, Mint>,

    #[account(mut)]
    pub yield_mint: InterfaceAccount<'info, Mint>,

    pub token_program: Interface<'info, TokenInterface>,

    #[account(mut, token::authority = venue_state)]
    pub liquidity: InterfaceAccount<'info, TokenAccount>,
}
