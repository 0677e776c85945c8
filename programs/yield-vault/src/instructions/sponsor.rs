//! Sponsor instruction: deposit underlying without receiving shares

use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::accounting;
use crate::events;
use super::host::*;

#[derive(Accounts)]
pub struct Sponsor<'info> {
    pub sponsor: Signer<'info>,

    pub funds: VaultFunds<'info>,

    #[account(
        mut,
        constraint = sponsor_token_account.mint == funds.vault.underlying_mint,
    )]
    pub sponsor_token_account: Box<InterfaceAccount<'info, TokenAccount>>,
}

pub fn sponsor<'info>(
    ctx: Context<'_, '_, '_, 'info, Sponsor<'info>>,
    amount: u64,
) -> Result<()> {
    let accounts = &mut *ctx.accounts;

    let tokens = {
        let mut host = accounts.funds.host(
            &accounts.sponsor,
            &mut accounts.sponsor_token_account,
            None,
            ctx.remaining_accounts,
        )?;
        accounting::sponsor(&mut host, amount)?
    };

    accounts.funds.log_price();

    emit!(events::Sponsored {
        vault: accounts.funds.vault.key(),
        sponsor: accounts.sponsor.key(),
        tokens,
    });

    Ok(())
}
