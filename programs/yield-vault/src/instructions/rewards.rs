//! Reward claim instruction

use anchor_lang::prelude::*;
use crate::accounting;
use crate::constants::PROGRAM_SEED_PREFIX;
use crate::events::RewardsClaimed;
use crate::state::VaultState;
use super::host::RewardsCpi;

#[derive(Accounts)]
pub struct ClaimRewards<'info> {
    pub caller: Signer<'info>,

    #[account(
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, vault.yield_mint.as_ref()],
        bump = vault.bump,
    )]
    pub vault: Account<'info, VaultState>,

    /// CHECK: Must be the rewards program configured on the vault
    #[account(address = vault.rewards_program)]
    pub rewards_program: UncheckedAccount<'info>,
}

/// Claim every reward accrued on the yield asset to `to`
///
/// Remaining accounts are forwarded to the rewards program.
pub fn claim_rewards<'info>(
    ctx: Context<'_, '_, '_, 'info, ClaimRewards<'info>>,
    to: Pubkey,
) -> Result<()> {
    let accounts = &ctx.accounts;
    let caller = accounts.caller.key();
    let assets = [accounts.vault.yield_mint];

    let mut rewards = RewardsCpi {
        vault: &accounts.vault,
        rewards_program: &accounts.rewards_program,
        extra: ctx.remaining_accounts,
    };
    let claimed =
        accounting::claim_rewards(&*accounts.vault, &mut rewards, &caller, &assets, &to)?;

    for (mint, amount) in claimed.reward_mints.iter().zip(claimed.amounts.iter()) {
        msg!("Claimed {} of reward {}", amount, mint);
    }

    emit!(RewardsClaimed {
        vault: accounts.vault.key(),
        caller,
        to,
        reward_mints: claimed.reward_mints,
        amounts: claimed.amounts,
    });
    Ok(())
}
