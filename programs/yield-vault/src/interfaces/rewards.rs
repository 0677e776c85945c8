//! Rewards collaborator port
//!
//! Opaque pass-through: claiming rewards never touches the share ledger.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use crate::constants::{MAX_REWARD_MINTS, REWARDS_CLAIM_ALL_METHOD};
use crate::errors::VaultError;
use super::encode_call;

/// Rewards paid out by a single claim
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq)]
pub struct ClaimedRewards {
    pub reward_mints: Vec<Pubkey>,
    pub amounts: Vec<u64>,
}

impl ClaimedRewards {
    /// Largest borsh encoding accepted back from the collaborator
    pub const MAX_ENCODED_LEN: usize = 4 + 32 * MAX_REWARD_MINTS + 4 + 8 * MAX_REWARD_MINTS;

    pub fn validate(&self) -> Result<()> {
        require!(
            self.reward_mints.len() == self.amounts.len()
                && self.reward_mints.len() <= MAX_REWARD_MINTS,
            VaultError::InvalidReturnData
        );
        Ok(())
    }
}

pub trait RewardsCollaborator {
    fn claim_all(&mut self, assets: &[Pubkey], to: &Pubkey) -> Result<ClaimedRewards>;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct ClaimAllArgs {
    pub assets: Vec<Pubkey>,
    pub to: Pubkey,
}

/// Build the rewards `claim_all` instruction; the vault PDA signs as the claimant
pub fn claim_all_ix(
    rewards_program: &Pubkey,
    vault: &Pubkey,
    args: &ClaimAllArgs,
    extra: &[AccountMeta],
) -> Result<Instruction> {
    let mut accounts = vec![AccountMeta::new_readonly(*vault, true)];
    accounts.extend_from_slice(extra);
    Ok(Instruction {
        program_id: *rewards_program,
        accounts,
        data: encode_call(REWARDS_CLAIM_ALL_METHOD, args)?,
    })
}
