//! Reward claim forwarding (owner or manager only)

use anchor_lang::prelude::*;
use crate::errors::VaultError;
use crate::interfaces::{AccessControl, ClaimedRewards, RewardsCollaborator};

pub fn claim_rewards<A, R>(
    access: &A,
    rewards: &mut R,
    caller: &Pubkey,
    assets: &[Pubkey],
    to: &Pubkey,
) -> Result<ClaimedRewards>
where
    A: AccessControl + ?Sized,
    R: RewardsCollaborator + ?Sized,
{
    require!(access.is_owner_or_manager(caller), VaultError::Unauthorized);

    let claimed = rewards.claim_all(assets, to)?;
    claimed.validate()?;
    Ok(claimed)
}
