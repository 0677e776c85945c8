//! Share balance account
//!
//! One account per holder per vault. The sum of every `shares` field
//! equals `VaultState::total_shares`.

use anchor_lang::prelude::*;
use crate::constants::PROGRAM_SEED_PREFIX;

/// Holder share balance
///
/// PDA Seeds: [PROGRAM_SEED_PREFIX, b"share_balance", vault, owner]
#[account]
pub struct ShareBalance {
    /// PDA bump seed
    pub bump: u8,

    /// Vault this balance belongs to
    pub vault: Pubkey,

    /// Holder
    pub owner: Pubkey,

    /// Shares held
    pub shares: u64,

    /// Reserved for future use
    pub reserved: [u8; 32],
}

impl ShareBalance {
    pub const SEED: &'static [u8] = b"share_balance";

    pub fn space() -> usize {
        8 +     // discriminator
        1 +     // bump
        32 +    // vault
        32 +    // owner
        8 +     // shares
        32      // reserved
    }

    /// Check if the account can be closed (initialized and holding nothing)
    pub fn can_close(&self) -> bool {
        self.shares == 0 && self.owner != Pubkey::default()
    }
}

/// Derive share balance PDA
pub fn derive_share_balance(program_id: &Pubkey, vault: &Pubkey, owner: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[
            PROGRAM_SEED_PREFIX,
            ShareBalance::SEED,
            vault.as_ref(),
            owner.as_ref(),
        ],
        program_id,
    )
}
