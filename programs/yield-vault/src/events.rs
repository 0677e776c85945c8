use anchor_lang::prelude::*;

// === Vault Events ===

#[event]
pub struct VaultInitialized {
    pub vault: Pubkey,
    pub owner: Pubkey,
    pub underlying_mint: Pubkey,
    pub yield_mint: Pubkey,
    pub venue_registry: Pubkey,
    pub rewards_program: Pubkey,
    pub decimals: u8,
}

#[event]
pub struct OwnershipTransferStarted {
    pub vault: Pubkey,
    pub current_owner: Pubkey,
    pub pending_owner: Pubkey,
}

#[event]
pub struct OwnershipTransferred {
    pub vault: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}

#[event]
pub struct ManagerSet {
    pub vault: Pubkey,
    pub old_manager: Pubkey,
    pub new_manager: Pubkey,
}

// === Holder Events ===

#[event]
pub struct ShareAccountOpened {
    pub vault: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct ShareAccountClosed {
    pub vault: Pubkey,
    pub owner: Pubkey,
}

#[event]
pub struct Supplied {
    pub vault: Pubkey,
    /// Signer whose underlying was pulled
    pub caller: Pubkey,
    /// Holder credited with the minted shares
    pub recipient: Pubkey,
    pub tokens: u64,
    pub shares: u64,
    pub total_shares: u64,
}

#[event]
pub struct Redeemed {
    pub vault: Pubkey,
    pub holder: Pubkey,
    pub requested: u64,
    /// Amount the venue claimed to withdraw
    pub venue_reported: u64,
    /// Amount actually paid out (custody balance delta)
    pub returned: u64,
    pub shares: u64,
    pub total_shares: u64,
}

#[event]
pub struct Sponsored {
    pub vault: Pubkey,
    pub sponsor: Pubkey,
    pub tokens: u64,
}

// === Escape Hatch Events ===

#[event]
pub struct RewardsClaimed {
    pub vault: Pubkey,
    pub caller: Pubkey,
    pub to: Pubkey,
    pub reward_mints: Vec<Pubkey>,
    pub amounts: Vec<u64>,
}

#[event]
pub struct TokenTransferred {
    pub vault: Pubkey,
    pub caller: Pubkey,
    pub mint: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokenApproved {
    pub vault: Pubkey,
    pub caller: Pubkey,
    pub token_account: Pubkey,
    pub delegate: Pubkey,
    pub amount: u64,
}

#[event]
pub struct TokenRevoked {
    pub vault: Pubkey,
    pub caller: Pubkey,
    pub token_account: Pubkey,
}
