//! Program constants and configuration limits

/// Program-specific seed prefix for all PDAs
pub const PROGRAM_SEED_PREFIX: &[u8] = b"yield_vault_v1";

// === Configuration Limits ===

/// Maximum byte length of the share display name
pub const MAX_NAME_LEN: usize = 32;

/// Maximum byte length of the share display symbol
pub const MAX_SYMBOL_LEN: usize = 10;

/// Largest supported decimal precision (10^19 is the largest power of ten in u64)
pub const MAX_DECIMALS: u8 = 19;

// === Lending Venue ===

/// Referral code forwarded with every venue deposit
pub const VENUE_REFERRAL_CODE: u16 = 0;

/// Venue method names (Anchor `global:` namespace)
pub const VENUE_DEPOSIT_METHOD: &str = "deposit";
pub const VENUE_WITHDRAW_METHOD: &str = "withdraw";

/// Length of the discriminator prefix on registry and directory account data
pub const DIRECTORY_DISCRIMINATOR_LEN: usize = 8;

// === Rewards ===

/// Rewards collaborator method name
pub const REWARDS_CLAIM_ALL_METHOD: &str = "claim_all";

/// Upper bound on reward mints accepted back from a single claim
pub const MAX_REWARD_MINTS: usize = 8;
