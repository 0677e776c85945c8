//! Vault state account
//!
//! One account per yield-bearing asset. Holds the immutable configuration,
//! TotalShares, the reentrancy lock and the owner/manager roles.

use anchor_lang::prelude::*;
use crate::constants::{MAX_DECIMALS, MAX_NAME_LEN, MAX_SYMBOL_LEN, PROGRAM_SEED_PREFIX};
use crate::errors::VaultError;
use crate::math::{checked_add, checked_sub};
use super::share_balance::ShareBalance;

/// Construction parameters for a vault
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VaultConfig {
    /// Initial owner (must not be the null key)
    pub owner: Pubkey,
    /// Root of the venue directory-of-directories
    pub venue_registry: Pubkey,
    /// Rewards collaborator program
    pub rewards_program: Pubkey,
    /// Share decimals; must match the underlying mint
    pub decimals: u8,
    /// Display name of the share
    pub name: String,
    /// Display symbol of the share
    pub symbol: String,
}

impl VaultConfig {
    /// Reject null identities, bad decimals and oversized display strings
    pub fn validate(
        &self,
        underlying_mint: &Pubkey,
        underlying_decimals: u8,
        yield_mint: &Pubkey,
    ) -> Result<()> {
        let null = Pubkey::default();
        require!(
            self.owner != null
                && self.venue_registry != null
                && self.rewards_program != null
                && *underlying_mint != null
                && *yield_mint != null,
            VaultError::InvalidConfiguration
        );
        require!(underlying_mint != yield_mint, VaultError::InvalidConfiguration);
        require!(
            self.decimals > 0 && self.decimals <= MAX_DECIMALS,
            VaultError::InvalidConfiguration
        );
        require!(
            self.decimals == underlying_decimals,
            VaultError::InvalidConfiguration
        );
        require!(
            !self.name.is_empty() && self.name.len() <= MAX_NAME_LEN,
            VaultError::InvalidConfiguration
        );
        require!(
            !self.symbol.is_empty() && self.symbol.len() <= MAX_SYMBOL_LEN,
            VaultError::InvalidConfiguration
        );
        Ok(())
    }
}

/// Vault state
///
/// PDA Seeds: [PROGRAM_SEED_PREFIX, b"vault", yield_mint]
#[account]
pub struct VaultState {
    /// PDA bump seed
    pub bump: u8,

    // === Roles ===

    /// Vault owner
    pub owner: Pubkey,

    /// Pending owner for 2-step ownership transfer
    pub pending_owner: Pubkey,

    /// Optional manager (null key = none)
    pub manager: Pubkey,

    // === Immutable Configuration ===

    /// Underlying asset supplied by depositors
    pub underlying_mint: Pubkey,

    /// Yield-bearing asset minted by the venue against deposits
    pub yield_mint: Pubkey,

    /// Vault-owned underlying token account
    pub custody: Pubkey,

    /// Vault-owned yield-asset token account (the reserve)
    pub yield_account: Pubkey,

    /// Root of the venue directory-of-directories
    pub venue_registry: Pubkey,

    /// Rewards collaborator program
    pub rewards_program: Pubkey,

    /// Share decimals, equal to the underlying decimals
    pub decimals: u8,

    /// Share display name
    pub name: String,

    /// Share display symbol
    pub symbol: String,

    // === Mutable State ===

    /// Sum of every ShareBalance
    pub total_shares: u64,

    /// Reentrancy lock (set while supply/redeem/sponsor is in progress)
    pub locked: bool,

    /// Bump for custody PDA
    pub custody_bump: u8,

    /// Bump for yield account PDA
    pub yield_account_bump: u8,

    /// Reserved for future use
    pub reserved: [u8; 64],
}

impl VaultState {
    pub const SEED: &'static [u8] = b"vault";
    pub const CUSTODY_SEED: &'static [u8] = b"custody";
    pub const YIELD_ACCOUNT_SEED: &'static [u8] = b"yield_account";

    pub fn space() -> usize {
        8 +                         // discriminator
        1 +                         // bump
        32 +                        // owner
        32 +                        // pending_owner
        32 +                        // manager
        32 +                        // underlying_mint
        32 +                        // yield_mint
        32 +                        // custody
        32 +                        // yield_account
        32 +                        // venue_registry
        32 +                        // rewards_program
        1 +                         // decimals
        (4 + MAX_NAME_LEN) +        // name
        (4 + MAX_SYMBOL_LEN) +      // symbol
        8 +                         // total_shares
        1 +                         // locked
        1 +                         // custody_bump
        1 +                         // yield_account_bump
        64                          // reserved
    }

    /// PDA signer seeds for CPIs where the vault is the authority
    pub fn signer_seeds(&self) -> [&[u8]; 4] {
        [
            PROGRAM_SEED_PREFIX,
            Self::SEED,
            self.yield_mint.as_ref(),
            std::slice::from_ref(&self.bump),
        ]
    }

    /// Owner always; manager only when one is set
    pub fn is_owner_or_manager(&self, caller: &Pubkey) -> bool {
        *caller == self.owner || (self.manager != Pubkey::default() && *caller == self.manager)
    }

    pub fn require_owner_or_manager(&self, caller: &Pubkey) -> Result<()> {
        require!(self.is_owner_or_manager(caller), VaultError::Unauthorized);
        Ok(())
    }

    /// Escape hatches may move any token except the yield-bearing asset
    pub fn ensure_movable(&self, mint: &Pubkey) -> Result<()> {
        require!(*mint != self.yield_mint, VaultError::ForbiddenAsset);
        Ok(())
    }

    /// Take the reentrancy lock, failing if it is already held
    pub fn acquire_lock(&mut self) -> Result<()> {
        require!(!self.locked, VaultError::ReentrantCall);
        self.locked = true;
        Ok(())
    }

    pub fn release_lock(&mut self) {
        self.locked = false;
    }

    /// Mint `shares` to `balance`, keeping TotalShares equal to the sum of balances
    pub fn mint_shares(&mut self, balance: &mut ShareBalance, shares: u64) -> Result<()> {
        let total = checked_add(self.total_shares, shares)?;
        let held = checked_add(balance.shares, shares)?;
        self.total_shares = total;
        balance.shares = held;
        Ok(())
    }

    /// Burn `shares` from `balance`
    pub fn burn_shares(&mut self, balance: &mut ShareBalance, shares: u64) -> Result<()> {
        require!(balance.shares >= shares, VaultError::InsufficientBalance);
        let total = checked_sub(self.total_shares, shares)?;
        balance.shares -= shares;
        self.total_shares = total;
        Ok(())
    }
}

/// Derive vault PDA
pub fn derive_vault(program_id: &Pubkey, yield_mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROGRAM_SEED_PREFIX, VaultState::SEED, yield_mint.as_ref()],
        program_id,
    )
}

/// Derive custody token account PDA
pub fn derive_custody(program_id: &Pubkey, vault: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROGRAM_SEED_PREFIX, VaultState::CUSTODY_SEED, vault.as_ref()],
        program_id,
    )
}

/// Derive yield-asset token account PDA
pub fn derive_yield_account(program_id: &Pubkey, vault: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROGRAM_SEED_PREFIX, VaultState::YIELD_ACCOUNT_SEED, vault.as_ref()],
        program_id,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_vault() -> VaultState {
        VaultState {
            bump: 255,
            owner: Pubkey::new_unique(),
            pending_owner: Pubkey::default(),
            manager: Pubkey::default(),
            underlying_mint: Pubkey::new_unique(),
            yield_mint: Pubkey::new_unique(),
            custody: Pubkey::new_unique(),
            yield_account: Pubkey::new_unique(),
            venue_registry: Pubkey::new_unique(),
            rewards_program: Pubkey::new_unique(),
            decimals: 6,
            name: "Vault USDC".to_string(),
            symbol: "vUSDC".to_string(),
            total_shares: 0,
            locked: false,
            custody_bump: 254,
            yield_account_bump: 253,
            reserved: [0u8; 64],
        }
    }

    fn test_balance(vault: &Pubkey) -> ShareBalance {
        ShareBalance {
            bump: 255,
            vault: *vault,
            owner: Pubkey::new_unique(),
            shares: 0,
            reserved: [0u8; 32],
        }
    }

    fn test_config() -> VaultConfig {
        VaultConfig {
            owner: Pubkey::new_unique(),
            venue_registry: Pubkey::new_unique(),
            rewards_program: Pubkey::new_unique(),
            decimals: 6,
            name: "Vault USDC".to_string(),
            symbol: "vUSDC".to_string(),
        }
    }

    #[test]
    fn test_mint_and_burn_keep_totals_in_sync() {
        let mut vault = test_vault();
        let key = Pubkey::new_unique();
        let mut alice = test_balance(&key);
        let mut bob = test_balance(&key);

        vault.mint_shares(&mut alice, 100).unwrap();
        vault.mint_shares(&mut bob, 50).unwrap();
        vault.burn_shares(&mut alice, 30).unwrap();

        assert_eq!(alice.shares, 70);
        assert_eq!(bob.shares, 50);
        assert_eq!(vault.total_shares, alice.shares + bob.shares);
    }

    #[test]
    fn test_burn_more_than_held_fails_without_mutation() {
        let mut vault = test_vault();
        let key = Pubkey::new_unique();
        let mut alice = test_balance(&key);
        vault.mint_shares(&mut alice, 10).unwrap();

        assert!(vault.burn_shares(&mut alice, 11).is_err());
        assert_eq!(alice.shares, 10);
        assert_eq!(vault.total_shares, 10);
    }

    #[test]
    fn test_mint_overflow_fails_without_mutation() {
        let mut vault = test_vault();
        let key = Pubkey::new_unique();
        let mut alice = test_balance(&key);
        vault.total_shares = u64::MAX;

        assert!(vault.mint_shares(&mut alice, 1).is_err());
        assert_eq!(alice.shares, 0);
        assert_eq!(vault.total_shares, u64::MAX);
    }

    #[test]
    fn test_owner_or_manager() {
        let mut vault = test_vault();
        let owner = vault.owner;
        let stranger = Pubkey::new_unique();

        assert!(vault.is_owner_or_manager(&owner));
        assert!(!vault.is_owner_or_manager(&stranger));
        // Null manager never authorizes the null key
        assert!(!vault.is_owner_or_manager(&Pubkey::default()));

        vault.manager = stranger;
        assert!(vault.is_owner_or_manager(&stranger));
        assert!(vault.require_owner_or_manager(&Pubkey::new_unique()).is_err());
    }

    #[test]
    fn test_yield_asset_is_not_movable() {
        let vault = test_vault();
        assert!(vault.ensure_movable(&vault.yield_mint).is_err());
        assert!(vault.ensure_movable(&vault.underlying_mint).is_ok());
        assert!(vault.ensure_movable(&Pubkey::new_unique()).is_ok());
    }

    #[test]
    fn test_lock_rejects_nested_acquire() {
        let mut vault = test_vault();
        vault.acquire_lock().unwrap();
        assert!(vault.acquire_lock().is_err());
        vault.release_lock();
        assert!(vault.acquire_lock().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let underlying = Pubkey::new_unique();
        let yield_mint = Pubkey::new_unique();
        let config = test_config();
        assert!(config.validate(&underlying, 6, &yield_mint).is_ok());

        let mut zero_decimals = test_config();
        zero_decimals.decimals = 0;
        assert!(zero_decimals.validate(&underlying, 0, &yield_mint).is_err());

        let mut null_owner = test_config();
        null_owner.owner = Pubkey::default();
        assert!(null_owner.validate(&underlying, 6, &yield_mint).is_err());

        let mut null_registry = test_config();
        null_registry.venue_registry = Pubkey::default();
        assert!(null_registry.validate(&underlying, 6, &yield_mint).is_err());

        // Share decimals must equal the underlying decimals
        assert!(config.validate(&underlying, 9, &yield_mint).is_err());
        assert!(config.validate(&underlying, 6, &underlying).is_err());

        let mut long_symbol = test_config();
        long_symbol.symbol = "X".repeat(MAX_SYMBOL_LEN + 1);
        assert!(long_symbol.validate(&underlying, 6, &yield_mint).is_err());
    }

    #[test]
    fn test_signer_seeds_derive_the_vault() {
        let program_id = Pubkey::new_unique();
        let mut vault = test_vault();
        let (address, bump) = derive_vault(&program_id, &vault.yield_mint);
        vault.bump = bump;

        let seeds = vault.signer_seeds();
        assert_eq!(
            Pubkey::create_program_address(&seeds, &program_id).unwrap(),
            address
        );
    }

    #[test]
    fn test_vault_space_fits_strings() {
        let vault = test_vault();
        let mut data = Vec::new();
        vault.try_serialize(&mut data).unwrap();
        assert!(data.len() <= VaultState::space());
    }
}
