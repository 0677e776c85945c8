//! Venue registry: a directory of directories
//!
//! The vault stores only the registry address. At call time the registry
//! names the active directory, and the directory names the venue program and
//! its state account, so the venue can move without touching the vault.
//!
//! Both accounts carry an 8-byte discriminator followed by borsh data.

use anchor_lang::prelude::*;
use crate::constants::DIRECTORY_DISCRIMINATOR_LEN;
use crate::errors::VaultError;

/// Registry account payload
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryRecord {
    pub active_directory: Pubkey,
}

/// Directory account payload
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DirectoryRecord {
    pub venue_program: Pubkey,
    pub venue_state: Pubkey,
}

/// Venue resolved for the current call
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedVenue {
    pub program: Pubkey,
    pub state: Pubkey,
}

/// Resolves the active venue
pub trait VenueResolver {
    fn resolve_venue(&self) -> Result<ResolvedVenue>;
}

/// Decode a directory-style record, ignoring trailing account padding
pub fn read_record<T: AnchorDeserialize>(data: &[u8]) -> Result<T> {
    require!(
        data.len() > DIRECTORY_DISCRIMINATOR_LEN,
        VaultError::VenueMismatch
    );
    T::deserialize(&mut &data[DIRECTORY_DISCRIMINATOR_LEN..])
        .map_err(|_| error!(VaultError::VenueMismatch))
}

/// Walk registry → directory, checking each hop against the accounts supplied
pub fn resolve_through(
    expected_registry: &Pubkey,
    registry_key: &Pubkey,
    registry_data: &[u8],
    directory_key: &Pubkey,
    directory_data: &[u8],
) -> Result<ResolvedVenue> {
    require_keys_eq!(*registry_key, *expected_registry, VaultError::VenueMismatch);
    let registry: RegistryRecord = read_record(registry_data)?;

    require_keys_eq!(*directory_key, registry.active_directory, VaultError::VenueMismatch);
    let directory: DirectoryRecord = read_record(directory_data)?;

    require!(
        directory.venue_program != Pubkey::default(),
        VaultError::VenueMismatch
    );
    Ok(ResolvedVenue {
        program: directory.venue_program,
        state: directory.venue_state,
    })
}

/// Registry and directory accounts supplied to an instruction
pub struct RegistryLookup<'a, 'info> {
    pub expected_registry: Pubkey,
    pub registry: &'a AccountInfo<'info>,
    pub directory: &'a AccountInfo<'info>,
}

impl VenueResolver for RegistryLookup<'_, '_> {
    fn resolve_venue(&self) -> Result<ResolvedVenue> {
        let registry_data = self.registry.try_borrow_data()?;
        let directory_data = self.directory.try_borrow_data()?;
        resolve_through(
            &self.expected_registry,
            self.registry.key,
            &registry_data,
            self.directory.key,
            &directory_data,
        )
    }
}
