//! Access-control port: who may run privileged operations

use anchor_lang::prelude::*;
use crate::state::VaultState;

pub trait AccessControl {
    fn is_owner_or_manager(&self, caller: &Pubkey) -> bool;
}

impl AccessControl for VaultState {
    fn is_owner_or_manager(&self, caller: &Pubkey) -> bool {
        VaultState::is_owner_or_manager(self, caller)
    }
}
