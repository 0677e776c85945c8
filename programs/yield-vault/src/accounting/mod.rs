//! Chain-independent vault flows
//!
//! Supply, redeem and sponsor are written against the port traits below so
//! the same code runs inside the program (through CPI) and against in-memory
//! hosts. Each flow runs under the reentrancy guard.

pub mod guard;
pub mod supply;
pub mod redeem;
pub mod sponsor;
pub mod rewards;

pub use guard::*;
pub use supply::*;
pub use redeem::*;
pub use sponsor::*;
pub use rewards::*;

use anchor_lang::prelude::*;
use crate::interfaces::{LendingVenue, UnderlyingBalanceSource};
use crate::math::ExchangeRate;

/// Holder balances and TotalShares
pub trait ShareLedger {
    fn total_shares(&self) -> u64;
    fn shares_of(&self, holder: &Pubkey) -> Result<u64>;
    fn mint(&mut self, to: &Pubkey, shares: u64) -> Result<()>;
    fn burn(&mut self, from: &Pubkey, shares: u64) -> Result<()>;
}

/// Underlying token movements between the caller and the vault's custody account
pub trait UnderlyingCustody {
    /// Signer of the current operation
    fn caller(&self) -> Pubkey;
    fn pull_from_caller(&mut self, amount: u64) -> Result<()>;
    fn push_to_caller(&mut self, amount: u64) -> Result<()>;
    /// Fresh custody balance (re-read after any external call)
    fn custody_balance(&mut self) -> Result<u64>;
}

/// Mutual exclusion around an operation
pub trait ReentrancyLock {
    fn acquire(&mut self) -> Result<()>;
    fn release(&mut self) -> Result<()>;
}

/// Everything a supply/redeem/sponsor flow needs
pub trait VaultHost:
    ShareLedger + UnderlyingBalanceSource + UnderlyingCustody + LendingVenue + ReentrancyLock
{
}

impl<T> VaultHost for T where
    T: ShareLedger + UnderlyingBalanceSource + UnderlyingCustody + LendingVenue + ReentrancyLock + ?Sized
{
}

/// Exchange rate as seen by the host right now
pub fn current_rate<H: ShareLedger + UnderlyingBalanceSource + ?Sized>(host: &H) -> Result<ExchangeRate> {
    Ok(ExchangeRate::new(host.total_shares(), host.underlying_reserve()?))
}

