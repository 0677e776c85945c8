//! In-memory vault host for exercising the accounting flows
//!
//! Balances live in plain maps. `transact` snapshots the state and restores
//! it when the closure fails, the way a failed Solana transaction leaves no
//! trace. Re-entry attempts and their outcomes are recorded outside the
//! snapshot so tests can inspect them after a rollback.

#![allow(dead_code)]

use std::collections::HashMap;

use anchor_lang::prelude::*;
use yield_vault::accounting::{self, ReentrancyLock, ShareLedger, UnderlyingCustody};
use yield_vault::errors::VaultError;
use yield_vault::interfaces::{
    ClaimedRewards, LendingVenue, RewardsCollaborator, UnderlyingBalanceSource,
};
use yield_vault::math::ExchangeRate;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MockState {
    pub total_shares: u64,
    pub shares: HashMap<Pubkey, u64>,
    /// Underlying held by each caller's token account
    pub wallets: HashMap<Pubkey, u64>,
    /// Vault-owned underlying account
    pub custody: u64,
    /// Vault-owned yield-asset balance (UnderlyingReserve)
    pub reserve: u64,
    /// Underlying sitting in the venue
    pub venue_liquidity: u64,
    pub locked: bool,
}

/// Nested call the venue makes back into the vault
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reentry {
    Supply(u64),
    Redeem(u64),
    Sponsor(u64),
}

pub struct MockHost {
    pub state: MockState,
    pub caller: Pubkey,
    /// Underlying the venue keeps back on every withdrawal
    pub shortfall: u64,
    pub venue_fails: bool,
    pub reentry: Option<Reentry>,
    pub reentry_results: Vec<std::result::Result<(), u32>>,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            state: MockState::default(),
            caller: Pubkey::new_unique(),
            shortfall: 0,
            venue_fails: false,
            reentry: None,
            reentry_results: Vec::new(),
        }
    }

    /// Credit underlying to a holder's token account
    pub fn fund(&mut self, holder: &Pubkey, amount: u64) {
        *self.state.wallets.entry(*holder).or_default() += amount;
    }

    pub fn act_as(&mut self, holder: &Pubkey) {
        self.caller = *holder;
    }

    /// Venue interest: the yield-asset balance grows with the liquidity behind it
    pub fn accrue(&mut self, interest: u64) {
        self.state.reserve += interest;
        self.state.venue_liquidity += interest;
    }

    /// Direct transfer of the yield asset into the vault's account
    pub fn donate_yield_asset(&mut self, amount: u64) {
        self.state.reserve += amount;
        self.state.venue_liquidity += amount;
    }

    /// Venue loss that wipes out the reserve while shares remain
    pub fn lose_reserve(&mut self) {
        self.state.reserve = 0;
        self.state.venue_liquidity = 0;
    }

    pub fn wallet(&self, holder: &Pubkey) -> u64 {
        self.state.wallets.get(holder).copied().unwrap_or(0)
    }

    pub fn shares(&self, holder: &Pubkey) -> u64 {
        self.state.shares.get(holder).copied().unwrap_or(0)
    }

    pub fn rate(&self) -> ExchangeRate {
        ExchangeRate::new(self.state.total_shares, self.state.reserve)
    }

    /// Underlying value of a holder's shares
    pub fn value_of(&self, holder: &Pubkey) -> u64 {
        self.rate().shares_to_tokens(self.shares(holder)).unwrap()
    }

    pub fn sum_of_balances(&self) -> u64 {
        self.state.shares.values().sum()
    }

    /// Run `f` atomically: on error every balance is restored
    pub fn transact<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        let snapshot = self.state.clone();
        let outcome = f(self);
        if outcome.is_err() {
            self.state = snapshot;
        }
        outcome
    }

    pub fn supply(&mut self, amount: u64) -> Result<accounting::SupplyReceipt> {
        let caller = self.caller;
        self.supply_to(amount, &caller)
    }

    /// Supply from the acting caller, crediting `recipient`
    pub fn supply_to(
        &mut self,
        amount: u64,
        recipient: &Pubkey,
    ) -> Result<accounting::SupplyReceipt> {
        self.transact(|host| accounting::supply(host, amount, recipient))
    }

    pub fn redeem(&mut self, amount: u64) -> Result<accounting::RedeemReceipt> {
        self.transact(|host| accounting::redeem(host, amount))
    }

    pub fn sponsor(&mut self, amount: u64) -> Result<u64> {
        self.transact(|host| accounting::sponsor(host, amount))
    }

    fn try_reenter(&mut self) {
        let Some(call) = self.reentry.take() else {
            return;
        };
        let caller = self.caller;
        let outcome = match call {
            Reentry::Supply(amount) => accounting::supply(self, amount, &caller).map(|_| ()),
            Reentry::Redeem(amount) => accounting::redeem(self, amount).map(|_| ()),
            Reentry::Sponsor(amount) => accounting::sponsor(self, amount).map(|_| ()),
        };
        self.reentry_results.push(outcome.map_err(|err| error_code(&err).unwrap_or(0)));
    }
}

impl ShareLedger for MockHost {
    fn total_shares(&self) -> u64 {
        self.state.total_shares
    }

    fn shares_of(&self, holder: &Pubkey) -> Result<u64> {
        Ok(self.shares(holder))
    }

    fn mint(&mut self, to: &Pubkey, shares: u64) -> Result<()> {
        let total = self
            .state
            .total_shares
            .checked_add(shares)
            .ok_or(VaultError::MathOverflow)?;
        let held = self
            .shares(to)
            .checked_add(shares)
            .ok_or(VaultError::MathOverflow)?;
        self.state.total_shares = total;
        self.state.shares.insert(*to, held);
        Ok(())
    }

    fn burn(&mut self, from: &Pubkey, shares: u64) -> Result<()> {
        let held = self.shares(from);
        require!(held >= shares, VaultError::InsufficientBalance);
        self.state.shares.insert(*from, held - shares);
        self.state.total_shares -= shares;
        Ok(())
    }
}

impl UnderlyingBalanceSource for MockHost {
    fn underlying_reserve(&self) -> Result<u64> {
        Ok(self.state.reserve)
    }
}

impl UnderlyingCustody for MockHost {
    fn caller(&self) -> Pubkey {
        self.caller
    }

    fn pull_from_caller(&mut self, amount: u64) -> Result<()> {
        let caller = self.caller;
        let held = self.wallet(&caller);
        require!(held >= amount, VaultError::InsufficientBalance);
        self.state.wallets.insert(caller, held - amount);
        self.state.custody += amount;
        Ok(())
    }

    fn push_to_caller(&mut self, amount: u64) -> Result<()> {
        require!(self.state.custody >= amount, VaultError::InsufficientBalance);
        self.state.custody -= amount;
        let caller = self.caller;
        self.fund(&caller, amount);
        Ok(())
    }

    fn custody_balance(&mut self) -> Result<u64> {
        Ok(self.state.custody)
    }
}

impl LendingVenue for MockHost {
    fn deposit(&mut self, amount: u64) -> Result<()> {
        require!(!self.venue_fails, VaultError::ExternalCallFailure);
        self.try_reenter();

        require!(self.state.custody >= amount, VaultError::ExternalCallFailure);
        self.state.custody -= amount;
        self.state.venue_liquidity += amount;
        self.state.reserve += amount;
        Ok(())
    }

    fn withdraw(&mut self, amount: u64) -> Result<u64> {
        require!(!self.venue_fails, VaultError::ExternalCallFailure);
        self.try_reenter();

        require!(self.state.reserve >= amount, VaultError::ExternalCallFailure);
        let delivered = amount.saturating_sub(self.shortfall);
        self.state.reserve -= amount;
        self.state.venue_liquidity -= delivered;
        self.state.custody += delivered;
        Ok(amount)
    }
}

impl ReentrancyLock for MockHost {
    fn acquire(&mut self) -> Result<()> {
        require!(!self.state.locked, VaultError::ReentrantCall);
        self.state.locked = true;
        Ok(())
    }

    fn release(&mut self) -> Result<()> {
        self.state.locked = false;
        Ok(())
    }
}

/// Rewards program stub returning a canned claim
pub struct MockRewards {
    pub response: ClaimedRewards,
    pub claims: Vec<(Vec<Pubkey>, Pubkey)>,
}

impl RewardsCollaborator for MockRewards {
    fn claim_all(&mut self, assets: &[Pubkey], to: &Pubkey) -> Result<ClaimedRewards> {
        self.claims.push((assets.to_vec(), *to));
        Ok(self.response.clone())
    }
}

pub fn error_code(err: &anchor_lang::error::Error) -> Option<u32> {
    match err {
        anchor_lang::error::Error::AnchorError(e) => Some(e.error_code_number),
        _ => None,
    }
}

pub fn assert_vault_error<T: std::fmt::Debug>(result: Result<T>, expected: VaultError) {
    match result {
        Ok(value) => panic!("expected {:?}, got Ok({:?})", expected, value),
        Err(err) => assert_eq!(
            error_code(&err),
            Some(u32::from(expected)),
            "expected {:?}, got {:?}",
            expected,
            err
        ),
    }
}
