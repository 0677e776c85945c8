//! CPI host: adapts an instruction's accounts into the accounting ports
//!
//! The flows in `crate::accounting` only see the traits. Everything that
//! touches the token program, the venue or the rewards program goes
//! through here, with the vault PDA signing.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use anchor_lang::solana_program::program::{get_return_data, invoke_signed};
use anchor_spl::token_interface::{
    transfer_checked, Mint, TokenAccount, TokenInterface, TransferChecked,
};
use crate::accounting::{ReentrancyLock, ShareLedger, UnderlyingCustody};
use crate::constants::{PROGRAM_SEED_PREFIX, VENUE_REFERRAL_CODE};
use crate::errors::VaultError;
use crate::interfaces::{
    claim_all_ix, decode_return, venue_deposit_ix, venue_withdraw_ix, ClaimAllArgs,
    ClaimedRewards, LendingVenue, RegistryLookup, RewardsCollaborator,
    UnderlyingBalanceSource, VenueCallKeys, VenueDepositArgs, VenueResolver,
    VenueWithdrawArgs,
};
use crate::math::ExchangeRate;
use crate::state::{ShareBalance, VaultState};

/// Accounts shared by supply, redeem and sponsor
#[derive(Accounts)]
pub struct VaultFunds<'info> {
    #[account(mut)]
    pub yield_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [PROGRAM_SEED_PREFIX, VaultState::SEED, yield_mint.key().as_ref()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, VaultState>>,

    #[account(mut, address = vault.custody)]
    pub custody: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, address = vault.yield_account)]
    pub yield_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(address = vault.underlying_mint)]
    pub underlying_mint: Box<InterfaceAccount<'info, Mint>>,

    /// CHECK: Compared with vault.venue_registry when the venue is resolved
    pub venue_registry: UncheckedAccount<'info>,

    /// CHECK: Must be the registry's active directory
    pub venue_directory: UncheckedAccount<'info>,

    /// CHECK: Must be the program named by the directory
    pub venue_program: UncheckedAccount<'info>,

    /// CHECK: Must be the state account named by the directory
    #[account(mut)]
    pub venue_state: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> VaultFunds<'info> {
    /// Exchange rate from the loaded accounts
    pub fn rate(&self) -> ExchangeRate {
        ExchangeRate::new(self.vault.total_shares, self.yield_account.amount)
    }

    /// Log the current price; never fails
    pub fn log_price(&self) {
        match self.rate().price_per_share_decimal(self.vault.decimals) {
            Some(price) => msg!("Price per share: {}", price),
            None => msg!("Price per share out of display range"),
        }
    }

    /// Walk registry → directory and check the venue accounts against it
    pub fn resolve_venue(&self) -> Result<()> {
        let resolved = RegistryLookup {
            expected_registry: self.vault.venue_registry,
            registry: &self.venue_registry,
            directory: &self.venue_directory,
        }
        .resolve_venue()?;

        require_keys_eq!(self.venue_program.key(), resolved.program, VaultError::VenueMismatch);
        require_keys_eq!(self.venue_state.key(), resolved.state, VaultError::VenueMismatch);
        require!(self.venue_program.executable, VaultError::VenueMismatch);
        Ok(())
    }

    /// Bind the caller's side of an operation; resolves the venue first
    pub fn host<'a>(
        &'a mut self,
        caller: &'a Signer<'info>,
        caller_token_account: &'a mut InterfaceAccount<'info, TokenAccount>,
        share_balance: Option<&'a mut Account<'info, ShareBalance>>,
        venue_extra: &'a [AccountInfo<'info>],
    ) -> Result<CpiHost<'a, 'info>> {
        self.resolve_venue()?;
        Ok(CpiHost {
            funds: self,
            caller,
            caller_token_account,
            share_balance,
            venue_extra,
        })
    }
}

pub struct CpiHost<'a, 'info> {
    funds: &'a mut VaultFunds<'info>,
    caller: &'a Signer<'info>,
    caller_token_account: &'a mut InterfaceAccount<'info, TokenAccount>,
    share_balance: Option<&'a mut Account<'info, ShareBalance>>,
    venue_extra: &'a [AccountInfo<'info>],
}

impl<'info> CpiHost<'_, 'info> {
    fn venue_keys(&self) -> VenueCallKeys {
        VenueCallKeys {
            venue_program: self.funds.venue_program.key(),
            venue_state: self.funds.venue_state.key(),
            vault: self.funds.vault.key(),
            custody: self.funds.custody.key(),
            yield_account: self.funds.yield_account.key(),
            underlying_mint: self.funds.underlying_mint.key(),
            yield_mint: self.funds.yield_mint.key(),
            token_program: self.funds.token_program.key(),
        }
    }

    fn venue_infos(&self) -> Vec<AccountInfo<'info>> {
        let mut infos = vec![
            self.funds.venue_state.to_account_info(),
            self.funds.vault.to_account_info(),
            self.funds.custody.to_account_info(),
            self.funds.yield_account.to_account_info(),
            self.funds.underlying_mint.to_account_info(),
            self.funds.yield_mint.to_account_info(),
            self.funds.token_program.to_account_info(),
        ];
        infos.extend(self.venue_extra.iter().cloned());
        infos.push(self.funds.venue_program.to_account_info());
        infos
    }

    fn invoke_venue(&self, ix: &Instruction) -> Result<()> {
        let seeds = self.funds.vault.signer_seeds();
        invoke_signed(ix, &self.venue_infos(), &[&seeds[..]]).map_err(|err| {
            msg!("Venue call failed: {}", err);
            error!(VaultError::ExternalCallFailure)
        })
    }

    /// Token balances change under CPI; re-read both vault accounts
    fn refresh(&mut self) -> Result<()> {
        self.funds.custody.reload()?;
        self.funds.yield_account.reload()?;
        Ok(())
    }
}

impl ShareLedger for CpiHost<'_, '_> {
    fn total_shares(&self) -> u64 {
        self.funds.vault.total_shares
    }

    fn shares_of(&self, holder: &Pubkey) -> Result<u64> {
        let balance = self
            .share_balance
            .as_deref()
            .ok_or(VaultError::HolderMismatch)?;
        require_keys_eq!(balance.owner, *holder, VaultError::HolderMismatch);
        Ok(balance.shares)
    }

    fn mint(&mut self, to: &Pubkey, shares: u64) -> Result<()> {
        let balance = self
            .share_balance
            .as_deref_mut()
            .ok_or(VaultError::HolderMismatch)?;
        require_keys_eq!(balance.owner, *to, VaultError::HolderMismatch);
        self.funds.vault.mint_shares(balance, shares)
    }

    fn burn(&mut self, from: &Pubkey, shares: u64) -> Result<()> {
        let balance = self
            .share_balance
            .as_deref_mut()
            .ok_or(VaultError::HolderMismatch)?;
        require_keys_eq!(balance.owner, *from, VaultError::HolderMismatch);
        self.funds.vault.burn_shares(balance, shares)
    }
}

impl UnderlyingBalanceSource for CpiHost<'_, '_> {
    fn underlying_reserve(&self) -> Result<u64> {
        Ok(self.funds.yield_account.amount)
    }
}

impl UnderlyingCustody for CpiHost<'_, '_> {
    fn caller(&self) -> Pubkey {
        self.caller.key()
    }

    fn pull_from_caller(&mut self, amount: u64) -> Result<()> {
        transfer_checked(
            CpiContext::new(
                self.funds.token_program.to_account_info(),
                TransferChecked {
                    from: self.caller_token_account.to_account_info(),
                    mint: self.funds.underlying_mint.to_account_info(),
                    to: self.funds.custody.to_account_info(),
                    authority: self.caller.to_account_info(),
                },
            ),
            amount,
            self.funds.underlying_mint.decimals,
        )?;
        self.funds.custody.reload()?;
        self.caller_token_account.reload()?;
        Ok(())
    }

    fn push_to_caller(&mut self, amount: u64) -> Result<()> {
        let seeds = self.funds.vault.signer_seeds();
        transfer_checked(
            CpiContext::new_with_signer(
                self.funds.token_program.to_account_info(),
                TransferChecked {
                    from: self.funds.custody.to_account_info(),
                    mint: self.funds.underlying_mint.to_account_info(),
                    to: self.caller_token_account.to_account_info(),
                    authority: self.funds.vault.to_account_info(),
                },
                &[&seeds[..]],
            ),
            amount,
            self.funds.underlying_mint.decimals,
        )?;
        self.funds.custody.reload()?;
        self.caller_token_account.reload()?;
        Ok(())
    }

    fn custody_balance(&mut self) -> Result<u64> {
        self.funds.custody.reload()?;
        Ok(self.funds.custody.amount)
    }
}

impl LendingVenue for CpiHost<'_, '_> {
    fn deposit(&mut self, amount: u64) -> Result<()> {
        let keys = self.venue_keys();
        let args = VenueDepositArgs {
            asset: keys.underlying_mint,
            amount,
            on_behalf_of: keys.vault,
            referral_code: VENUE_REFERRAL_CODE,
        };
        let ix = venue_deposit_ix(&keys, &args, &account_metas(self.venue_extra))?;
        self.invoke_venue(&ix)?;
        self.refresh()
    }

    fn withdraw(&mut self, amount: u64) -> Result<u64> {
        let keys = self.venue_keys();
        let args = VenueWithdrawArgs {
            asset: keys.underlying_mint,
            amount,
            to: keys.custody,
        };
        let ix = venue_withdraw_ix(&keys, &args, &account_metas(self.venue_extra))?;
        self.invoke_venue(&ix)?;
        let reported: u64 = decode_return(get_return_data(), &keys.venue_program, 8)?;
        self.refresh()?;
        Ok(reported)
    }
}

impl ReentrancyLock for CpiHost<'_, '_> {
    fn acquire(&mut self) -> Result<()> {
        self.funds.vault.acquire_lock()?;
        // Persist before any CPI so a nested call into this program sees it
        self.funds.vault.exit(&crate::ID)
    }

    fn release(&mut self) -> Result<()> {
        self.funds.vault.release_lock();
        self.funds.vault.exit(&crate::ID)
    }
}

/// Rewards collaborator reached by CPI with the vault as claimant
pub struct RewardsCpi<'a, 'info> {
    pub vault: &'a Account<'info, VaultState>,
    pub rewards_program: &'a AccountInfo<'info>,
    pub extra: &'a [AccountInfo<'info>],
}

impl RewardsCollaborator for RewardsCpi<'_, '_> {
    fn claim_all(&mut self, assets: &[Pubkey], to: &Pubkey) -> Result<ClaimedRewards> {
        let args = ClaimAllArgs {
            assets: assets.to_vec(),
            to: *to,
        };
        let ix = claim_all_ix(
            self.rewards_program.key,
            &self.vault.key(),
            &args,
            &account_metas(self.extra),
        )?;

        let mut infos = vec![self.vault.to_account_info()];
        infos.extend(self.extra.iter().cloned());
        infos.push(self.rewards_program.clone());

        let seeds = self.vault.signer_seeds();
        invoke_signed(&ix, &infos, &[&seeds[..]]).map_err(|err| {
            msg!("Rewards call failed: {}", err);
            error!(VaultError::ExternalCallFailure)
        })?;

        decode_return(
            get_return_data(),
            self.rewards_program.key,
            ClaimedRewards::MAX_ENCODED_LEN,
        )
    }
}

/// Forward remaining accounts to a CPI with their original privileges
fn account_metas(infos: &[AccountInfo]) -> Vec<AccountMeta> {
    infos
        .iter()
        .map(|info| AccountMeta {
            pubkey: *info.key,
            is_signer: info.is_signer,
            is_writable: info.is_writable,
        })
        .collect()
}
