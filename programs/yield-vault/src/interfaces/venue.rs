//! Lending venue port
//!
//! The venue takes underlying deposits on behalf of the vault and mints the
//! yield-bearing asset in return. Its internal interest accrual is opaque:
//! the vault only observes the yield-asset balance it holds.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::instruction::{AccountMeta, Instruction};
use crate::constants::{VENUE_DEPOSIT_METHOD, VENUE_WITHDRAW_METHOD};
use super::encode_call;

/// Deposits and withdrawals against the external lending venue
pub trait LendingVenue {
    /// Move `amount` of underlying from custody into the venue on behalf of the vault
    fn deposit(&mut self, amount: u64) -> Result<()>;

    /// Withdraw `amount` of underlying into custody; returns the venue-reported amount
    fn withdraw(&mut self, amount: u64) -> Result<u64>;
}

/// Total underlying units attributable to the vault (UnderlyingReserve)
pub trait UnderlyingBalanceSource {
    fn underlying_reserve(&self) -> Result<u64>;
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VenueDepositArgs {
    pub asset: Pubkey,
    pub amount: u64,
    pub on_behalf_of: Pubkey,
    pub referral_code: u16,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VenueWithdrawArgs {
    pub asset: Pubkey,
    pub amount: u64,
    pub to: Pubkey,
}

/// Account keys the venue needs for a deposit or withdrawal
#[derive(Clone, Copy, Debug)]
pub struct VenueCallKeys {
    pub venue_program: Pubkey,
    pub venue_state: Pubkey,
    pub vault: Pubkey,
    pub custody: Pubkey,
    pub yield_account: Pubkey,
    pub underlying_mint: Pubkey,
    pub yield_mint: Pubkey,
    pub token_program: Pubkey,
}

impl VenueCallKeys {
    fn metas(&self, extra: &[AccountMeta]) -> Vec<AccountMeta> {
        let mut metas = vec![
            AccountMeta::new(self.venue_state, false),
            AccountMeta::new_readonly(self.vault, true),
            AccountMeta::new(self.custody, false),
            AccountMeta::new(self.yield_account, false),
            AccountMeta::new_readonly(self.underlying_mint, false),
            AccountMeta::new(self.yield_mint, false),
            AccountMeta::new_readonly(self.token_program, false),
        ];
        metas.extend_from_slice(extra);
        metas
    }
}

/// Build the venue `deposit` instruction
pub fn venue_deposit_ix(
    keys: &VenueCallKeys,
    args: &VenueDepositArgs,
    extra: &[AccountMeta],
) -> Result<Instruction> {
    Ok(Instruction {
        program_id: keys.venue_program,
        accounts: keys.metas(extra),
        data: encode_call(VENUE_DEPOSIT_METHOD, args)?,
    })
}

/// Build the venue `withdraw` instruction
pub fn venue_withdraw_ix(
    keys: &VenueCallKeys,
    args: &VenueWithdrawArgs,
    extra: &[AccountMeta],
) -> Result<Instruction> {
    Ok(Instruction {
        program_id: keys.venue_program,
        accounts: keys.metas(extra),
        data: encode_call(VENUE_WITHDRAW_METHOD, args)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interfaces::method_discriminator;

    fn keys() -> VenueCallKeys {
        VenueCallKeys {
            venue_program: Pubkey::new_unique(),
            venue_state: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            custody: Pubkey::new_unique(),
            yield_account: Pubkey::new_unique(),
            underlying_mint: Pubkey::new_unique(),
            yield_mint: Pubkey::new_unique(),
            token_program: Pubkey::new_unique(),
        }
    }

    #[test]
    fn test_deposit_ix_layout() {
        let keys = keys();
        let args = VenueDepositArgs {
            asset: keys.underlying_mint,
            amount: 1_000,
            on_behalf_of: keys.vault,
            referral_code: 0,
        };
        let extra = [AccountMeta::new_readonly(Pubkey::new_unique(), false)];
        let ix = venue_deposit_ix(&keys, &args, &extra).unwrap();

        assert_eq!(ix.program_id, keys.venue_program);
        assert_eq!(&ix.data[..8], &method_discriminator("deposit"));
        assert_eq!(ix.data.len(), 8 + 32 + 8 + 32 + 2);
        assert_eq!(ix.accounts.len(), 8);
        // Vault PDA signs; nothing else does
        assert!(ix.accounts[1].is_signer);
        assert_eq!(ix.accounts.iter().filter(|m| m.is_signer).count(), 1);
        assert_eq!(ix.accounts[7], extra[0]);
    }

    #[test]
    fn test_withdraw_ix_decodes_back() {
        let keys = keys();
        let args = VenueWithdrawArgs {
            asset: keys.underlying_mint,
            amount: 77,
            to: keys.custody,
        };
        let ix = venue_withdraw_ix(&keys, &args, &[]).unwrap();

        assert_eq!(&ix.data[..8], &method_discriminator("withdraw"));
        let decoded = VenueWithdrawArgs::try_from_slice(&ix.data[8..]).unwrap();
        assert_eq!(decoded, args);
    }
}
