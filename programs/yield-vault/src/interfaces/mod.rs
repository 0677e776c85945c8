//! Ports to external collaborators (lending venue, venue registry, rewards)
//! and the CPI wire encoding they share.

pub mod access;
pub mod registry;
pub mod rewards;
pub mod venue;

pub use access::*;
pub use registry::*;
pub use rewards::*;
pub use venue::*;

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use crate::errors::VaultError;

/// Anchor method discriminator: first 8 bytes of sha256("global:<method>")
pub fn method_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{method}");
    let digest = hash(preimage.as_bytes()).to_bytes();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&digest[..8]);
    discriminator
}

/// Instruction data for an Anchor-convention call: discriminator ++ borsh(args)
pub fn encode_call<A: AnchorSerialize>(method: &str, args: &A) -> Result<Vec<u8>> {
    let mut data = method_discriminator(method).to_vec();
    args.serialize(&mut data)
        .map_err(|_| error!(VaultError::InvalidReturnData))?;
    Ok(data)
}

/// Decode CPI return data, checking it came from `expected_program`
///
/// The runtime strips trailing zero bytes from return data, so the payload
/// is zero-padded to `max_len` before decoding.
pub fn decode_return<T: AnchorDeserialize>(
    returned: Option<(Pubkey, Vec<u8>)>,
    expected_program: &Pubkey,
    max_len: usize,
) -> Result<T> {
    let (program, mut data) = returned.ok_or(VaultError::InvalidReturnData)?;
    require_keys_eq!(program, *expected_program, VaultError::InvalidReturnData);
    require!(data.len() <= max_len, VaultError::InvalidReturnData);
    data.resize(max_len, 0);
    T::deserialize(&mut data.as_slice()).map_err(|_| error!(VaultError::InvalidReturnData))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discriminator_is_stable_and_distinct() {
        assert_eq!(method_discriminator("deposit"), method_discriminator("deposit"));
        assert_ne!(method_discriminator("deposit"), method_discriminator("withdraw"));
    }

    #[test]
    fn test_encode_call_prefixes_discriminator() {
        let data = encode_call("withdraw", &42u64).unwrap();
        assert_eq!(&data[..8], &method_discriminator("withdraw"));
        assert_eq!(&data[8..], &42u64.to_le_bytes());
    }

    #[test]
    fn test_decode_return_restores_trimmed_zeros() {
        let program = Pubkey::new_unique();
        // 256u64 = [0, 1, 0, 0, 0, 0, 0, 0], trailing zeros trimmed by the runtime
        let value: u64 = decode_return(Some((program, vec![0, 1])), &program, 8).unwrap();
        assert_eq!(value, 256);

        let zero: u64 = decode_return(Some((program, vec![])), &program, 8).unwrap();
        assert_eq!(zero, 0);
    }

    #[test]
    fn test_decode_return_rejects_foreign_or_missing_data() {
        let program = Pubkey::new_unique();
        let other = Pubkey::new_unique();
        assert!(decode_return::<u64>(None, &program, 8).is_err());
        assert!(decode_return::<u64>(Some((other, vec![1])), &program, 8).is_err());
        assert!(decode_return::<u64>(Some((program, vec![1; 9])), &program, 8).is_err());
    }
}
