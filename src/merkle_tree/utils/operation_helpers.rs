use ethers::types::{Address, H256};

use crate::error::TreeError;

/// Parses a 20-byte address from hex, with or without the `0x` prefix.
/// The zero address is refused, it can never hold or claim tokens.
pub fn parse_address(address: &str) -> Result<Address, TreeError> {
    match decode_fixed_hex::<20>(address) {
        Some(bytes) if bytes != [0u8; 20] => Ok(Address::from(bytes)),
        _ => Err(TreeError::InvalidAddress(address.to_string())),
    }
}

/// Parses a 32-byte hash (a root or a proof element) from hex, with or without the `0x` prefix.
pub fn parse_hash(hash: &str) -> Result<H256, TreeError> {
    decode_fixed_hex::<32>(hash)
        .map(H256::from)
        .ok_or_else(|| TreeError::InvalidHash(hash.to_string()))
}

fn decode_fixed_hex<const N: usize>(input: &str) -> Option<[u8; N]> {
    let trimmed = input.trim();
    let cleaned = trimmed.strip_prefix("0x").unwrap_or(trimmed);

    let mut bytes = [0u8; N];
    hex::decode_to_slice(cleaned, &mut bytes).ok()?;
    Some(bytes)
}
