use ethers::abi::{encode, Token};
use ethers::types::{Address, H256};
use ethers::utils::keccak256;

use crate::merkle_tree::params::HASH_BYTES;

/// Leaf of an allow-listed address: `keccak256(keccak256(abi.encode(address)))`.
///
/// The double hash keeps a leaf from ever being read as an internal node, which is a single
/// keccak256 over two 32-byte children.
pub fn leaf_hash(address: &Address) -> H256 {
    let encoded = encode(&[Token::Address(*address)]);
    H256::from(keccak256(keccak256(encoded)))
}

/// Parent of two nodes. The children are ordered by byte value before hashing, so the
/// result does not depend on which one sits on the left.
pub fn hash_pair(a: H256, b: H256) -> H256 {
    let (left, right) = if a <= b { (a, b) } else { (b, a) };

    let mut hash_inputs = [0u8; 2 * HASH_BYTES];
    hash_inputs[..HASH_BYTES].copy_from_slice(left.as_bytes());
    hash_inputs[HASH_BYTES..].copy_from_slice(right.as_bytes());

    H256::from(keccak256(hash_inputs))
}
