mod dump;
mod entry;
pub mod params;
mod tree;
pub mod utils;

use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};

/// An inclusion proof for one allow-listed address, bundled with the root it was generated against.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerkleProof {
    pub root: H256,
    pub address: Address,
    pub leaf: H256,
    /// Sibling hashes ordered from the leaf level up to the level below the root.
    pub sibling_hashes: Vec<H256>,
}

pub use dump::{DumpValue, TreeDump};
pub use entry::Entry;
pub use tree::AllowlistTree;
pub use utils::{compute_root, hash_pair, leaf_hash, parse_address, verify_proof};
