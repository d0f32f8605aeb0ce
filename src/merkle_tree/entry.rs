use ethers::types::{Address, H256};

use crate::merkle_tree::utils::leaf_hash;

/// An entry of the allow-list: one eligible address and its leaf hash.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    address: Address,
    leaf_hash: H256,
}

impl Entry {
    pub fn new(address: &Address) -> Self {
        Entry {
            address: *address,
            leaf_hash: leaf_hash(address),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn leaf_hash(&self) -> H256 {
        self.leaf_hash
    }
}
