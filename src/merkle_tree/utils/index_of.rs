use crate::merkle_tree::utils::leaf_hash;
use ethers::types::{Address, H256};

/// Position of `address` in the sorted leaf level, if it is part of the tree.
pub fn index_of(address: &Address, leaves: &[H256]) -> Option<usize> {
    leaves.binary_search(&leaf_hash(address)).ok()
}
