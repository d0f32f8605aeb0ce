use crate::merkle_tree::utils::{hash_pair, leaf_hash};
use crate::merkle_tree::MerkleProof;
use ethers::types::{Address, H256};

/// Folds the leaf of `address` with every proof element, in order.
pub fn compute_root(address: &Address, proof: &[H256]) -> H256 {
    proof
        .iter()
        .fold(leaf_hash(address), |node, sibling| hash_pair(node, *sibling))
}

/// Checks an inclusion proof against a published root. Needs nothing but the root.
pub fn verify_proof(root: H256, address: &Address, proof: &[H256]) -> bool {
    compute_root(address, proof) == root
}

pub fn verify_merkle_proof(proof: &MerkleProof) -> bool {
    proof.leaf == leaf_hash(&proof.address)
        && verify_proof(proof.root, &proof.address, &proof.sibling_hashes)
}
