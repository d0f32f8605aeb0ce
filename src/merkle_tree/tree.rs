use std::collections::BTreeMap;
use std::path::Path;

use ethers::types::{Address, H256};

use crate::error::TreeError;
use crate::merkle_tree::utils::{
    build_merkle_tree_from_leaves, build_sorted_entries, index_of, parse_csv_to_addresses,
    verify_merkle_proof,
};
use crate::merkle_tree::{Entry, MerkleProof};

/// Binary Merkle tree committing to an allow-list of addresses.
///
/// Leaves are sorted by hash, internal nodes hash their children in sorted order and an unpaired
/// node at the end of a level is promoted to the next level. The same set of addresses always
/// yields the same root, whatever order it was supplied in.
#[derive(Clone, Debug)]
pub struct AllowlistTree {
    root: H256,
    nodes: Vec<Vec<H256>>,
    entries: Vec<Entry>,
}

impl AllowlistTree {
    /// Builds the tree. Fails on an empty allow-list or on a repeated address.
    pub fn new(addresses: &[Address]) -> Result<Self, TreeError> {
        let entries = build_sorted_entries(addresses)?;
        let leaves = entries.iter().map(Entry::leaf_hash).collect();
        let nodes = build_merkle_tree_from_leaves(leaves);

        let root = nodes
            .last()
            .and_then(|level| level.first())
            .copied()
            .ok_or(TreeError::EmptyAllowlist)?;

        Ok(AllowlistTree {
            root,
            nodes,
            entries,
        })
    }

    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, TreeError> {
        let addresses = parse_csv_to_addresses(path)?;
        Self::new(&addresses)
    }

    pub fn root(&self) -> H256 {
        self.root
    }

    /// Number of levels above the leaves.
    pub fn depth(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn leaves(&self) -> &[H256] {
        &self.nodes[0]
    }

    pub fn nodes(&self) -> &[Vec<H256>] {
        &self.nodes
    }

    /// Entries in leaf order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn index_of(&self, address: &Address) -> Option<usize> {
        index_of(address, self.leaves())
    }

    pub fn contains(&self, address: &Address) -> bool {
        self.index_of(address).is_some()
    }

    /// Sibling hashes from the leaf of `address` up to the root.
    ///
    /// A level where the path node was promoted without a sibling contributes nothing.
    pub fn proof_for(&self, address: &Address) -> Result<Vec<H256>, TreeError> {
        let index = self
            .index_of(address)
            .ok_or(TreeError::NotInTree(*address))?;

        let mut sibling_hashes = Vec::with_capacity(self.depth());
        let mut current_index = index;

        for level in &self.nodes[..self.depth()] {
            if let Some(sibling) = level.get(current_index ^ 1) {
                sibling_hashes.push(*sibling);
            }
            current_index /= 2;
        }

        Ok(sibling_hashes)
    }

    pub fn generate_proof(&self, address: &Address) -> Result<MerkleProof, TreeError> {
        let sibling_hashes = self.proof_for(address)?;
        let index = self
            .index_of(address)
            .ok_or(TreeError::NotInTree(*address))?;

        Ok(MerkleProof {
            root: self.root,
            address: *address,
            leaf: self.leaves()[index],
            sibling_hashes,
        })
    }

    /// Checks the proof against this tree's root.
    pub fn verify_proof(&self, proof: &MerkleProof) -> bool {
        proof.root == self.root && verify_merkle_proof(proof)
    }

    /// Proof of every allow-listed address, keyed by address.
    pub fn proof_table(&self) -> Result<BTreeMap<Address, Vec<H256>>, TreeError> {
        self.entries
            .iter()
            .map(|entry| {
                let address = entry.address();
                self.proof_for(&address).map(|proof| (address, proof))
            })
            .collect()
    }
}
