use crate::error::TreeError;
use crate::merkle_tree::utils::hash_pair;
use crate::merkle_tree::Entry;
use ark_std::{end_timer, start_timer};
use ethers::types::{Address, H256};
use itertools::Itertools;
use rayon::prelude::*;

/// Hashes every address into an entry and sorts the entries by leaf hash.
///
/// Sorting makes the tree independent of the order of the allow-list. Two equal leaf hashes can
/// only come from the same address, so duplicates are caught on the sorted sequence.
pub fn build_sorted_entries(addresses: &[Address]) -> Result<Vec<Entry>, TreeError> {
    if addresses.is_empty() {
        return Err(TreeError::EmptyAllowlist);
    }

    let pf_time = start_timer!(|| "compute leaves");
    let mut entries = addresses.par_iter().map(Entry::new).collect::<Vec<_>>();
    end_timer!(pf_time);

    entries.par_sort_unstable_by_key(Entry::leaf_hash);

    if let Some((duplicate, _)) = entries
        .iter()
        .tuple_windows()
        .find(|(current, next)| current.leaf_hash() == next.leaf_hash())
    {
        return Err(TreeError::DuplicateAddress(duplicate.address()));
    }

    Ok(entries)
}

/// Builds every level of the tree on top of the sorted leaves. The last level holds the root.
///
/// Adjacent nodes are paired left to right. When a level has an odd number of nodes the last one
/// is promoted unchanged to the next level.
pub fn build_merkle_tree_from_leaves(leaves: Vec<H256>) -> Vec<Vec<H256>> {
    let mut tree = vec![leaves];

    while let Some(level) = tree.last().filter(|level| level.len() > 1) {
        let pf_time = start_timer!(|| "compute middle level");
        let next_level = build_middle_level(level);
        end_timer!(pf_time);

        tree.push(next_level);
    }

    tree
}

fn build_middle_level(level: &[H256]) -> Vec<H256> {
    level
        .par_chunks(2)
        .map(|pair| match pair.get(1) {
            Some(right) => hash_pair(pair[0], *right),
            None => pair[0],
        })
        .collect()
}
