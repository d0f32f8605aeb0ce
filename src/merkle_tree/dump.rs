use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};

use crate::error::TreeError;
use crate::merkle_tree::params::{LEAF_ENCODING, TREE_DUMP_FORMAT};
use crate::merkle_tree::AllowlistTree;

/// Serializable snapshot of a tree, written by the builder and shipped to whoever hands out proofs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeDump {
    pub format: String,
    pub leaf_encoding: String,
    pub root: H256,
    /// All levels of the tree, leaves first.
    pub nodes: Vec<Vec<H256>>,
    pub values: Vec<DumpValue>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DumpValue {
    pub address: Address,
    pub leaf_index: usize,
}

impl AllowlistTree {
    pub fn dump(&self) -> TreeDump {
        TreeDump {
            format: TREE_DUMP_FORMAT.to_string(),
            leaf_encoding: LEAF_ENCODING.to_string(),
            root: self.root(),
            nodes: self.nodes().to_vec(),
            values: self
                .entries()
                .iter()
                .enumerate()
                .map(|(leaf_index, entry)| DumpValue {
                    address: entry.address(),
                    leaf_index,
                })
                .collect(),
        }
    }

    /// Rebuilds the tree from the dumped addresses and refuses the dump unless every level,
    /// the root and every leaf index match the rebuilt tree.
    pub fn load(dump: TreeDump) -> Result<Self, TreeError> {
        if dump.format != TREE_DUMP_FORMAT {
            return Err(TreeError::InvalidDump(format!(
                "unknown format `{}`",
                dump.format
            )));
        }

        let addresses: Vec<Address> = dump.values.iter().map(|value| value.address).collect();
        let tree = AllowlistTree::new(&addresses)?;

        if tree.root() != dump.root {
            return Err(TreeError::InvalidDump(
                "root does not match the dumped values".to_string(),
            ));
        }
        if tree.nodes() != dump.nodes.as_slice() {
            return Err(TreeError::InvalidDump(
                "nodes do not match the dumped values".to_string(),
            ));
        }
        if let Some(value) = dump
            .values
            .iter()
            .find(|value| tree.index_of(&value.address) != Some(value.leaf_index))
        {
            return Err(TreeError::InvalidDump(format!(
                "wrong leaf index {} for {:?}",
                value.leaf_index, value.address
            )));
        }

        Ok(tree)
    }
}
