use std::error::Error;
use std::path::Path;

use airdrop_merkle::{AirdropConfig, AllowlistTree, ClaimVerifier, Ledger, TreeDump, TreeError};
use ethers::types::{Address, H256, U256};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{load_from_file, save_to_file};

/// Everything a claimant needs to submit a claim, delivered to them out of band.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimPackage {
    pub root: H256,
    pub claimant: Address,
    pub amount: U256,
    pub proof: Vec<H256>,
}

/// One airdrop: the configuration plus the tree built from its allow-list.
pub struct Campaign {
    config: AirdropConfig,
    tree: AllowlistTree,
}

impl Campaign {
    pub fn new(config: AirdropConfig, addresses: &[Address]) -> Result<Self, TreeError> {
        Ok(Campaign {
            config,
            tree: AllowlistTree::new(addresses)?,
        })
    }

    pub fn from_csv<P: AsRef<Path>>(
        config: AirdropConfig,
        allowlist_csv_path: P,
    ) -> Result<Self, TreeError> {
        Ok(Campaign {
            config,
            tree: AllowlistTree::from_csv(allowlist_csv_path)?,
        })
    }

    pub fn from_dump(config: AirdropConfig, dump: TreeDump) -> Result<Self, TreeError> {
        Ok(Campaign {
            config,
            tree: AllowlistTree::load(dump)?,
        })
    }

    /// Loads the JSON configuration and builds the tree from the CSV allow-list.
    pub fn from_files<P: AsRef<Path>, Q: AsRef<Path>>(
        config_path: P,
        allowlist_csv_path: Q,
    ) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let config: AirdropConfig = load_from_file(config_path)?;
        Ok(Self::from_csv(config, allowlist_csv_path)?)
    }

    pub fn config(&self) -> &AirdropConfig {
        &self.config
    }

    pub fn tree(&self) -> &AllowlistTree {
        &self.tree
    }

    pub fn root(&self) -> H256 {
        self.tree.root()
    }

    /// Deploys a verifier holding this campaign's root, owned by the configured authority.
    pub fn publish<L: Ledger>(&self, ledger: L) -> ClaimVerifier<L> {
        info!(
            root = ?self.root(),
            authority = ?self.config.authority,
            eligible = self.tree.entries().len(),
            "publishing airdrop root"
        );
        ClaimVerifier::new(&self.config, self.root(), ledger)
    }

    pub fn claim_package(&self, claimant: &Address) -> Result<ClaimPackage, TreeError> {
        Ok(ClaimPackage {
            root: self.root(),
            claimant: *claimant,
            amount: self.config.claim_amount,
            proof: self.tree.proof_for(claimant)?,
        })
    }

    /// Claim packages of every allow-listed address, in leaf order.
    pub fn claim_packages(&self) -> Result<Vec<ClaimPackage>, TreeError> {
        self.tree
            .entries()
            .iter()
            .map(|entry| self.claim_package(&entry.address()))
            .collect()
    }

    pub fn export_claim_packages<P: AsRef<Path>>(
        &self,
        path: P,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        save_to_file(path, &self.claim_packages()?)
    }

    pub fn export_tree<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error + Send + Sync>> {
        save_to_file(path, &self.tree.dump())
    }
}
