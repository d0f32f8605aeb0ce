mod ledger;
mod tests;

use std::collections::HashSet;

use ethers::types::{Address, H256, U256};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::AirdropConfig;
use crate::error::ClaimError;
use crate::merkle_tree::compute_root;

pub use ledger::{InMemoryLedger, Ledger, LedgerError};

/// Lifecycle of one address. `Claimed` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    Unclaimed,
    Claimed,
}

/// Returned for every accepted claim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimReceipt {
    pub claimant: Address,
    pub amount: U256,
    /// The root the proof was accepted against.
    pub root: H256,
}

#[derive(Debug)]
struct ClaimState {
    root: H256,
    claimed: HashSet<Address>,
}

/// Holds the published root and the claim record, and credits the ledger for accepted claims.
///
/// The claim record outlives root rotations: an address that claimed under an earlier root
/// stays claimed.
pub struct ClaimVerifier<L: Ledger> {
    authority: Address,
    claim_amount: U256,
    state: Mutex<ClaimState>,
    ledger: L,
}

impl<L: Ledger> ClaimVerifier<L> {
    pub fn new(config: &AirdropConfig, root: H256, ledger: L) -> Self {
        ClaimVerifier {
            authority: config.authority,
            claim_amount: config.claim_amount,
            state: Mutex::new(ClaimState {
                root,
                claimed: HashSet::new(),
            }),
            ledger,
        }
    }

    pub fn root(&self) -> H256 {
        self.state.lock().root
    }

    pub fn authority(&self) -> Address {
        self.authority
    }

    pub fn claim_amount(&self) -> U256 {
        self.claim_amount
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn status(&self, address: &Address) -> ClaimStatus {
        if self.has_claimed(address) {
            ClaimStatus::Claimed
        } else {
            ClaimStatus::Unclaimed
        }
    }

    pub fn has_claimed(&self, address: &Address) -> bool {
        self.state.lock().claimed.contains(address)
    }

    pub fn claimed_count(&self) -> usize {
        self.state.lock().claimed.len()
    }

    /// Verifies `proof` for `claimant` against the current root, then credits the ledger and
    /// records the claim as one unit.
    ///
    /// The claim record is checked before any hashing. The candidate root is computed without
    /// holding the lock, and the final check, credit and insertion all happen under it, so at
    /// most one call per address can succeed. Rejections leave no state behind.
    pub fn verify_and_claim(
        &self,
        claimant: Address,
        proof: &[H256],
    ) -> Result<ClaimReceipt, ClaimError> {
        if self.has_claimed(&claimant) {
            debug!(?claimant, "claim rejected: already claimed");
            return Err(ClaimError::AlreadyClaimed(claimant));
        }

        let candidate_root = compute_root(&claimant, proof);

        let mut state = self.state.lock();
        if state.claimed.contains(&claimant) {
            debug!(?claimant, "claim rejected: already claimed");
            return Err(ClaimError::AlreadyClaimed(claimant));
        }
        if candidate_root != state.root {
            debug!(?claimant, proof_len = proof.len(), "claim rejected: invalid proof");
            return Err(ClaimError::InvalidProof);
        }

        if let Err(error) = self.ledger.credit(claimant, self.claim_amount) {
            debug!(?claimant, %error, "claim rejected: ledger refused the credit");
            return Err(error.into());
        }
        state.claimed.insert(claimant);

        info!(?claimant, amount = %self.claim_amount, root = ?state.root, "claim accepted");

        Ok(ClaimReceipt {
            claimant,
            amount: self.claim_amount,
            root: state.root,
        })
    }

    /// Replaces the published root and returns the previous one. Only the authority may call it.
    /// The claim record is left untouched.
    pub fn rotate_root(&self, new_root: H256, caller: Address) -> Result<H256, ClaimError> {
        if caller != self.authority {
            debug!(?caller, "root rotation rejected: unauthorized");
            return Err(ClaimError::Unauthorized(caller));
        }

        let mut state = self.state.lock();
        let previous_root = std::mem::replace(&mut state.root, new_root);

        info!(?previous_root, ?new_root, "root rotated");
        Ok(previous_root)
    }
}
