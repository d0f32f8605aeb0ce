use std::sync::Arc;

use airdrop_merkle::{ClaimError, ClaimReceipt, ClaimVerifier, Ledger};
use ethers::types::{Address, H256};
use serde::{Deserialize, Serialize};

use super::campaign::ClaimPackage;

/// A claim as it arrives from the transport.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRequest {
    pub claimant: Address,
    pub proof: Vec<H256>,
}

impl From<ClaimPackage> for ClaimRequest {
    fn from(package: ClaimPackage) -> Self {
        ClaimRequest {
            claimant: package.claimant,
            proof: package.proof,
        }
    }
}

/// Async front of a shared verifier. Each claim runs on the blocking pool.
pub struct ClaimService<L: Ledger + 'static> {
    verifier: Arc<ClaimVerifier<L>>,
}

impl<L: Ledger + 'static> Clone for ClaimService<L> {
    fn clone(&self) -> Self {
        ClaimService {
            verifier: Arc::clone(&self.verifier),
        }
    }
}

impl<L: Ledger + 'static> ClaimService<L> {
    pub fn new(verifier: ClaimVerifier<L>) -> Self {
        ClaimService {
            verifier: Arc::new(verifier),
        }
    }

    pub fn verifier(&self) -> &ClaimVerifier<L> {
        &self.verifier
    }

    pub async fn submit(&self, request: ClaimRequest) -> Result<ClaimReceipt, ClaimError> {
        let verifier = Arc::clone(&self.verifier);
        let task = tokio::task::spawn_blocking(move || {
            verifier.verify_and_claim(request.claimant, &request.proof)
        });

        match task.await {
            Ok(result) => result,
            Err(error) => std::panic::resume_unwind(error.into_panic()),
        }
    }

    pub fn rotate_root(&self, new_root: H256, caller: Address) -> Result<H256, ClaimError> {
        self.verifier.rotate_root(new_root, caller)
    }
}
