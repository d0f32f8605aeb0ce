//! This crate contains the primitives for running a fixed-amount, allow-listed token airdrop.
//! Eligibility is committed to with a sorted-pair keccak256 Merkle tree, and claims are checked
//! against the published root by a verifier that lets every address claim at most once.

/// Airdrop-wide configuration shared by the tree builder tooling and the verifier.
pub mod config;
/// Error types returned by the tree builder and the claim verifier.
pub mod error;
/// Utilities to build the allow-list Merkle tree and its inclusion proofs. No claim state in here.
pub mod merkle_tree;
/// The claim verifier, holding the published root and the claim record.
pub mod verifier;

pub use config::AirdropConfig;
pub use error::{ClaimError, TreeError};
pub use merkle_tree::{AllowlistTree, Entry, MerkleProof, TreeDump};
pub use verifier::{ClaimReceipt, ClaimStatus, ClaimVerifier, InMemoryLedger, Ledger, LedgerError};
