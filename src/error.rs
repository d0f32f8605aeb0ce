use ethers::types::Address;
use thiserror::Error;

use crate::verifier::LedgerError;

/// Errors raised while building an allow-list tree or generating proofs from it.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("The allow-list is empty")]
    EmptyAllowlist,

    #[error("Address {0:?} appears more than once in the allow-list")]
    DuplicateAddress(Address),

    #[error("Address {0:?} is not part of this tree")]
    NotInTree(Address),

    #[error("Invalid address `{0}`")]
    InvalidAddress(String),

    #[error("Invalid hash `{0}`")]
    InvalidHash(String),

    #[error("Invalid tree dump: {0}")]
    InvalidDump(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by the claim verifier. Every variant is terminal for the call that produced it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimError {
    #[error("Address {0:?} has already claimed")]
    AlreadyClaimed(Address),

    /// Covers a wrong proof, an address outside the allow-list and a stale root alike.
    #[error("Invalid proof")]
    InvalidProof,

    #[error("Account {0:?} is not allowed to rotate the root")]
    Unauthorized(Address),

    #[error("Ledger refused the credit: {0}")]
    Ledger(#[from] LedgerError),
}
