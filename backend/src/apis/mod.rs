pub mod campaign;
pub mod claim_service;

pub use campaign::{Campaign, ClaimPackage};
pub use claim_service::{ClaimRequest, ClaimService};
