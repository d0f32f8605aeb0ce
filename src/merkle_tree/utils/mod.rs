mod build_tree;
mod csv_parser;
mod hash;
mod index_of;
mod operation_helpers;
mod proof_verification;

pub use build_tree::{build_merkle_tree_from_leaves, build_sorted_entries};
pub use csv_parser::parse_csv_to_addresses;
pub use hash::{hash_pair, leaf_hash};
pub use index_of::index_of;
pub use operation_helpers::*;
pub use proof_verification::{compute_root, verify_merkle_proof, verify_proof};
