// Format tag written into every tree dump. Dumps with any other tag are refused on load.
pub const TREE_DUMP_FORMAT: &str = "airdrop-sorted-pair-v1";
// Human readable description of the leaf encoding, recorded in tree dumps
pub const LEAF_ENCODING: &str = "keccak256(keccak256(abi.encode(address)))";
// Width in bytes of every leaf, internal node and root
pub const HASH_BYTES: usize = 32;
