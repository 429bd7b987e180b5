mod error;
mod hasher;
mod proof;
mod tree;

pub use crate::error::MerkleError;
pub use crate::hasher::{hash_pair, Hasher, Keccak256};
pub use crate::proof::{leaf_for, parse_hash, parse_proof, verify};
pub use crate::tree::MerkleTree;

/// A 32-byte node of a whitelist tree
pub type Hash = [u8; 32];
