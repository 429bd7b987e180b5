use crate::{hash_pair, Hash, Hasher, MerkleError};

/// Leaf committed for a whitelisted address: the hash of its raw bytes.
pub fn leaf_for<H: Hasher>(address: &str) -> Hash {
    H::hash(address.as_bytes())
}

/// Folds `proof` into `leaf` and compares the result with `root`.
pub fn verify<H: Hasher>(leaf: &Hash, proof: &[Hash], root: &Hash) -> bool {
    let computed = proof
        .iter()
        .fold(*leaf, |node, sibling| hash_pair::<H>(&node, sibling));
    computed == *root
}

/// Decodes a hex hash, with or without a `0x` prefix.
pub fn parse_hash(input: &str) -> Result<Hash, MerkleError> {
    let trimmed = input.strip_prefix("0x").unwrap_or(input);
    let bytes = hex::decode(trimmed)?;
    let got = bytes.len();
    bytes
        .try_into()
        .map_err(|_| MerkleError::InvalidLength { got })
}

pub fn parse_proof(proof: &[String]) -> Result<Vec<Hash>, MerkleError> {
    proof.iter().map(|p| parse_hash(p)).collect()
}
