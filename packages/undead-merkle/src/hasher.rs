use sha3::Digest;

use crate::Hash;

/// Hash function used for both leaves and inner nodes
pub trait Hasher {
    fn hash(data: &[u8]) -> Hash;
}

/// Ethereum-flavoured Keccak-256, the hash the whitelist tooling publishes roots with
#[derive(Clone, Copy, Debug, Default)]
pub struct Keccak256;

impl Hasher for Keccak256 {
    fn hash(data: &[u8]) -> Hash {
        let mut out = [0u8; 32];
        out.copy_from_slice(&sha3::Keccak256::digest(data));
        out
    }
}

/// Combines two nodes, smaller one first, so proofs carry no left/right flags.
pub fn hash_pair<H: Hasher>(a: &Hash, b: &Hash) -> Hash {
    let (left, right) = if a <= b { (a, b) } else { (b, a) };
    let mut buf = [0u8; 64];
    buf[..32].copy_from_slice(left);
    buf[32..].copy_from_slice(right);
    H::hash(&buf)
}
