use std::marker::PhantomData;

use crate::{hash_pair, Hash, Hasher, Keccak256};

/// Off-chain whitelist tree builder.
///
/// Leaves are kept in insertion order and pairs are sorted before hashing, so
/// the root depends only on the leaf set layout, never on sibling position.
/// An unpaired last node is promoted to the next layer unchanged. Contracts
/// never build trees; they only run [`crate::verify`] against a published root.
#[derive(Clone, Debug)]
pub struct MerkleTree<H: Hasher = Keccak256> {
    layers: Vec<Vec<Hash>>,
    _hasher: PhantomData<H>,
}

impl<H: Hasher> MerkleTree<H> {
    pub fn new(leaves: Vec<Hash>) -> Self {
        let mut layers = vec![leaves];
        while layers.last().map_or(false, |layer| layer.len() > 1) {
            let next = layers
                .last()
                .map(|layer| {
                    layer
                        .chunks(2)
                        .map(|pair| match pair.get(1) {
                            Some(right) => hash_pair::<H>(&pair[0], right),
                            None => pair[0],
                        })
                        .collect::<Vec<_>>()
                })
                .unwrap_or_default();
            layers.push(next);
        }

        MerkleTree {
            layers,
            _hasher: PhantomData,
        }
    }

    /// Builds a tree whose leaves are the hashes of the given addresses.
    pub fn from_addresses<S: AsRef<str>>(addresses: &[S]) -> Self {
        Self::new(
            addresses
                .iter()
                .map(|a| crate::leaf_for::<H>(a.as_ref()))
                .collect(),
        )
    }

    pub fn leaves(&self) -> &[Hash] {
        &self.layers[0]
    }

    /// None for a tree without leaves
    pub fn root(&self) -> Option<Hash> {
        self.layers.last().and_then(|layer| layer.first().copied())
    }

    pub fn hex_root(&self) -> Option<String> {
        self.root().map(hex::encode)
    }

    /// Sibling path for the leaf at `index`, bottom layer first.
    pub fn proof(&self, mut index: usize) -> Option<Vec<Hash>> {
        if index >= self.leaves().len() {
            return None;
        }

        let mut proof = vec![];
        for layer in &self.layers[..self.layers.len() - 1] {
            let sibling = if index % 2 == 1 { index - 1 } else { index + 1 };
            if let Some(node) = layer.get(sibling) {
                proof.push(*node);
            }
            index /= 2;
        }
        Some(proof)
    }

    pub fn proof_for(&self, leaf: &Hash) -> Option<Vec<Hash>> {
        let index = self.leaves().iter().position(|l| l == leaf)?;
        self.proof(index)
    }

    pub fn hex_proof(&self, index: usize) -> Option<Vec<String>> {
        self.proof(index)
            .map(|proof| proof.into_iter().map(hex::encode).collect())
    }
}
