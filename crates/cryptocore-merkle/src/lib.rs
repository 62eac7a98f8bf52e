//! Merkle commitments over ordered content identities.
//!
//! [`MerkleTree::build`] folds a leaf sequence into a single root by hashing
//! adjacent pairs level by level. A level with an odd count pairs its last
//! element with itself.

mod tree;

pub use tree::{pair_hash, pair_hash_with, MerkleTree, EMPTY_ROOT};
