use cryptocore_hash::hasher::{digest_parts, Hasher};
use cryptocore_hash::{ContentId, HashAlgorithm};
use digest::Digest;
use tracing::{debug, trace};

/// Root of a tree built from no leaves.
pub const EMPTY_ROOT: &str = "";

/// An immutable binary Merkle tree over hex digest strings.
///
/// Leaves are opaque: they are hashed as the UTF-8 bytes of the strings
/// given, never decoded or validated. The tree owns copies of its leaves, so
/// the caller's sequence can change afterwards without affecting it.
///
/// For a non-empty tree:
/// - `levels()[0] == leaves()`
/// - each level has `ceil(previous / 2)` entries
/// - the last level holds exactly one entry, equal to `root()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MerkleTree {
    root: String,
    leaves: Vec<String>,
    levels: Vec<Vec<String>>,
}

impl MerkleTree {
    /// Build a tree with SHA-256 pair hashing.
    pub fn build<I>(leaves: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::build_with_algorithm(HashAlgorithm::Sha256, leaves)
    }

    /// Build a tree hashing pairs with the runtime-selected `algo`.
    pub fn build_with_algorithm<I>(algo: HashAlgorithm, leaves: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::fold(collect(leaves), |left, right| {
            let mut h = Hasher::new(algo);
            h.update(left.as_bytes());
            h.update(right.as_bytes());
            h.finalize().to_hex()
        })
    }

    /// Build a tree hashing pairs with the hash function `D`.
    pub fn build_with<D, I>(leaves: I) -> Self
    where
        D: Digest,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::fold(collect(leaves), pair_hash_with::<D>)
    }

    /// Build a SHA-256 tree whose leaves are the hex forms of `ids`.
    pub fn from_ids(ids: &[ContentId]) -> Self {
        Self::build(ids.iter().map(ContentId::to_hex))
    }

    fn fold(leaves: Vec<String>, pair: impl Fn(&str, &str) -> String) -> Self {
        if leaves.is_empty() {
            debug!("built empty merkle tree");
            return Self {
                root: EMPTY_ROOT.to_string(),
                leaves,
                levels: Vec::new(),
            };
        }

        let mut levels = vec![leaves.clone()];
        loop {
            let level = &levels[levels.len() - 1];
            if level.len() == 1 {
                break;
            }
            let next: Vec<String> = level
                .chunks(2)
                .map(|chunk| match chunk {
                    [left, right] => pair(left.as_str(), right.as_str()),
                    // Odd count: the trailing node is paired with itself.
                    [last] => pair(last.as_str(), last.as_str()),
                    _ => unreachable!("chunks(2) yields one or two nodes"),
                })
                .collect();
            trace!(level = levels.len(), width = next.len(), "folded merkle level");
            levels.push(next);
        }

        let root = levels[levels.len() - 1][0].clone();
        debug!(leaves = leaves.len(), depth = levels.len(), %root, "built merkle tree");
        Self {
            root,
            leaves,
            levels,
        }
    }

    /// The root digest, or [`EMPTY_ROOT`] for a tree with no leaves.
    pub fn root(&self) -> &str {
        &self.root
    }

    /// The leaves exactly as given.
    pub fn leaves(&self) -> &[String] {
        &self.leaves
    }

    /// Every level from the leaves (index 0) up to the root level.
    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    /// Number of levels, counting the leaf level. Zero for an empty tree.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }
}

fn collect<I>(leaves: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    leaves
        .into_iter()
        .map(|leaf| leaf.as_ref().to_owned())
        .collect()
}

/// `SHA-256(left || right)` over the UTF-8 bytes of both digests, as hex.
pub fn pair_hash(left: &str, right: &str) -> String {
    pair_hash_with::<sha2::Sha256>(left, right)
}

/// `D(left || right)` over the UTF-8 bytes of both digests, as hex.
pub fn pair_hash_with<D: Digest>(left: &str, right: &str) -> String {
    digest_parts::<D>(&[left.as_bytes(), right.as_bytes()]).to_hex()
}
