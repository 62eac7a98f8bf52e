//! Deterministic content identities for the cryptocore workspace.
//!
//! This crate provides the [`ContentId`] digest type, the streaming
//! [`Hasher`](hasher::Hasher), and the artifact identity function
//! [`compute_identity`], which maps an artifact's content and metadata bytes
//! to a fixed-length digest.

mod algorithm;
mod artifact;
mod error;
mod id;
mod metadata;
pub mod hasher;

pub use algorithm::HashAlgorithm;
pub use artifact::{compute_identity, compute_identity_with, ArtifactHasher, Framing};
pub use error::HashError;
pub use id::ContentId;
pub use metadata::canonical_metadata;
