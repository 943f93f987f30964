//! Hash algorithm selection and digest computation for treesum.
//!
//! This crate provides the validated [`HashAlgorithm`] identifier, the
//! streaming [`StreamHasher`](hasher::StreamHasher), the finished
//! [`Digest`] value, and hex encoding/decoding.

mod error;
pub mod hex;
mod algorithm;
mod digest_value;
pub mod hasher;

pub use algorithm::HashAlgorithm;
pub use digest_value::Digest;
pub use error::HashError;
