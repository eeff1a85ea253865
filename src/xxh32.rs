//! The one hash this crate needs: XXH32 with a seed of zero, used for the
//! frame header checksum, each block's optional checksum, and the frame's
//! optional content checksum.
//!
//! Provided by `twox-hash`, the same crate the reference library links for
//! its `frame` feature - LZ4 does not specify its own hash, it borrows
//! xxHash.

use std::hash::Hasher;

use twox_hash::XxHash32;

/// Computes the XXH32 checksum (seed 0) of `bytes`.
#[inline]
pub(crate) fn xxh32(bytes: &[u8]) -> u32 {
    let mut hasher = XxHash32::with_seed(0);
    hasher.write(bytes);
    hasher.finish() as u32
}
