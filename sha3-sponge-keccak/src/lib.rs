#![no_std]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

#[cfg(feature = "std")]
#[macro_use]
extern crate std;

/// SHA-3 sessions and fixed-size hashers.
pub mod sha3;
/// `Keccak-f[1600]` permutation.
pub mod sponge;

pub use crate::sha3::{
    sha3_224,
    sha3_256,
    sha3_384,
    sha3_512,
    DigestSize,
    Sha3,
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
};
