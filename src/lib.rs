//! SHA-3 hashing over a `Keccak-f[1600]` sponge.
//!
//! ```
//! use sha3_sponge::Sha3;
//!
//! let mut sha3 = Sha3::new(256)?;
//! sha3.update(b"ab");
//! sha3.update(b"c");
//! assert_eq!(
//!     "3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
//!     sha3.finish_hex()
//! );
//! # Ok::<(), sha3_sponge::sha3_sponge_core::Error>(())
//! ```

#![no_std]

/// Core sponge automaton, errors and prelude.
pub use sha3_sponge_core;
/// `Keccak-f[1600]` permutation and SHA-3 sessions.
pub use sha3_sponge_keccak;

pub use sha3_sponge_keccak::{
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
