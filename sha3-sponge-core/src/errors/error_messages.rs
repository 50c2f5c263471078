use crate::prelude::String;
use core::fmt::Debug;

use displaydoc::Display;

pub struct WrappedError<T: Debug>(pub T);

#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum Errors {
    //////////
    // Generic
    //////////
    /// Size of vec/array does not match (expected: {0}, found: {1})
    LengthMismatch(usize, usize),

    //////////
    // Sponge
    //////////
    /// Sponge is not committed, outer position is not 0 (found: {0})
    SpongeNotCommitted(usize),

    //////////
    // SHA-3
    //////////
    /// Digest size is not supported (expected: 224 | 256 | 384 | 512 bits, found: {0})
    UnsupportedDigestSize(usize),
    /// Digest algorithm name is not recognised (found: {0})
    UnknownDigestName(String),

    //////////
    // Tools
    //////////
    /// Failed to read input {0}
    InputReadFailure(String),
}

#[cfg(feature = "std")]
impl std::error::Error for Errors {}
