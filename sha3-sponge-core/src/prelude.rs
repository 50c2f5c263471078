#[cfg(not(feature = "std"))]
pub use alloc::{
    string::{
        String,
        ToString,
    },
    vec::Vec,
};

#[cfg(feature = "std")]
pub use std::{
    string::{
        String,
        ToString,
    },
    vec::Vec,
};

// Reexport digest and generic_array and typenum crates here in order to simplify their import in other dependencies.
pub use digest::{
    self,
    generic_array::{
        self,
        typenum,
    },
};

pub use hex;

#[cfg(feature = "zeroize")]
pub use zeroize;
