//! SHA-3 hashing (FIPS 202) on top of the `Keccak-f[1600]` sponge.
//!
//! [`Sha3`] is a streaming session whose output size is picked at run time.
//! [`Sha3_224`], [`Sha3_256`], [`Sha3_384`] and [`Sha3_512`] fix it at compile time
//! and implement the `digest` traits.

use core::{
    convert::TryFrom,
    fmt,
    str::FromStr,
};

use sha3_sponge_core::{
    err,
    prelude::{
        digest::{
            BlockInput,
            FixedOutputDirty,
            Reset,
            Update,
        },
        generic_array::{
            typenum::{
                U104,
                U136,
                U144,
                U28,
                U32,
                U48,
                U64,
                U72,
            },
            GenericArray,
        },
        hex,
        String,
        ToString,
        Vec,
    },
    sponge::{
        prp::PRP,
        spongos::{
            Sponge,
            SHA3_DOMAIN,
        },
    },
    try_or,
    Error,
    Errors::{
        LengthMismatch,
        UnknownDigestName,
        UnsupportedDigestSize,
    },
    Result,
};

use crate::sponge::prp::keccak::KeccakF1600;

#[cfg(feature = "zeroize")]
use sha3_sponge_core::prelude::zeroize::{
    Zeroize,
    ZeroizeOnDrop,
};

/// Output size of a SHA-3 instance; rate and capacity are derived from it.
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DigestSize {
    Sha3_224,
    Sha3_256,
    Sha3_384,
    Sha3_512,
}

impl DigestSize {
    pub const ALL: [DigestSize; 4] = [
        DigestSize::Sha3_224,
        DigestSize::Sha3_256,
        DigestSize::Sha3_384,
        DigestSize::Sha3_512,
    ];

    /// Only the four standard sizes are accepted, anything else is rejected rather than rounded.
    pub fn from_bits(bits: usize) -> Result<Self> {
        match bits {
            224 => Ok(DigestSize::Sha3_224),
            256 => Ok(DigestSize::Sha3_256),
            384 => Ok(DigestSize::Sha3_384),
            512 => Ok(DigestSize::Sha3_512),
            _ => err!(UnsupportedDigestSize(bits)),
        }
    }

    pub const fn bits(self) -> usize {
        match self {
            DigestSize::Sha3_224 => 224,
            DigestSize::Sha3_256 => 256,
            DigestSize::Sha3_384 => 384,
            DigestSize::Sha3_512 => 512,
        }
    }

    pub const fn output_bytes(self) -> usize {
        self.bits() / 8
    }

    /// Capacity in bytes, twice the output size.
    pub const fn capacity(self) -> usize {
        2 * self.output_bytes()
    }

    /// Bytes absorbed per permutation: `200 - 2 * output_bytes`.
    pub const fn rate(self) -> usize {
        <KeccakF1600 as PRP>::STATE_SIZE - self.capacity()
    }

    pub const fn name(self) -> &'static str {
        match self {
            DigestSize::Sha3_224 => "SHA3-224",
            DigestSize::Sha3_256 => "SHA3-256",
            DigestSize::Sha3_384 => "SHA3-384",
            DigestSize::Sha3_512 => "SHA3-512",
        }
    }
}

impl TryFrom<usize> for DigestSize {
    type Error = Error;

    fn try_from(bits: usize) -> Result<Self> {
        DigestSize::from_bits(bits)
    }
}

/// Accepts `"256"`, `"sha3-256"`, `"SHA3_256"` and the like.
impl FromStr for DigestSize {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        let bits = lower
            .strip_prefix("sha3-")
            .or_else(|| lower.strip_prefix("sha3_"))
            .unwrap_or(lower.as_str());
        match bits.parse::<usize>() {
            Ok(bits) => DigestSize::from_bits(bits),
            Err(_) => err!(UnknownDigestName(s.to_string())),
        }
    }
}

impl fmt::Display for DigestSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Streaming SHA-3 session.
///
/// `finish` leaves the session zeroed under the same digest size, so one object
/// can hash any number of messages in a row. Cloning forks a session mid-message.
/// With the `zeroize` feature the state is also wiped on drop.
#[derive(Clone, PartialEq, Eq)]
pub struct Sha3 {
    sponge: Sponge<KeccakF1600>,
    size: DigestSize,
}

impl Sha3 {
    /// Create a session producing `bits` of output: 224, 256, 384 or 512.
    pub fn new(bits: usize) -> Result<Self> {
        Ok(Self::with_size(DigestSize::from_bits(bits)?))
    }

    pub fn with_size(size: DigestSize) -> Self {
        Self {
            sponge: Sponge::init(size.rate()),
            size,
        }
    }

    /// Hash `data` in one go.
    pub fn digest<T>(bits: usize, data: T) -> Result<Vec<u8>>
    where
        T: AsRef<[u8]>,
    {
        let mut s = Self::new(bits)?;
        s.update(data);
        Ok(s.finish())
    }

    pub fn digest_size(&self) -> DigestSize {
        self.size
    }

    pub fn output_bytes(&self) -> usize {
        self.size.output_bytes()
    }

    pub fn rate(&self) -> usize {
        self.sponge.rate()
    }

    /// Feed more message bytes. Empty input is a no-op.
    pub fn update<T>(&mut self, data: T)
    where
        T: AsRef<[u8]>,
    {
        self.sponge.absorb(data);
    }

    pub fn finish(&mut self) -> Vec<u8> {
        let mut digest = vec![0; self.output_bytes()];
        self.finalize(&mut digest);
        digest
    }

    /// Finish into a caller buffer of exactly `output_bytes` bytes.
    /// On length mismatch the session is left untouched.
    pub fn finish_into(&mut self, out: &mut [u8]) -> Result<()> {
        try_or!(
            out.len() == self.output_bytes(),
            LengthMismatch(self.output_bytes(), out.len())
        )?;
        self.finalize(out);
        Ok(())
    }

    pub fn finish_hex(&mut self) -> String {
        hex::encode(self.finish())
    }

    /// Zero the state and drop any absorbed input; the digest size is kept.
    pub fn reset(&mut self) {
        self.sponge.reset();
    }

    pub(crate) fn finalize(&mut self, out: &mut [u8]) {
        self.sponge.pad(SHA3_DOMAIN);
        self.sponge.squeeze_mut(out);
        self.sponge.reset();
    }
}

impl fmt::Debug for Sha3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:?}", self.size, self.sponge)
    }
}

#[cfg(feature = "zeroize")]
impl Drop for Sha3 {
    fn drop(&mut self) {
        self.sponge.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl ZeroizeOnDrop for Sha3 {}

macro_rules! sha3_impl {
    ($name:ident, $func:ident, $size:expr, $output:ty, $block:ty, $doc:literal) => {
        #[doc = $doc]
        #[allow(non_camel_case_types)]
        #[derive(Clone, PartialEq, Eq)]
        pub struct $name(Sha3);

        impl Default for $name {
            fn default() -> Self {
                Self(Sha3::with_size($size))
            }
        }

        impl BlockInput for $name {
            type BlockSize = $block;
        }

        impl Update for $name {
            fn update(&mut self, data: impl AsRef<[u8]>) {
                self.0.update(data);
            }
        }

        impl FixedOutputDirty for $name {
            type OutputSize = $output;

            fn finalize_into_dirty(&mut self, out: &mut GenericArray<u8, Self::OutputSize>) {
                self.0.finalize(out);
            }
        }

        impl Reset for $name {
            fn reset(&mut self) {
                self.0.reset();
            }
        }

        #[cfg(feature = "zeroize")]
        impl ZeroizeOnDrop for $name {}

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.0, f)
            }
        }

        #[doc = $doc]
        pub fn $func<T>(data: T) -> GenericArray<u8, $output>
        where
            T: AsRef<[u8]>,
        {
            let mut s = Sha3::with_size($size);
            let mut digest = GenericArray::<u8, $output>::default();
            s.update(data);
            s.finalize(&mut digest);
            digest
        }
    };
}

sha3_impl!(Sha3_224, sha3_224, DigestSize::Sha3_224, U28, U144, "SHA3-224 hash.");
sha3_impl!(Sha3_256, sha3_256, DigestSize::Sha3_256, U32, U136, "SHA3-256 hash.");
sha3_impl!(Sha3_384, sha3_384, DigestSize::Sha3_384, U48, U104, "SHA3-384 hash.");
sha3_impl!(Sha3_512, sha3_512, DigestSize::Sha3_512, U64, U72, "SHA3-512 hash.");
