use core::fmt;

use super::prp::PRP;
use crate::{
    panic_if_not,
    prelude::{
        hex,
        Vec,
    },
    try_or,
    Errors::{
        LengthMismatch,
        SpongeNotCommitted,
    },
    Result,
};

#[cfg(feature = "zeroize")]
use crate::prelude::zeroize::Zeroize;

/// Domain separation suffix of SHA-3 (bits `01`) merged with the first padding bit.
pub const SHA3_DOMAIN: u8 = 0x06;

/// Final padding bit, always lands in the last byte of the rate window.
const PAD_FINAL: u8 = 0x80;

#[derive(Clone, PartialEq, Eq)]
pub struct Sponge<F> {
    /// Sponge transform together with its internal state.
    s: F,

    /// Number of bytes absorbed or squeezed between two transforms.
    rate: usize,

    /// Current position (offset in bytes) within the outer state.
    pos: usize,
}

impl<F> Sponge<F>
where
    F: PRP + Default,
{
    /// Create a Sponge object with `rate` bytes of outer state, initialize state with zero bytes.
    pub fn init(rate: usize) -> Self {
        Self::init_with_state(F::default(), rate)
    }

    /// Zero the state and rewind the cursor. The rate is kept.
    pub fn reset(&mut self) {
        self.s = F::default();
        self.pos = 0;
    }
}

impl<F: PRP> Sponge<F> {
    /// Create a Sponge object with an explicit state.
    pub fn init_with_state(s: F, rate: usize) -> Self {
        panic_if_not!(0 < rate && rate < F::STATE_SIZE);
        Self { s, rate, pos: 0 }
    }

    pub fn rate(&self) -> usize {
        self.rate
    }

    /// Bytes processed within the current outer window.
    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn state(&self) -> &F {
        &self.s
    }

    /// Check whether the cursor sits on a block boundary.
    pub fn is_committed(&self) -> bool {
        0 == self.pos
    }

    /// How many of the next `n` bytes still fit into the current outer window.
    fn outer_min(&self, n: usize) -> usize {
        core::cmp::min(n, self.rate - self.pos)
    }

    /// Update Sponge after processing the current piece of data of `n` bytes.
    fn update(&mut self, n: usize) {
        self.pos += n;
        if self.rate == self.pos {
            self.permute_now();
        }
    }

    /// Absorb a byte slice into Sponge object.
    pub fn absorb<T>(&mut self, xr: T)
    where
        T: AsRef<[u8]>,
    {
        let mut x = xr.as_ref();
        while !x.is_empty() {
            let n = self.outer_min(x.len());
            self.s.xor_bytes(self.pos, &x[..n]);
            x = &x[n..];
            self.update(n);
        }
    }

    /// Absorb exactly one full block. The cursor must be on a block boundary.
    pub fn absorb_block(&mut self, block: &[u8]) -> Result<()> {
        try_or!(self.is_committed(), SpongeNotCommitted(self.pos))?;
        try_or!(block.len() == self.rate, LengthMismatch(self.rate, block.len()))?;
        self.s.xor_bytes(0, block);
        self.permute_now();
        Ok(())
    }

    /// Transform the full state regardless of the cursor and rewind it.
    pub fn permute_now(&mut self) {
        self.s.transform();
        self.pos = 0;
    }

    /// Multi-rate padding `domain || 0* || 1` over the remaining `rate - pos` bytes,
    /// followed by the transform closing the window.
    ///
    /// The pad is never empty: with `pos == rate - 1` both ends hit the same byte,
    /// which then receives `domain ^ 0x80`.
    pub fn pad(&mut self, domain: u8) {
        let last = self.rate - 1;
        self.s.xor_bytes(self.pos, &[domain]);
        self.s.xor_bytes(last, &[PAD_FINAL]);
        self.permute_now();
    }

    /// Squeeze a byte slice from Sponge object.
    pub fn squeeze_mut<T>(&mut self, mut yr: T)
    where
        T: AsMut<[u8]>,
    {
        let mut y = yr.as_mut();
        while !y.is_empty() {
            let n = self.outer_min(y.len());
            self.s.copy_bytes(self.pos, &mut y[..n]);
            y = &mut y[n..];
            self.update(n);
        }
    }

    pub fn squeeze<R>(&mut self) -> R
    where
        R: AsMut<[u8]> + Default,
    {
        let mut output = Default::default();
        self.squeeze_mut(&mut output);
        output
    }

    /// Squeeze vector, length is known at runtime.
    pub fn squeeze_n(&mut self, n: usize) -> Vec<u8> {
        let mut v = vec![0; n];
        self.squeeze_mut(&mut v);
        v
    }
}

#[cfg(feature = "zeroize")]
impl<F: PRP + Zeroize> Zeroize for Sponge<F> {
    fn zeroize(&mut self) {
        self.s.zeroize();
        self.pos.zeroize();
    }
}

impl<F: PRP> fmt::Debug for Sponge<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut bytes = vec![0_u8; F::STATE_SIZE];
        self.s.copy_bytes(0, &mut bytes);
        write!(
            f,
            "[{}:{}|{}]",
            hex::encode(&bytes[..self.pos]),
            hex::encode(&bytes[self.pos..self.rate]),
            hex::encode(&bytes[self.rate..])
        )
    }
}
