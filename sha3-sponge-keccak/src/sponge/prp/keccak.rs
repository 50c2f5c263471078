use sha3_sponge_core::sponge::prp::PRP;

#[cfg(feature = "zeroize")]
use sha3_sponge_core::prelude::zeroize::Zeroize;

/// Number of rounds of `Keccak-f[1600]`.
pub const ROUNDS: usize = 24;

/// Number of 64-bit lanes in the state, lane `(x, y)` lives at index `x + 5 * y`.
pub const LANES: usize = 25;

/// Iota round constants, XORed into lane `(0, 0)`.
pub const ROUND_CONSTANTS: [u64; ROUNDS] = [
    0x0000000000000001,
    0x0000000000008082,
    0x800000000000808a,
    0x8000000080008000,
    0x000000000000808b,
    0x0000000080000001,
    0x8000000080008081,
    0x8000000000008009,
    0x000000000000008a,
    0x0000000000000088,
    0x0000000080008009,
    0x000000008000000a,
    0x000000008000808b,
    0x800000000000008b,
    0x8000000000008089,
    0x8000000000008003,
    0x8000000000008002,
    0x8000000000000080,
    0x000000000000800a,
    0x800000008000000a,
    0x8000000080008081,
    0x8000000000008080,
    0x0000000080000001,
    0x8000000080008008,
];

/// Rho rotation offsets, `RHO_OFFSETS[y][x]` applies to lane `(x, y)`.
pub const RHO_OFFSETS: [[u32; 5]; 5] = [
    [0, 1, 62, 28, 27],
    [36, 44, 6, 55, 20],
    [3, 10, 43, 25, 39],
    [41, 45, 15, 21, 8],
    [18, 2, 61, 56, 14],
];

/// Apply the 24 rounds of `Keccak-f[1600]` in place.
#[allow(clippy::needless_range_loop)]
pub fn keccak_f1600(a: &mut [u64; LANES]) {
    let mut c = [0_u64; 5];
    let mut b = [0_u64; LANES];

    for rc in ROUND_CONSTANTS.iter() {
        // theta
        for x in 0..5 {
            c[x] = a[x] ^ a[x + 5] ^ a[x + 10] ^ a[x + 15] ^ a[x + 20];
        }
        for x in 0..5 {
            let d = c[(x + 4) % 5] ^ c[(x + 1) % 5].rotate_left(1);
            for y in 0..5 {
                a[x + 5 * y] ^= d;
            }
        }

        // rho and pi: (x, y) -> (y, 2x + 3y)
        for y in 0..5 {
            for x in 0..5 {
                b[y + 5 * ((2 * x + 3 * y) % 5)] = a[x + 5 * y].rotate_left(RHO_OFFSETS[y][x]);
            }
        }

        // chi
        for y in 0..5 {
            let row = &b[5 * y..5 * y + 5];
            for x in 0..5 {
                a[x + 5 * y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
            }
        }

        // iota
        a[0] ^= *rc;
    }
}

/// A pseudo-random permutation implementing `Keccak-f[1600]`.
///
/// Bytes are mapped onto lanes little-endian: byte `i` is byte `i % 8` of lane `i / 8`,
/// independent of the host byte order.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct KeccakF1600 {
    /// Inner state for transformation
    state: [u64; LANES],
}

impl KeccakF1600 {
    pub fn from_lanes(state: [u64; LANES]) -> Self {
        Self { state }
    }

    pub fn lanes(&self) -> &[u64; LANES] {
        &self.state
    }

    /// Use `Keccak-f[1600]` on inner state
    fn permutation(&mut self) {
        keccak_f1600(&mut self.state);
    }

    fn xor_byte(&mut self, pos: usize, byte: u8) {
        self.state[pos / 8] ^= u64::from(byte) << (8 * (pos % 8));
    }
}

impl PRP for KeccakF1600 {
    const STATE_SIZE: usize = 8 * LANES;

    fn transform(&mut self) {
        self.permutation();
    }

    fn xor_bytes(&mut self, offset: usize, data: &[u8]) {
        let mut pos = offset;
        let mut data = data;

        while !data.is_empty() && pos % 8 != 0 {
            self.xor_byte(pos, data[0]);
            data = &data[1..];
            pos += 1;
        }

        let mut words = data.chunks_exact(8);
        for word in &mut words {
            let mut w = [0_u8; 8];
            w.copy_from_slice(word);
            self.state[pos / 8] ^= u64::from_le_bytes(w);
            pos += 8;
        }

        for byte in words.remainder() {
            self.xor_byte(pos, *byte);
            pos += 1;
        }
    }

    fn copy_bytes(&self, offset: usize, out: &mut [u8]) {
        for (pos, o) in (offset..).zip(out.iter_mut()) {
            *o = (self.state[pos / 8] >> (8 * (pos % 8))) as u8;
        }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for KeccakF1600 {
    fn zeroize(&mut self) {
        self.state.zeroize();
    }
}
