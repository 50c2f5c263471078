use super::{
    prp::PRP,
    spongos::*,
};
use crate::{
    prelude::Vec,
    Errors,
};

/// Identity permutation over 16 bytes that only counts its calls,
/// so that pad and cursor placement stay observable.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
struct TestF16 {
    state: [u8; 16],
    transforms: usize,
}

impl PRP for TestF16 {
    const STATE_SIZE: usize = 16;

    fn transform(&mut self) {
        self.transforms += 1;
    }

    fn xor_bytes(&mut self, offset: usize, data: &[u8]) {
        for (s, x) in self.state[offset..].iter_mut().zip(data.iter()) {
            *s ^= *x;
        }
    }

    fn copy_bytes(&self, offset: usize, out: &mut [u8]) {
        let n = out.len();
        out.copy_from_slice(&self.state[offset..offset + n]);
    }
}

/// Mixing permutation, makes the state depend on block order.
#[derive(Default, Clone, PartialEq, Eq, Debug)]
struct TestF16Mix([u8; 16]);

impl PRP for TestF16Mix {
    const STATE_SIZE: usize = 16;

    fn transform(&mut self) {
        let s = &mut self.0;
        s[0] = s[0].wrapping_add(1);
        s.rotate_left(3);
        for (i, x) in s.iter_mut().enumerate() {
            *x ^= i as u8;
        }
    }

    fn xor_bytes(&mut self, offset: usize, data: &[u8]) {
        for (s, x) in self.0[offset..].iter_mut().zip(data.iter()) {
            *s ^= *x;
        }
    }

    fn copy_bytes(&self, offset: usize, out: &mut [u8]) {
        let n = out.len();
        out.copy_from_slice(&self.0[offset..offset + n]);
    }
}

const RATE: usize = 10;

fn data(n: usize) -> Vec<u8> {
    (0..n).map(|i| (i * 7 + 1) as u8).collect()
}

#[test]
fn absorb_transforms_on_rate_boundaries() {
    let mut s = Sponge::<TestF16>::init(RATE);
    s.absorb(&data(25));
    assert_eq!(2, s.state().transforms);
    assert_eq!(5, s.pos());

    s.absorb(&data(5));
    assert_eq!(3, s.state().transforms);
    assert!(s.is_committed());
}

#[test]
fn absorb_empty_is_noop() {
    let mut s = Sponge::<TestF16Mix>::init(RATE);
    let fresh = s.clone();
    s.absorb(&[0_u8; 0]);
    assert!(s == fresh);
}

#[test]
fn chunked_absorb_matches_single_call() {
    let x = data(4 * RATE + 3);
    let mut whole = Sponge::<TestF16Mix>::init(RATE);
    whole.absorb(&x);

    for chunk in 1..=2 * RATE + 1 {
        let mut s = Sponge::<TestF16Mix>::init(RATE);
        for c in x.chunks(chunk) {
            s.absorb(c);
        }
        assert!(s == whole, "chunk size {}", chunk);
    }
}

#[test]
fn absorb_block_matches_absorb() {
    let x = data(2 * RATE);
    let mut a = Sponge::<TestF16Mix>::init(RATE);
    a.absorb(&x);
    let mut b = Sponge::<TestF16Mix>::init(RATE);
    for block in x.chunks(RATE) {
        b.absorb_block(block).unwrap();
    }
    assert!(a == b);
}

#[test]
fn absorb_block_requires_boundary() {
    let mut s = Sponge::<TestF16>::init(RATE);
    s.absorb(&[1_u8]);
    let e = s.absorb_block(&data(RATE)).unwrap_err();
    assert_eq!(Some(&Errors::SpongeNotCommitted(1)), e.downcast_ref::<Errors>());
}

#[test]
fn absorb_block_requires_full_block() {
    let mut s = Sponge::<TestF16>::init(RATE);
    let e = s.absorb_block(&data(RATE - 1)).unwrap_err();
    assert_eq!(Some(&Errors::LengthMismatch(RATE, RATE - 1)), e.downcast_ref::<Errors>());
    assert_eq!(0, s.state().transforms);
}

#[test]
fn pad_on_empty_window() {
    let mut s = Sponge::<TestF16>::init(RATE);
    s.pad(SHA3_DOMAIN);
    assert_eq!(1, s.state().transforms);
    assert_eq!(0x06, s.state().state[0]);
    assert_eq!(&[0; 8], &s.state().state[1..RATE - 1]);
    assert_eq!(0x80, s.state().state[RATE - 1]);
    assert_eq!(&[0; 6], &s.state().state[RATE..]);
}

#[test]
fn pad_after_full_block_is_a_full_block() {
    let mut s = Sponge::<TestF16>::init(RATE);
    s.absorb(&[0_u8; RATE]);
    assert_eq!(1, s.state().transforms);
    s.pad(SHA3_DOMAIN);
    assert_eq!(2, s.state().transforms);
    assert_eq!(0x06, s.state().state[0]);
    assert_eq!(0x80, s.state().state[RATE - 1]);
}

#[test]
fn pad_single_byte_folds_into_0x86() {
    let mut s = Sponge::<TestF16>::init(RATE);
    s.absorb(&[0_u8; RATE - 1]);
    assert_eq!(RATE - 1, s.pos());
    s.pad(SHA3_DOMAIN);
    assert_eq!(1, s.state().transforms);
    assert_eq!(0x86, s.state().state[RATE - 1]);
    assert!(s.is_committed());
}

#[test]
fn squeeze_crosses_block_boundary() {
    let mut s = Sponge::<TestF16>::init(RATE);
    s.absorb(&data(RATE));
    let y = s.squeeze_n(RATE + 5);
    assert_eq!(&data(RATE)[..], &y[..RATE]);
    assert_eq!(&data(5)[..], &y[RATE..]);
    assert_eq!(2, s.state().transforms);
    assert_eq!(5, s.pos());

    let z: [u8; 3] = s.squeeze();
    assert_eq!(&data(8)[5..], &z[..]);
}

#[test]
fn reset_zeroes_state_keeps_rate() {
    let mut s = Sponge::<TestF16Mix>::init(RATE);
    s.absorb(&data(13));
    s.reset();
    assert!(s == Sponge::init(RATE));
    assert_eq!(RATE, s.rate());
}

#[test]
fn debug_shows_cursor_split() {
    let mut s = Sponge::<TestF16>::init(4);
    s.absorb(&[0xab_u8]);
    assert_eq!("[ab:000000|000000000000000000000000]", format!("{:?}", s));
}

#[test]
#[should_panic]
fn rate_must_leave_capacity() {
    Sponge::<TestF16>::init(16);
}
