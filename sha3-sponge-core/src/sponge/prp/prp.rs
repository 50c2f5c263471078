/// Pseudo-random permutation.
///
/// Actually, it may be non-bijective as the inverse transform is not used in sponge construction.
/// The state is addressed as a flat byte string; implementations decide how bytes map onto
/// their internal words.
#[allow(clippy::upper_case_acronyms)]
pub trait PRP {
    /// Size of the full state in bytes.
    /// Rate and capacity of a sponge are carved out of it at run time.
    const STATE_SIZE: usize;

    /// Transform full state.
    fn transform(&mut self);

    /// Inject `data` into the state, XORing it in starting at byte `offset`.
    fn xor_bytes(&mut self, offset: usize, data: &[u8]);

    /// Eject state bytes starting at byte `offset` into `out`.
    fn copy_bytes(&self, offset: usize, out: &mut [u8]);
}
