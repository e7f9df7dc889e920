//! Positional pixel scrambling, keyed by the 16-bit seed carried in the
//! shadow headers. This is a scrambler, not a cipher.
//!
//! Both directions share one PRNG: a 31-bit linear congruential generator
//! with the transition `state = (state * 1103515245 + 12345) & 0x7FFF_FFFF`,
//! sampled through the classic `rand() / (RAND_MAX + 1)` construction. The
//! generator is part of the on-disk contract; distribute and recover must
//! draw identical sequences for a given seed.

/// `RAND_MAX + 1` for the 31-bit generator.
const RAND_MODULUS: f64 = 2_147_483_648.0;

/// Seedable 31-bit LCG threaded explicitly through both scramble directions.
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u16) -> Self {
        Self { state: seed as u32 }
    }

    fn next(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(1_103_515_245)
            .wrapping_add(12_345)
            & 0x7FFF_FFFF;
        self.state
    }

    /// Uniform-ish draw in `[0, max]`.
    pub fn rand_int(&mut self, max: u32) -> u32 {
        let normalized = self.next() as f64 / RAND_MODULUS;
        (normalized * (max as f64 + 1.0)) as u32
    }
}

/// In-place Durstenfeld scramble of the pixel array: for i from the last
/// index down to 2, swap position i with a drawn position in [0, i].
pub fn permute(pixels: &mut [u8], seed: u16) {
    let mut rng = Lcg::new(seed);

    for i in (2..pixels.len()).rev() {
        let j = rng.rand_int(i as u32) as usize;
        pixels.swap(i, j);
    }
}

/// Bit-exact inverse of [`permute`]: replay the same draw sequence, then
/// undo the swaps in ascending order.
pub fn unpermute(pixels: &mut [u8], seed: u16) {
    let mut rng = Lcg::new(seed);
    let mut drawn = vec![0usize; pixels.len()];

    for i in (2..pixels.len()).rev() {
        drawn[i] = rng.rand_int(i as u32) as usize;
    }
    for i in 2..pixels.len() {
        pixels.swap(i, drawn[i]);
    }
}
