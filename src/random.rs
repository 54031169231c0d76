//! Random sources for breeding. Every stochastic operation in this crate takes its source
//! explicitly, so a seeded [WyRng] replays a breeding session draw for draw.

use core::cmp::min;
use rand::{Rng, RngCore, SeedableRng};
use std::{
    fs::File,
    io::{self, Read},
};

/// A source of uniform floats. Blanket implemented for every [RngCore].
pub trait Random {
    /// A uniform draw in [0, 1). Consumes exactly one `next_u64` from the underlying source.
    fn float(&mut self) -> f64;
}

impl<R: RngCore> Random for R {
    #[inline]
    fn float(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Probability of `x` percent, on the `u64` scale used by [Chance::happens]
pub const fn percent(x: u64) -> u64 {
    x * (u64::MAX / 100)
}

pub trait Chance: RngCore {
    /// Whether an event of probability `p` (see [percent]) happens. Consumes one draw.
    fn happens(&mut self, p: u64) -> bool;
}

impl<T: RngCore> Chance for T {
    fn happens(&mut self, p: u64) -> bool {
        p > self.next_u64()
    }
}

/// wyrand. Small, fast, and good enough for picking fish colors
#[derive(Debug, Clone)]
pub struct WyRng {
    state: u64,
}

impl WyRng {
    pub fn seeded(state: u64) -> Self {
        Self { state }
    }
}

impl RngCore for WyRng {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }

    fn next_u64(&mut self) -> u64 {
        const WY_CONST_0: u64 = 0x2d35_8dcc_aa6c_78a5;
        const WY_CONST_1: u64 = 0x8bb8_4b93_962e_acc9;
        self.state = self.state.wrapping_add(WY_CONST_0);
        let t = u128::from(self.state) * u128::from(self.state ^ WY_CONST_1);
        (t as u64) ^ (t >> 64) as u64
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        let mut idx = 0;
        while idx < dst.len() {
            let lim = min(8, dst.len() - idx);
            dst[idx..idx + lim].copy_from_slice(&self.next_u64().to_le_bytes()[..lim]);
            idx += lim;
        }
    }
}

impl SeedableRng for WyRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::seeded(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::seeded(state)
    }
}

pub fn seed_urandom() -> io::Result<u64> {
    let mut file = File::open("/dev/urandom")?;
    let mut buffer = [0u8; 8];
    file.read_exact(&mut buffer)?;
    Ok(u64::from_le_bytes(buffer))
}

/// A [WyRng] seeded from the os, falling back to the thread rng where there is no urandom
pub fn default_rng() -> WyRng {
    WyRng::seeded(seed_urandom().unwrap_or_else(|_| rand::rng().next_u64()))
}


#[cfg(test)]
mod test {
    use super::{double::*, *};
    use core::iter::once;
    use rand::rngs::ThreadRng;

    fn assert_within_deviation(chance: f64, range: f64, rng: &mut impl Chance) {
        let samples = 10_000.;
        let expected = chance * samples;
        let max_deviation = expected * range;
        let p = percent((chance * 100.) as u64);
        for _ in 0..20 {
            let incidence = once(())
                .cycle()
                .take(samples as usize)
                .filter(|()| rng.happens(p))
                .count() as f64;
            assert!(
                (expected - incidence).abs() < max_deviation,
                "{incidence} != {expected} ± {max_deviation}"
            );
        }
    }

    // control test - we are confident that rand generates good random numbers
    #[test]
    fn test_deviation_rand() {
        let mut rng = ThreadRng::default();
        for chance in [0.05, 0.5, 0.8] {
            assert_within_deviation(chance, 0.33, &mut rng);
        }
    }

    #[test]
    fn test_deviation_wyrand() {
        let mut rng = default_rng();
        for chance in [0.05, 0.5, 0.8] {
            assert_within_deviation(chance, 0.33, &mut rng);
        }
    }

    #[test]
    fn test_float_range() {
        let mut rng = WyRng::seeded(7);
        for _ in 0..10_000 {
            let f = rng.float();
            assert!((0. ..1.).contains(&f), "{f} out of [0, 1)");
        }
    }

    #[test]
    fn test_float_one_draw() {
        let mut rng = Counting::new(WyRng::seeded(7));
        rng.float();
        rng.float();
        assert_eq!(rng.draws, 2);
    }

    #[test]
    fn test_fixed_float() {
        assert_eq!(Fixed::at(0.5).float(), 0.5);
        assert_eq!(Fixed::at(0.).float(), 0.);
        assert!((Fixed::at(0.2).float() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_seeded_replays() {
        let mut l = WyRng::seed_from_u64(42);
        let mut r = WyRng::seeded(42);
        for _ in 0..100 {
            assert_eq!(l.next_u64(), r.next_u64());
        }
    }

    #[test]
    fn test_fill_bytes_tail() {
        let mut l = WyRng::seeded(3);
        let mut r = WyRng::seeded(3);
        let mut buf = [0u8; 11];
        l.fill_bytes(&mut buf);
        let first = r.next_u64().to_le_bytes();
        let second = r.next_u64().to_le_bytes();
        assert_eq!(buf[..8], first);
        assert_eq!(buf[8..], second[..3]);
    }
}
