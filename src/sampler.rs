//! Response curves which turn a flat random draw into a biased blend weight.
//!
//! Breeding never blends parents with a raw uniform draw. The draw goes through a [Sampler]
//! first. A steep [Sampler::Sigmoid] sends most draws to either end, so most offspring take
//! after one parent and only draws near the middle blend both. A [Sampler::Plateau] does the
//! opposite: most offspring are an even blend, and only the tails favour one parent.
//!
//! Samplers are pure and `Copy`, and are built in `const` context so a layer kind can share one
//! as an associated constant. Inputs outside of [0, 1) are not clamped; they follow the same
//! formula, extrapolating the curve.

use core::f64::consts::E;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Sampler {
    /// `min + (max - min) * u`
    Linear { min: f64, max: f64 },
    /// A logistic curve centered on `u = 0.5`, rescaled so that `sample(0) == min` and
    /// `sample(1) == max`. Higher `power` is steeper
    Sigmoid { min: f64, max: f64, power: f64 },
    /// Flat around `mid`, rising to `min` and `max` at the edges. Higher `power` is flatter;
    /// a non-positive `power` falls back to straight lines through `mid`
    Plateau {
        min: f64,
        mid: f64,
        max: f64,
        power: f64,
    },
}

impl Sampler {
    pub const IDENTITY: Self = Self::linear(0., 1.);

    pub const fn linear(min: f64, max: f64) -> Self {
        Self::Linear { min, max }
    }

    pub const fn sigmoid(min: f64, max: f64, power: f64) -> Self {
        Self::Sigmoid { min, max, power }
    }

    pub const fn plateau(min: f64, mid: f64, max: f64, power: f64) -> Self {
        Self::Plateau {
            min,
            mid,
            max,
            power,
        }
    }

    /// Lowest response, reached at `u = 0`
    pub fn min(&self) -> f64 {
        match *self {
            Self::Linear { min, .. } | Self::Sigmoid { min, .. } | Self::Plateau { min, .. } => {
                min
            }
        }
    }

    /// Highest response, reached at `u = 1`
    pub fn max(&self) -> f64 {
        match *self {
            Self::Linear { max, .. } | Self::Sigmoid { max, .. } | Self::Plateau { max, .. } => {
                max
            }
        }
    }

    /// Response at `u = 0.5`
    pub fn midpoint(&self) -> f64 {
        match *self {
            Self::Linear { min, max } | Self::Sigmoid { min, max, .. } => (min + max) / 2.,
            Self::Plateau { mid, .. } => mid,
        }
    }

    pub fn sample(&self, u: f64) -> f64 {
        match *self {
            Self::Linear { min, max } => min + (max - min) * u,
            Self::Sigmoid { min, max, power } => {
                // a flat logistic is a line, and would divide by zero below
                if power <= 0. {
                    return min + (max - min) * u;
                }

                let σ = |x: f64| 1. / (1. + E.powf(-power * (x - 0.5)));
                let (lo, hi) = (σ(0.), σ(1.));
                min + (max - min) * (σ(u) - lo) / (hi - lo)
            }
            Self::Plateau {
                min,
                mid,
                max,
                power,
            } => {
                // x^0 is 1 even at x = 0, which would lose the midpoint
                let power = if power > 0. { power } else { 1. };
                let x = 2. * u - 1.;
                let edge = if x < 0. { min } else { max };
                mid + (edge - mid) * x.abs().powf(power)
            }
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_f64_approx, random::WyRng, random::Random};
    use approx::assert_relative_eq;

    const CURVES: [Sampler; 5] = [
        Sampler::IDENTITY,
        Sampler::linear(0.2, 0.6),
        Sampler::sigmoid(0., 1., 20.),
        Sampler::sigmoid(0., 1., 3.),
        Sampler::plateau(0., 0.5, 1., 3.),
    ];

    #[test]
    fn test_identity() {
        for u in [0., 0.2, 0.5, 0.999] {
            assert_f64_approx!(Sampler::IDENTITY.sample(u), u);
        }
    }

    #[test]
    fn test_range_contained() {
        let mut rng = WyRng::seeded(11);
        for curve in CURVES {
            for _ in 0..1000 {
                let w = curve.sample(rng.float());
                assert!(
                    w >= curve.min() - 1e-12 && w <= curve.max() + 1e-12,
                    "{curve:?}: {w} escaped its range"
                );
            }
        }
    }

    #[test]
    fn test_monotonic() {
        for curve in CURVES {
            let mut last = curve.sample(0.);
            for step in 1..1000 {
                let w = curve.sample(step as f64 / 1000.);
                assert!(w >= last, "{curve:?} decreased at step {step}");
                last = w;
            }
        }
    }

    #[test]
    fn test_midpoint() {
        for curve in CURVES {
            assert_relative_eq!(curve.sample(0.5), curve.midpoint(), epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sigmoid_bounds() {
        let curve = Sampler::sigmoid(0., 1., 20.);
        assert_relative_eq!(curve.sample(0.), 0., epsilon = 1e-12);
        assert_relative_eq!(curve.sample(1.), 1., epsilon = 1e-12);
    }

    #[test]
    fn test_sigmoid_steep() {
        // a steep curve pushes the outer half of draws to within 1% of either parent
        let curve = Sampler::sigmoid(0., 1., 20.);
        assert!(curve.sample(0.25) < 0.01);
        assert!(curve.sample(0.45) > 0.25);
        assert!(curve.sample(0.55) < 0.75);
        assert!(curve.sample(0.75) > 0.99);
    }

    #[test]
    fn test_sigmoid_flat() {
        let curve = Sampler::sigmoid(0., 1., 0.);
        assert_f64_approx!(curve.sample(0.3), 0.3);
    }

    #[test]
    fn test_plateau_degenerate_power() {
        for power in [0., -1., f64::NEG_INFINITY] {
            let curve = Sampler::plateau(0., 0.5, 1., power);
            assert_f64_approx!(curve.sample(0.5), curve.midpoint());
            assert_f64_approx!(curve.sample(0.), 0.);
            assert_f64_approx!(curve.sample(1.), 1.);
            assert_f64_approx!(curve.sample(0.25), 0.25);
            assert_f64_approx!(curve.sample(0.75), 0.75);

            let mut last = curve.sample(0.);
            for step in 1..=1000 {
                let w = curve.sample(step as f64 / 1000.);
                assert!((0. ..=1.).contains(&w), "power {power}: {w} escaped [0, 1]");
                assert!(w >= last, "power {power} decreased at step {step}");
                last = w;
            }
        }

        // a lopsided midpoint keeps its two slopes
        let curve = Sampler::plateau(0., 0.8, 1., 0.);
        assert_f64_approx!(curve.sample(0.5), 0.8);
        assert_f64_approx!(curve.sample(0.25), 0.4);
    }

    #[test]
    fn test_plateau_flat_middle() {
        let curve = Sampler::plateau(0., 0.5, 1., 4.);
        assert_relative_eq!(curve.sample(0.), 0.);
        assert_relative_eq!(curve.sample(1.), 1.);
        assert!((curve.sample(0.4) - 0.5).abs() < 0.001);
        assert!((curve.sample(0.6) - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_plateau_clusters() {
        let curve = Sampler::plateau(0., 0.5, 1., 3.);
        let mut rng = WyRng::seeded(12);
        let near_middle = (0..1000)
            .map(|_| curve.sample(rng.float()))
            .filter(|w| (0.4..0.6).contains(w))
            .count();
        // |2u - 1|^3 < 0.2 for ~58% of draws, against 20% for a flat curve
        assert!(near_middle > 450, "{near_middle}");
    }

    #[test]
    fn test_extrapolates() {
        assert_f64_approx!(Sampler::IDENTITY.sample(1.5), 1.5);
        assert_f64_approx!(Sampler::IDENTITY.sample(-0.5), -0.5);
        assert!(Sampler::sigmoid(0., 1., 20.).sample(1.2) > 1.);
    }
}
