//! Mutation policy for offspring layers. Mutation runs after a layer has been blended from its
//! parents, and perturbs its fields independently of one another.

use crate::{
    constants::{KOI_MUTATION_CHANCE, KOI_MUTATION_DEVIATION},
    random::Chance,
    trait_value::PaletteSample,
};
use rand::RngCore;
use rand_distr::{Distribution, Normal};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Mutation {
    /// Layers pass through unchanged, and no draws are consumed
    Off,
    /// Each field mutates with probability `chance` (see [crate::random::percent]),
    /// moving by a normally distributed step whose standard deviation is `deviation` times the
    /// width of the field's range. Mutated fields are clamped back into their range.
    Gaussian { chance: u64, deviation: f64 },
}

impl Default for Mutation {
    fn default() -> Self {
        Self::Gaussian {
            chance: KOI_MUTATION_CHANCE,
            deviation: KOI_MUTATION_DEVIATION,
        }
    }
}

impl Mutation {
    /// Perturb `value`, which lives within `min..=max`.
    /// Consumes one draw to decide whether to mutate, and one more if it does.
    pub fn scalar(&self, value: f64, (min, max): (f64, f64), rng: &mut impl RngCore) -> f64 {
        let Self::Gaussian { chance, deviation } = *self else {
            return value;
        };

        if !rng.happens(chance) {
            return value;
        }

        // an invalid deviation leaves the value alone rather than failing the whole breed
        Normal::new(0., deviation * (max - min))
            .map_or(value, |step| (value + step.sample(rng)).clamp(min, max))
    }

    /// Perturb both coordinates of a palette sample independently
    pub fn palette(&self, sample: PaletteSample, rng: &mut impl RngCore) -> PaletteSample {
        PaletteSample {
            x: self.scalar(sample.x, (0., 1.), rng),
            y: self.scalar(sample.y, (0., 1.), rng),
        }
    }
}
