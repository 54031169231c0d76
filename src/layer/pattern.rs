//! Pattern layers, drawn over the [super::Base] layer in their own palette color.

use super::{Layer, LayerGene, LayerKind};
use crate::{
    constants::{KOI_PATTERN_SCALE_MAX, KOI_PATTERN_SCALE_MIN, KOI_SAMPLER_PATTERN_POWER},
    mutation::Mutation,
    random::Random,
    sampler::Sampler,
    trait_value::{Interpolate, PaletteSample},
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

const SCALE: (f64, f64) = (KOI_PATTERN_SCALE_MIN, KOI_PATTERN_SCALE_MAX);
const UNIT: (f64, f64) = (0., 1.);

fn random_scale(rng: &mut impl RngCore) -> f64 {
    SCALE.0.interpolate(&SCALE.1, rng.float())
}

/// Noise thresholded into blotches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spots {
    pub palette: PaletteSample,
    /// Size of the noise features, in [KOI_PATTERN_SCALE_MIN, KOI_PATTERN_SCALE_MAX]
    pub scale: f64,
    /// Fraction of the body covered by spots, in [0, 1]
    pub threshold: f64,
}

impl Interpolate for Spots {
    fn interpolate(&self, other: &Self, weight: f64) -> Self {
        Self {
            palette: self.palette.interpolate(&other.palette, weight),
            scale: self.scale.interpolate(&other.scale, weight),
            threshold: self.threshold.interpolate(&other.threshold, weight),
        }
    }
}

impl Layer for Spots {
    const KIND: LayerKind = LayerKind::Spots;
    const SAMPLER: Sampler = Sampler::sigmoid(0., 1., KOI_SAMPLER_PATTERN_POWER);

    fn random(rng: &mut impl RngCore) -> Self {
        Self {
            palette: PaletteSample::new(rng.float(), rng.float()),
            scale: random_scale(rng),
            threshold: rng.float(),
        }
    }

    fn mutate(self, rng: &mut impl RngCore, mutation: &Mutation) -> Self {
        Self {
            palette: mutation.palette(self.palette, rng),
            scale: mutation.scalar(self.scale, SCALE, rng),
            threshold: mutation.scalar(self.threshold, UNIT, rng),
        }
    }

    fn of(gene: &LayerGene) -> Option<&Self> {
        match gene {
            LayerGene::Spots(layer) => Some(layer),
            _ => None,
        }
    }
}

/// Bands running across the body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stripes {
    pub palette: PaletteSample,
    /// Width of the bands, in [KOI_PATTERN_SCALE_MIN, KOI_PATTERN_SCALE_MAX]
    pub scale: f64,
    /// How far bands wander from straight lines, in [0, 1]
    pub distortion: f64,
}

impl Interpolate for Stripes {
    fn interpolate(&self, other: &Self, weight: f64) -> Self {
        Self {
            palette: self.palette.interpolate(&other.palette, weight),
            scale: self.scale.interpolate(&other.scale, weight),
            distortion: self.distortion.interpolate(&other.distortion, weight),
        }
    }
}

impl Layer for Stripes {
    const KIND: LayerKind = LayerKind::Stripes;
    const SAMPLER: Sampler = Sampler::sigmoid(0., 1., KOI_SAMPLER_PATTERN_POWER);

    fn random(rng: &mut impl RngCore) -> Self {
        Self {
            palette: PaletteSample::new(rng.float(), rng.float()),
            scale: random_scale(rng),
            distortion: rng.float(),
        }
    }

    fn mutate(self, rng: &mut impl RngCore, mutation: &Mutation) -> Self {
        Self {
            palette: mutation.palette(self.palette, rng),
            scale: mutation.scalar(self.scale, SCALE, rng),
            distortion: mutation.scalar(self.distortion, UNIT, rng),
        }
    }

    fn of(gene: &LayerGene) -> Option<&Self> {
        match gene {
            LayerGene::Stripes(layer) => Some(layer),
            _ => None,
        }
    }
}
