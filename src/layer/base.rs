use super::{Layer, LayerGene, LayerKind};
use crate::{
    constants::KOI_SAMPLER_PALETTE_POWER,
    mutation::Mutation,
    random::Random,
    sampler::Sampler,
    trait_value::{Interpolate, PaletteSample},
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// The base body color, underneath every pattern
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Base {
    pub palette: PaletteSample,
}

impl Base {
    pub fn new(palette: PaletteSample) -> Self {
        Self { palette }
    }
}

impl Interpolate for Base {
    fn interpolate(&self, other: &Self, weight: f64) -> Self {
        Self {
            palette: self.palette.interpolate(&other.palette, weight),
        }
    }
}

impl Layer for Base {
    const KIND: LayerKind = LayerKind::Base;
    const SAMPLER: Sampler = Sampler::sigmoid(0., 1., KOI_SAMPLER_PALETTE_POWER);

    fn random(rng: &mut impl RngCore) -> Self {
        Self::new(PaletteSample::new(rng.float(), rng.float()))
    }

    fn mutate(self, rng: &mut impl RngCore, mutation: &Mutation) -> Self {
        Self {
            palette: mutation.palette(self.palette, rng),
        }
    }

    fn of(gene: &LayerGene) -> Option<&Self> {
        match gene {
            LayerGene::Base(layer) => Some(layer),
            _ => None,
        }
    }
}
