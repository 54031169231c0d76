use super::{Layer, LayerGene, LayerKind};
use crate::{
    constants::{
        KOI_SAMPLER_SHAPE_POWER, KOI_SHAPE_LENGTH_MAX, KOI_SHAPE_LENGTH_MIN, KOI_SHAPE_RADIUS_MAX,
        KOI_SHAPE_RADIUS_MIN,
    },
    mutation::Mutation,
    random::Random,
    sampler::Sampler,
    trait_value::Interpolate,
};
use rand::RngCore;
use serde::{Deserialize, Serialize};

const LENGTH: (f64, f64) = (KOI_SHAPE_LENGTH_MIN, KOI_SHAPE_LENGTH_MAX);
const RADIUS: (f64, f64) = (KOI_SHAPE_RADIUS_MIN, KOI_SHAPE_RADIUS_MAX);

/// Body proportions, relative to a default fish of 1 by 1
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub length: f64,
    pub radius: f64,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            length: 1.,
            radius: 1.,
        }
    }
}

impl Interpolate for Shape {
    fn interpolate(&self, other: &Self, weight: f64) -> Self {
        Self {
            length: self.length.interpolate(&other.length, weight),
            radius: self.radius.interpolate(&other.radius, weight),
        }
    }
}

impl Layer for Shape {
    const KIND: LayerKind = LayerKind::Shape;
    // offspring mostly split the difference; a rare few take after one parent entirely
    const SAMPLER: Sampler = Sampler::plateau(0., 0.5, 1., KOI_SAMPLER_SHAPE_POWER);

    fn random(rng: &mut impl RngCore) -> Self {
        Self {
            length: LENGTH.0.interpolate(&LENGTH.1, rng.float()),
            radius: RADIUS.0.interpolate(&RADIUS.1, rng.float()),
        }
    }

    fn mutate(self, rng: &mut impl RngCore, mutation: &Mutation) -> Self {
        Self {
            length: mutation.scalar(self.length, LENGTH, rng),
            radius: mutation.scalar(self.radius, RADIUS, rng),
        }
    }

    fn of(gene: &LayerGene) -> Option<&Self> {
        match gene {
            LayerGene::Shape(layer) => Some(layer),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::random::{percent, WyRng};

    #[test]
    fn test_default_in_range() {
        let shape = Shape::default();
        assert!((LENGTH.0..=LENGTH.1).contains(&shape.length));
        assert!((RADIUS.0..=RADIUS.1).contains(&shape.radius));
    }

    #[test]
    fn test_mutate_in_range() {
        let wild = Mutation::Gaussian {
            chance: percent(100),
            deviation: 1.,
        };
        let mut rng = WyRng::seeded(1);
        let mut shape = Shape::random(&mut rng);
        for _ in 0..500 {
            shape = shape.mutate(&mut rng, &wild);
            assert!((LENGTH.0..=LENGTH.1).contains(&shape.length), "{shape:?}");
            assert!((RADIUS.0..=RADIUS.1).contains(&shape.radius), "{shape:?}");
        }
    }
}
