//! Mixing two parent layers of one kind into an offspring layer.

use crate::{layer::Layer, mutation::Mutation, random::Random, sampler::Sampler};
use log::trace;
use rand::RngCore;

/// Mixes a mother and father layer of the same kind `L`. Parents of different kinds can't be
/// handed to one mixer.
#[derive(Debug, Clone)]
pub struct Mixer<'a, L: Layer> {
    mother: &'a L,
    father: &'a L,
    sampler: Sampler,
    mutation: Mutation,
}

impl<'a, L: Layer> Mixer<'a, L> {
    /// A mixer blending with the kind's [Layer::SAMPLER], and mutating by default
    pub fn new(mother: &'a L, father: &'a L) -> Self {
        Self {
            mother,
            father,
            sampler: L::SAMPLER,
            mutation: Mutation::default(),
        }
    }

    pub fn with_sampler(mut self, sampler: Sampler) -> Self {
        self.sampler = sampler;
        self
    }

    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    #[inline]
    pub fn mother(&self) -> &'a L {
        self.mother
    }

    #[inline]
    pub fn father(&self) -> &'a L {
        self.father
    }

    /// Blend the parents with a single sampled weight, without mutating.
    /// Consumes exactly one draw.
    pub fn blend(&self, rng: &mut impl RngCore) -> L {
        let u = rng.float();
        let weight = self.sampler.sample(u);
        trace!("{} blend: draw {u:.4} -> weight {weight:.4}", L::KIND);
        self.mother.interpolate(self.father, weight)
    }

    /// Blend the parents, then mutate the offspring. With [Mutation::Off] this consumes exactly
    /// one draw, otherwise the kind's mutation draws after the blend.
    pub fn mix(&self, rng: &mut impl RngCore) -> L {
        L::mutate(self.blend(rng), rng, &self.mutation)
    }
}
