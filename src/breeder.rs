//! Breeding whole genomes, layer by layer.

use crate::{genome::Genome, mutation::Mutation, registry::Registry};
use core::error::Error;
use log::debug;
use rand::RngCore;

#[derive(Debug, Clone, Default)]
pub struct Breeder {
    registry: Registry,
}

impl Breeder {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    /// A breeder for every built in kind, where offspring never mutate
    pub fn without_mutation() -> Self {
        Self::new(Registry::with_mutation(Mutation::Off))
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut Registry {
        &mut self.registry
    }

    /// Mix every layer of `mother` with the layer at the same position of `father`, keeping the
    /// order of layers. Parents must stack the same kinds in the same order
    pub fn mix_all(
        &self,
        mother: &Genome,
        father: &Genome,
        rng: &mut impl RngCore,
    ) -> Result<Genome, Box<dyn Error>> {
        if mother.len() != father.len() {
            return Err(format!(
                "cannot breed a genome of {} layers with one of {}",
                mother.len(),
                father.len()
            )
            .into());
        }

        mother
            .layers()
            .iter()
            .zip(father.layers())
            .enumerate()
            .map(|(idx, (m, f))| {
                self.registry
                    .mix(m, f, &mut *rng)
                    .map_err(|e| format!("layer {idx}: {e}").into())
            })
            .collect::<Result<Vec<_>, Box<dyn Error>>>()
            .map(Genome::new)
    }

    /// Breed one offspring
    pub fn breed(
        &self,
        mother: &Genome,
        father: &Genome,
        rng: &mut impl RngCore,
    ) -> Result<Genome, Box<dyn Error>> {
        let child = self.mix_all(mother, father, rng)?;
        debug!("bred a fish of {} layers", child.len());
        Ok(child)
    }

    /// Breed `count` offspring of the same parents, one after the other
    pub fn clutch(
        &self,
        mother: &Genome,
        father: &Genome,
        count: usize,
        rng: &mut impl RngCore,
    ) -> Result<Vec<Genome>, Box<dyn Error>> {
        let clutch = (0..count)
            .map(|_| self.mix_all(mother, father, rng))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("bred a clutch of {count}");
        Ok(clutch)
    }
}
