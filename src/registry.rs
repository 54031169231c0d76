//! The table of every layer kind a genome may hold, and how each kind is mixed.
//!
//! New layer kinds are added by registering them, without touching the [crate::Breeder].

use crate::{
    layer::{Base, Layer, LayerGene, LayerKind, Shape, Spots, Stripes},
    mixer::Mixer,
    mutation::Mutation,
    sampler::Sampler,
};
use core::{
    error::Error,
    fmt::{self, Debug},
};
use fxhash::FxHashMap;
use log::trace;
use rand::RngCore;

/// Mixes two type-erased layers, which the registry has already checked are of the same kind
pub type MixFn = fn(
    &LayerGene,
    &LayerGene,
    Sampler,
    Mutation,
    &mut dyn RngCore,
) -> Result<LayerGene, Box<dyn Error>>;

/// How one layer kind is mixed
#[derive(Clone, Copy)]
pub struct Entry {
    pub mix: MixFn,
    pub sampler: Sampler,
    pub mutation: Mutation,
}

impl Debug for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("sampler", &self.sampler)
            .field("mutation", &self.mutation)
            .finish_non_exhaustive()
    }
}

impl Entry {
    /// An entry mixing `L` with its own sampler
    pub fn of<L: Layer>(mutation: Mutation) -> Self {
        Self {
            mix: mix_genes::<L>,
            sampler: L::SAMPLER,
            mutation,
        }
    }
}

fn mix_genes<L: Layer>(
    mother: &LayerGene,
    father: &LayerGene,
    sampler: Sampler,
    mutation: Mutation,
    mut rng: &mut dyn RngCore,
) -> Result<LayerGene, Box<dyn Error>> {
    match (L::of(mother), L::of(father)) {
        (Some(mother), Some(father)) => Ok(Mixer::new(mother, father)
            .with_sampler(sampler)
            .with_mutation(mutation)
            .mix(&mut rng)
            .into()),
        _ => Err(format!(
            "{} mixer given a {} mother and {} father",
            L::KIND,
            mother.kind(),
            father.kind()
        )
        .into()),
    }
}

#[derive(Debug, Clone)]
pub struct Registry {
    entries: FxHashMap<LayerKind, Entry>,
}

impl Registry {
    /// A registry with no kinds at all
    pub fn empty() -> Self {
        Self {
            entries: FxHashMap::default(),
        }
    }

    /// Every built in layer kind, all mutating the same way
    pub fn with_mutation(mutation: Mutation) -> Self {
        let mut registry = Self::empty();
        registry
            .register::<Base>(mutation)
            .register::<Spots>(mutation)
            .register::<Stripes>(mutation)
            .register::<Shape>(mutation);
        registry
    }

    /// Register `L`, replacing whatever was registered for its kind
    pub fn register<L: Layer>(&mut self, mutation: Mutation) -> &mut Self {
        self.insert(L::KIND, Entry::of::<L>(mutation))
    }

    pub fn insert(&mut self, kind: LayerKind, entry: Entry) -> &mut Self {
        if self.entries.insert(kind, entry).is_some() {
            trace!("replaced mixer for {kind}");
        }
        self
    }

    /// Change the mutation of an already registered kind
    pub fn set_mutation(
        &mut self,
        kind: LayerKind,
        mutation: Mutation,
    ) -> Result<(), Box<dyn Error>> {
        self.entries
            .get_mut(&kind)
            .map(|entry| entry.mutation = mutation)
            .ok_or_else(|| format!("no mixer registered for {kind}").into())
    }

    pub fn get(&self, kind: LayerKind) -> Option<&Entry> {
        self.entries.get(&kind)
    }

    pub fn contains(&self, kind: LayerKind) -> bool {
        self.entries.contains_key(&kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Mix one pair of layers through the entry registered for their kind
    pub fn mix(
        &self,
        mother: &LayerGene,
        father: &LayerGene,
        rng: &mut dyn RngCore,
    ) -> Result<LayerGene, Box<dyn Error>> {
        let kind = mother.kind();
        if father.kind() != kind {
            return Err(format!("cannot mix a {kind} layer with a {} layer", father.kind()).into());
        }

        let entry = self
            .get(kind)
            .ok_or_else(|| format!("no mixer registered for {kind}"))?;
        (entry.mix)(mother, father, entry.sampler, entry.mutation, rng)
    }
}

impl Default for Registry {
    /// Every built in layer kind, with the default mutation
    fn default() -> Self {
        Self::with_mutation(Mutation::default())
    }
}
