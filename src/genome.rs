//! A fish's full heritable appearance: an ordered stack of layers.

use crate::layer::{Base, Layer, LayerGene, LayerKind, Shape, Spots, Stripes};
use core::error::Error;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Layers are stacked in order when rendering, so the first layer is drawn underneath.
/// A genome is fixed once built; breeding produces new genomes rather than changing old ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Genome {
    layers: Vec<LayerGene>,
}

impl Genome {
    pub fn new(layers: Vec<LayerGene>) -> Self {
        Self { layers }
    }

    /// A fish with no parents: a random base, spots over stripes, and a random body shape
    pub fn founder(rng: &mut impl RngCore) -> Self {
        Self::new(vec![
            Base::random(rng).into(),
            Stripes::random(rng).into(),
            Spots::random(rng).into(),
            Shape::random(rng).into(),
        ])
    }

    #[inline]
    pub fn layers(&self) -> &[LayerGene] {
        &self.layers
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn kinds(&self) -> impl Iterator<Item = LayerKind> + '_ {
        self.layers.iter().map(LayerGene::kind)
    }

    /// The first layer of kind `L`, if there is one
    pub fn layer<L: Layer>(&self) -> Option<&L> {
        self.layers.iter().find_map(L::of)
    }

    #[allow(clippy::inherent_to_string)]
    pub fn to_string(&self) -> Result<String, Box<dyn Error>> {
        Ok(serde_json::to_string(self)?)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, Box<dyn Error>> {
        serde_json::from_str(s).map_err(|op| op.into())
    }

    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn Error>> {
        fs::write(path, self.to_string()?)?;
        Ok(())
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        Self::from_str(&fs::read_to_string(path)?)
    }
}

impl From<Vec<LayerGene>> for Genome {
    fn from(layers: Vec<LayerGene>) -> Self {
        Self::new(layers)
    }
}
