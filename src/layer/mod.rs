//! Heritable layers of a fish's appearance. Every layer kind is its own type implementing
//! [Layer]; inside of a [crate::Genome] they are stored type-erased as [LayerGene]s.

pub mod base;
pub mod pattern;
pub mod shape;

pub use base::Base;
pub use pattern::{Spots, Stripes};
pub use shape::Shape;

use crate::{mutation::Mutation, sampler::Sampler, trait_value::Interpolate};
use core::fmt::{self, Debug, Display};
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// One heritable aspect of a fish's appearance.
///
/// Interpolating a layer blends every one of its fields with the same weight.
pub trait Layer:
    Interpolate + Into<LayerGene> + Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de>
{
    const KIND: LayerKind;

    /// Curve shaping the blend weight of every mix of this kind
    const SAMPLER: Sampler;

    /// A layer for a fish with no parents
    fn random(rng: &mut impl RngCore) -> Self;

    /// Perturb a freshly blended layer. Must keep every field within its range
    fn mutate(self, rng: &mut impl RngCore, mutation: &Mutation) -> Self;

    /// This layer, if `gene` holds one of this kind
    fn of(gene: &LayerGene) -> Option<&Self>;
}

macro_rules! layer_genes {
    ($($kind:ident),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum LayerKind {
            $($kind,)+
        }

        impl LayerKind {
            pub const ALL: &'static [Self] = &[$(Self::$kind),+];
        }

        impl Display for LayerKind {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$kind => f.write_str(stringify!($kind)),)+
                }
            }
        }

        /// A layer of any kind
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "kind")]
        pub enum LayerGene {
            $($kind($kind),)+
        }

        impl LayerGene {
            pub fn kind(&self) -> LayerKind {
                match self {
                    $(Self::$kind(_) => LayerKind::$kind,)+
                }
            }
        }

        $(
            impl From<$kind> for LayerGene {
                fn from(layer: $kind) -> Self {
                    Self::$kind(layer)
                }
            }
        )+
    };
}

layer_genes!(Base, Spots, Stripes, Shape);
