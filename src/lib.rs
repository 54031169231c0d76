#![allow(mixed_script_confusables)]
#![allow(confusable_idents)]

pub mod breeder;
pub mod constants;
pub mod genome;
pub mod layer;
mod macros;
pub mod mixer;
pub mod mutation;
pub mod random;
pub mod registry;
pub mod sampler;
pub mod trait_value;

pub use breeder::Breeder;
pub use genome::Genome;
pub use layer::{Layer, LayerGene, LayerKind};
pub use mixer::Mixer;
pub use mutation::Mutation;
pub use random::{Random, WyRng};
pub use registry::Registry;
pub use sampler::Sampler;
pub use trait_value::{Color, Interpolate, PaletteSample};
