pub mod consts;
pub mod errors;
pub mod enum_set;
pub mod probability;
pub mod generator;
pub mod render;
pub mod config;

pub use config::GeneratorConfig;
pub use enum_set::EnumSet;
pub use errors::{EsgenError, Result};
pub use generator::{generate, generate_seeded, generate_with_rng, sample_enum_set};
pub use probability::MembershipProbability;
pub use render::{go_literal, render, OutputFormat};
