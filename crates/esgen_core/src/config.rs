use crate::consts::{DEFAULT_MAX_SIZE, DEFAULT_MEMBERSHIP_PROBABILITY};
use crate::enum_set::EnumSet;
use crate::errors::Result;
use crate::generator::sample_enum_set;
use crate::probability::MembershipProbability;
use crate::render::{render, OutputFormat};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Generation settings. Missing JSON fields fall back to the defaults
/// (32 keys, probability 0.25, unseeded, Go literal).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub max_size: u64,
    pub membership_probability: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub format: OutputFormat,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_size: DEFAULT_MAX_SIZE,
            membership_probability: DEFAULT_MEMBERSHIP_PROBABILITY,
            seed: None,
            format: OutputFormat::default(),
        }
    }
}

impl GeneratorConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let s = fs::read_to_string(path)?;
        let cfg: GeneratorConfig = serde_json::from_str(&s)?;
        tracing::debug!(path = %path.display(), ?cfg, "loaded generator config");
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<MembershipProbability> {
        MembershipProbability::new(self.membership_probability)
    }

    /// Draws a set per these settings, seeded when `seed` is set.
    pub fn sample(&self) -> Result<EnumSet> {
        let p = self.validate()?;
        let es = match self.seed {
            Some(seed) => sample_enum_set(&mut StdRng::seed_from_u64(seed), self.max_size, p),
            None => sample_enum_set(&mut rand::rng(), self.max_size, p),
        };
        Ok(es)
    }

    pub fn generate(&self) -> Result<String> {
        render(&self.sample()?, self.format)
    }
}
