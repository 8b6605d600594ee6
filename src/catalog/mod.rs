//! The float catalog: model, synthetic population, ingestion and statistics.

pub mod assembler;
mod handle;
pub mod model;
pub mod source;
pub mod stats;
pub mod synthetic;

pub use assembler::{ingest, initial_catalog, run_ingest, IngestOutcome, IngestReport};
pub use handle::CatalogHandle;
pub use model::{
    BgcReadings, FloatCatalog, FloatEntry, FloatStatus, FloatType, Measurement, Provenance,
};
pub use source::{discover_sources, FsFetcher, SourceFetcher, SourceSpec};
pub use stats::{summarize, CatalogSummary, ValueRange};

use crate::error::{ArgonautError, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Largest synthetic population accepted from the command line.
pub const MAX_SYNTHETIC_FLOATS: usize = 10_000;

/// Session settings for building the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Synthetic population size.
    pub floats: usize,
    /// Seed for the synthetic population and position fallbacks.
    pub seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            floats: synthetic::DEFAULT_FLOAT_COUNT,
            seed: None,
        }
    }
}

impl CatalogConfig {
    /// Reject population sizes outside `1..=MAX_SYNTHETIC_FLOATS`.
    pub fn validate(&self) -> Result<()> {
        if self.floats == 0 || self.floats > MAX_SYNTHETIC_FLOATS {
            return Err(ArgonautError::invalid_config(format!(
                "synthetic population must be between 1 and {}, got {}",
                MAX_SYNTHETIC_FLOATS, self.floats
            )));
        }
        Ok(())
    }

    /// Random source for this session, seeded when a seed is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_config_is_reproducible() {
        let config = CatalogConfig {
            floats: 8,
            seed: Some(3),
        };
        let a = initial_catalog(config.floats, &mut config.rng());
        let b = initial_catalog(config.floats, &mut config.rng());
        let positions = |c: &FloatCatalog| -> Vec<(f64, f64)> {
            c.entries().iter().map(|e| (e.lat, e.lon)).collect()
        };
        assert_eq!(positions(&a), positions(&b));
        assert_eq!(a.len(), 8);
        assert!(!a.data_loaded());
    }

    #[test]
    fn default_population() {
        assert_eq!(CatalogConfig::default().floats, 50);
        assert!(CatalogConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_population_is_rejected() {
        let config = CatalogConfig {
            floats: 0,
            seed: None,
        };
        assert!(matches!(
            config.validate(),
            Err(ArgonautError::InvalidConfig(_))
        ));
    }
}
