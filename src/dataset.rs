//! Dataset loading.
//!
//! The dataset is loaded once at process start and shared read-only for
//! the lifetime of the process; requests never mutate it.

use std::path::Path;

use thiserror::Error;

use crate::models::Sample;

const EMBEDDED_SAMPLES: &str = include_str!("../data/latency_samples.json");

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse dataset: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Immutable ordered collection of telemetry samples.
#[derive(Debug, Clone)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    pub fn new(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    /// Loads a JSON array of samples from disk. Failures surface at
    /// startup, never at request time.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let raw = std::fs::read_to_string(path)?;
        let samples = serde_json::from_str(&raw)?;
        Ok(Self { samples })
    }

    /// Compiled-in snapshot used when no dataset file is configured.
    pub fn embedded() -> Result<Self, DatasetError> {
        let samples = serde_json::from_str(EMBEDDED_SAMPLES)?;
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}
