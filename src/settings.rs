//! Typed generator settings.
//!
//! Every field is optional in the YAML form; missing values fall back to the
//! capacity and metric ranges the testbed fixtures have always used.

use serde::{Deserialize, Serialize};

use crate::model::{Latency, Loss};

/// Half-open value range `[min, max)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueRange<T> {
    pub min: T,
    pub max: T,
}

impl<T: PartialOrd> ValueRange<T> {
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: &T) -> bool {
        self.min <= *value && *value < self.max
    }

    fn is_empty(&self) -> bool {
        self.min >= self.max
    }
}

/// Fixed capacities of the hub peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HubCapacity {
    pub max_upload: u32,
    pub max_download: u32,
}

impl Default for HubCapacity {
    fn default() -> Self {
        Self {
            max_upload: 28_664,
            max_download: 79_823,
        }
    }
}

/// Settings consumed by the topology generator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorSettings {
    /// Placeholder file name written into the topology document
    pub filename: String,
    /// Placeholder file size written into the topology document
    pub filesize: u64,
    /// Seed for the random source; entropy-seeded when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub hub: HubCapacity,
    pub download: ValueRange<u32>,
    pub upload: ValueRange<u32>,
    pub latency: ValueRange<Latency>,
    pub loss: ValueRange<Loss>,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            filename: "test.pdf".to_string(),
            filesize: 5000,
            seed: None,
            hub: HubCapacity::default(),
            download: ValueRange::new(80_000, 90_000),
            upload: ValueRange::new(25_000, 30_000),
            latency: ValueRange::new(
                Latency::from_hundredths(4_000),
                Latency::from_hundredths(8_000),
            ),
            loss: ValueRange::new(Loss::from_ten_thousandths(10), Loss::from_ten_thousandths(20)),
        }
    }
}

impl GeneratorSettings {
    /// Validate the settings
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.filename.trim().is_empty() {
            return Err(ValidationError::InvalidMetadata(
                "filename cannot be empty".to_string(),
            ));
        }

        if self.hub.max_upload == 0 || self.hub.max_download == 0 {
            return Err(ValidationError::InvalidCapacity(format!(
                "hub capacities must be positive (upload {}, download {})",
                self.hub.max_upload, self.hub.max_download
            )));
        }

        Self::validate_capacity_range("download", &self.download)?;
        Self::validate_capacity_range("upload", &self.upload)?;

        if self.latency.is_empty() {
            return Err(ValidationError::InvalidRange(format!(
                "latency range [{}, {}) is empty",
                self.latency.min, self.latency.max
            )));
        }
        if self.loss.is_empty() {
            return Err(ValidationError::InvalidRange(format!(
                "loss range [{}, {}) is empty",
                self.loss.min, self.loss.max
            )));
        }

        Ok(())
    }

    fn validate_capacity_range(
        label: &str,
        range: &ValueRange<u32>,
    ) -> Result<(), ValidationError> {
        if range.min == 0 {
            return Err(ValidationError::InvalidCapacity(format!(
                "{} capacity range must start above zero",
                label
            )));
        }
        if range.is_empty() {
            return Err(ValidationError::InvalidRange(format!(
                "{} range [{}, {}) is empty",
                label, range.min, range.max
            )));
        }
        Ok(())
    }
}

/// Settings validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid range: {0}")]
    InvalidRange(String),
    #[error("Invalid capacity: {0}")]
    InvalidCapacity(String),
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),
}
