use thiserror::Error;

pub const DEFAULT_MAX_SAMPLES: usize = 200;
pub const DEFAULT_HOURS_DIVISOR: f64 = 15.0;
pub const DEFAULT_CEREMONY_LABEL: &str = "Data CoE ceremony";

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("max samples must be greater than zero")]
    InvalidMaxSamples,
    #[error("hours divisor must be a positive number, got {0}")]
    InvalidHoursDivisor(f64),
}

/// Knobs shared by both output layouts.
///
/// The CLI resolves flags and environment variables into this struct; the
/// services never read the environment themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplerConfig {
    pub max_samples: usize,
    pub hours_divisor: f64,
    pub random_seed: Option<u64>,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            max_samples: DEFAULT_MAX_SAMPLES,
            hours_divisor: DEFAULT_HOURS_DIVISOR,
            random_seed: None,
        }
    }
}

impl SamplerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_samples == 0 {
            return Err(ConfigError::InvalidMaxSamples);
        }
        check_hours_divisor(self.hours_divisor)
    }

    /// The configured seed, or a fresh one from process entropy.
    pub fn resolve_seed(&self) -> u64 {
        self.random_seed.unwrap_or_else(rand::random)
    }
}

pub(crate) fn check_hours_divisor(hours_divisor: f64) -> Result<(), ConfigError> {
    if hours_divisor.is_finite() && hours_divisor > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidHoursDivisor(hours_divisor))
    }
}
