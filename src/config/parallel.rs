//! Parallelism configuration for per-row stages.
//!
//! Normalization and classification are independent across rows. When
//! enabled and the table is large enough, they run on rayon's pool; results
//! are collected in input order either way.

use serde::{Deserialize, Serialize};

/// Default value for parallel processing enabled
fn default_enabled() -> bool {
    true
}

/// Default row count below which the per-row stages stay sequential
fn default_min_rows() -> usize {
    1000
}

/// Configuration for parallel per-row processing.
///
/// # Example
///
/// ```rust
/// use review_sentiment::config::ParallelConfig;
///
/// let config = ParallelConfig {
///     enabled: true,
///     jobs: 4,
///     min_rows: 500,
/// };
/// assert!(config.should_parallelize(500));
/// assert!(!config.should_parallelize(499));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Enable parallel processing (default: true)
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Worker threads for the global pool; 0 uses every available core
    #[serde(default)]
    pub jobs: usize,

    /// Minimum number of rows before parallelism kicks in (default: 1000)
    #[serde(default = "default_min_rows")]
    pub min_rows: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            jobs: 0,
            min_rows: default_min_rows(),
        }
    }
}

impl ParallelConfig {
    /// Create a config with parallel processing disabled.
    pub fn sequential() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    pub fn should_parallelize(&self, rows: usize) -> bool {
        self.enabled && rows >= self.min_rows
    }

    /// Worker count for the global pool: `jobs`, or every available core
    /// when it is 0.
    pub fn effective_jobs(&self) -> usize {
        if self.jobs == 0 {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        } else {
            self.jobs
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ParallelConfig::default();
        assert!(config.enabled);
        assert_eq!(config.jobs, 0);
        assert_eq!(config.min_rows, 1000);
        assert!(config.effective_jobs() >= 1);
    }

    #[test]
    fn test_effective_jobs_auto_uses_available_cores() {
        let cores = std::thread::available_parallelism()
            .map(|p| p.get())
            .unwrap_or(4);
        assert_eq!(ParallelConfig::default().effective_jobs(), cores);
    }

    #[test]
    fn test_sequential_never_parallelizes() {
        assert!(!ParallelConfig::sequential().should_parallelize(1_000_000));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: ParallelConfig = toml::from_str("jobs = 2").unwrap();
        assert!(config.enabled);
        assert_eq!(config.jobs, 2);
        assert_eq!(config.effective_jobs(), 2);
    }
}
