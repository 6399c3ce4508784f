//! Random number sources
//!
//! The series generator draws every sample through the `RandomSource`
//! trait, so callers pick between the thread RNG and a seeded RNG
//! without the generator knowing which one it got.

pub mod pseudo;

use serde::{Deserialize, Serialize};

/// Trait for random number sources
///
/// Implementations must be thread-safe (Send + Sync) to work with async server.
pub trait RandomSource: Send + Sync {
    /// Returns the source name (e.g., "thread", "seeded")
    fn name(&self) -> &'static str;

    /// Generate a single random float uniformly distributed in [0.0, 1.0)
    fn float(&self) -> f64;

    /// Generate a float uniformly distributed in [lo, hi)
    fn uniform(&self, lo: f64, hi: f64) -> f64 {
        lo + self.float() * (hi - lo)
    }
}

/// Information about a random source
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceInfo {
    /// Source name
    pub name: String,
    /// Human-readable description
    pub description: String,
}

/// Pick a source for an optional seed
///
/// No seed gives the thread RNG, matching a fresh page load; a seed gives a
/// reproducible StdRng.
pub fn source_for(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(pseudo::SeededRandom::new(seed)),
        None => Box::new(pseudo::ThreadRandom::new()),
    }
}

/// List all available sources with their info
pub fn available_sources() -> Vec<SourceInfo> {
    vec![
        SourceInfo {
            name: "thread".to_string(),
            description: "Thread-local RNG, new series on every run".to_string(),
        },
        SourceInfo {
            name: "seeded".to_string(),
            description: "Seeded StdRng, reproducible series".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_for_seed() {
        assert_eq!(source_for(None).name(), "thread");
        assert_eq!(source_for(Some(7)).name(), "seeded");
    }

    #[test]
    fn test_uniform_range() {
        let source = source_for(Some(99));
        for _ in 0..1000 {
            let v = source.uniform(-5.0, 5.0);
            assert!((-5.0..5.0).contains(&v), "{} out of [-5, 5)", v);
        }
    }

    #[test]
    fn test_available_sources() {
        let sources = available_sources();
        assert_eq!(sources.len(), 2);
        assert!(sources.iter().any(|s| s.name == "seeded"));
    }
}
