//! Solver configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::Point;

/// Default per-route distance cap.
pub const DEFAULT_MAX_DISTANCE: f64 = 720.0;

/// How savings with equal value are ordered before merging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Stable sort: equal savings keep their generation order, i.e.
    /// ascending `(i, j)`.
    #[default]
    GenerationOrder,
    /// Unstable sort: the relative order of equal savings is unspecified.
    Unstable,
}

/// Parameters of a savings run.
///
/// Deserializes from JSON with every field optional:
///
/// ```
/// use load_routing::config::SavingsConfig;
/// use load_routing::models::Point;
///
/// let config: SavingsConfig =
///     serde_json::from_str(r#"{ "max_distance": 500.0 }"#).unwrap();
/// assert_eq!(config.max_distance(), 500.0);
/// assert_eq!(config.depot(), Point::ORIGIN);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SavingsConfig {
    depot: Point,
    max_distance: f64,
    tie_break: TieBreak,
}

impl Default for SavingsConfig {
    fn default() -> Self {
        Self {
            depot: Point::ORIGIN,
            max_distance: DEFAULT_MAX_DISTANCE,
            tie_break: TieBreak::default(),
        }
    }
}

impl SavingsConfig {
    /// Reads and validates a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the depot all routes start and end at.
    pub fn with_depot(mut self, depot: Point) -> Self {
        self.depot = depot;
        self
    }

    /// Sets the maximum round-trip distance of a merged route.
    pub fn with_max_distance(mut self, max: f64) -> Self {
        self.max_distance = max;
        self
    }

    /// Sets the ordering of equal savings.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Depot location.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Maximum round-trip distance of a merged route.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Ordering of equal savings.
    pub fn tie_break(&self) -> TieBreak {
        self.tie_break
    }

    /// Checks that the depot is finite and the cap is a finite,
    /// non-negative distance.
    pub fn validate(&self) -> Result<()> {
        if !self.depot.is_finite() {
            return Err(Error::invalid_config(format!(
                "depot must be finite, got {}",
                self.depot
            )));
        }
        if !self.max_distance.is_finite() || self.max_distance < 0.0 {
            return Err(Error::invalid_config(format!(
                "max_distance must be a finite non-negative number, got {}",
                self.max_distance
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = SavingsConfig::default();
        assert_eq!(c.depot(), Point::ORIGIN);
        assert_eq!(c.max_distance(), 720.0);
        assert_eq!(c.tie_break(), TieBreak::GenerationOrder);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let c = SavingsConfig::default()
            .with_depot(Point::new(5.0, -5.0))
            .with_max_distance(100.0)
            .with_tie_break(TieBreak::Unstable);
        assert_eq!(c.depot(), Point::new(5.0, -5.0));
        assert_eq!(c.max_distance(), 100.0);
        assert_eq!(c.tie_break(), TieBreak::Unstable);
    }

    #[test]
    fn test_validate_rejects_bad_cap() {
        for bad in [-1.0, f64::NAN, f64::INFINITY] {
            let c = SavingsConfig::default().with_max_distance(bad);
            assert!(matches!(c.validate(), Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_validate_rejects_bad_depot() {
        let c = SavingsConfig::default().with_depot(Point::new(f64::NAN, 0.0));
        assert!(matches!(c.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_json_full() {
        let c: SavingsConfig = serde_json::from_str(
            r#"{"depot": {"x": 1.0, "y": 2.0}, "max_distance": 50.0, "tie_break": "unstable"}"#,
        )
        .expect("valid json");
        assert_eq!(c.depot(), Point::new(1.0, 2.0));
        assert_eq!(c.max_distance(), 50.0);
        assert_eq!(c.tie_break(), TieBreak::Unstable);
    }

    #[test]
    fn test_json_unknown_field() {
        let res: std::result::Result<SavingsConfig, _> =
            serde_json::from_str(r#"{"capacity": 10}"#);
        assert!(res.is_err());
    }

    #[test]
    fn test_from_json_file() {
        let path = std::env::temp_dir().join(format!(
            "load-routing-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"max_distance": -3.0}"#).expect("write temp file");
        let res = SavingsConfig::from_json_file(&path);
        fs::remove_file(&path).ok();
        assert!(matches!(res, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_from_json_file_missing() {
        let res = SavingsConfig::from_json_file("/nonexistent/load-routing.json");
        assert!(matches!(res, Err(Error::Io(_))));
    }
}
