use std::fmt;

use serde::{Deserialize, Serialize};

/// Alignment strategy used by the exact diff engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffAlgorithm {
    /// Left-to-right synchronized scan. Cheap and predictable, but over-reports
    /// changes after an insertion or deletion shifts the texts out of step.
    #[default]
    Greedy,
    /// Character-level Myers alignment (minimal edit script).
    Myers,
}

impl fmt::Display for DiffAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffAlgorithm::Greedy => f.write_str("greedy"),
            DiffAlgorithm::Myers => f.write_str("myers"),
        }
    }
}

/// Size of the change segments the engine emits.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One segment per changed char.
    #[default]
    Character,
    /// At most one deletion and one addition per contiguous run of changes.
    Coalesced,
}

/// Configuration for [`exact_diff_with`](crate::exact_diff_with).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Alignment strategy.
    pub algorithm: DiffAlgorithm,
    /// Segment granularity.
    pub granularity: Granularity,
    /// Whether `unchanged` segments are materialized in the output.
    pub include_unchanged: bool,
    /// When `true`, two strings that differ only in whitespace produce an
    /// empty diff.
    pub ignore_whitespace_only: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            algorithm: DiffAlgorithm::Greedy,
            granularity: Granularity::Character,
            include_unchanged: false,
            ignore_whitespace_only: true,
        }
    }
}

impl DiffOptions {
    /// Report every literal difference, including whitespace-only ones, and
    /// materialize unchanged runs so either input can be rebuilt from the
    /// segments alone.
    pub fn literal() -> Self {
        Self {
            include_unchanged: true,
            ignore_whitespace_only: false,
            ..Default::default()
        }
    }

    pub fn with_algorithm(mut self, algorithm: DiffAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    pub fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }

    pub fn with_unchanged(mut self, include: bool) -> Self {
        self.include_unchanged = include;
        self
    }

    pub fn with_ignore_whitespace_only(mut self, ignore: bool) -> Self {
        self.ignore_whitespace_only = ignore;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let o = DiffOptions::default();
        assert_eq!(o.algorithm, DiffAlgorithm::Greedy);
        assert_eq!(o.granularity, Granularity::Character);
        assert!(!o.include_unchanged);
        assert!(o.ignore_whitespace_only);
    }

    #[test]
    fn literal_options() {
        let o = DiffOptions::literal();
        assert!(o.include_unchanged);
        assert!(!o.ignore_whitespace_only);
        assert_eq!(o.algorithm, DiffAlgorithm::Greedy);
    }

    #[test]
    fn builder_chain() {
        let o = DiffOptions::default()
            .with_algorithm(DiffAlgorithm::Myers)
            .with_granularity(Granularity::Coalesced)
            .with_unchanged(true)
            .with_ignore_whitespace_only(false);
        assert_eq!(o.algorithm, DiffAlgorithm::Myers);
        assert_eq!(o.granularity, Granularity::Coalesced);
        assert!(o.include_unchanged);
        assert!(!o.ignore_whitespace_only);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let o: DiffOptions = toml::from_str(r#"algorithm = "myers""#).unwrap();
        assert_eq!(o.algorithm, DiffAlgorithm::Myers);
        assert_eq!(o.granularity, Granularity::Character);
        assert!(o.ignore_whitespace_only);
    }

    #[test]
    fn algorithm_display() {
        assert_eq!(DiffAlgorithm::Greedy.to_string(), "greedy");
        assert_eq!(DiffAlgorithm::Myers.to_string(), "myers");
    }
}
