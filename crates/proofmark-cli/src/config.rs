use std::fs;
use std::path::Path;

use anyhow::Context;
use proofmark_diff::{DiffOptions, HighlightStyle};
use proofmark_patch::ApplyOptions;
use serde::{Deserialize, Serialize};

/// Contents of `proofmark.toml`. Every section is optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofmarkConfig {
    pub diff: DiffOptions,
    pub apply: ApplyOptions,
    pub highlight: HighlightStyle,
}

impl ProofmarkConfig {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config = toml::from_str(&raw)
            .with_context(|| format!("parsing config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `path` when given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use proofmark_diff::{DiffAlgorithm, Granularity};

    use super::*;

    #[test]
    fn default_config() {
        let c = ProofmarkConfig::default();
        assert_eq!(c.diff, DiffOptions::default());
        assert!(!c.apply.verify_old_text);
        assert_eq!(c.highlight, HighlightStyle::default());
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[diff]
algorithm = "myers"
granularity = "coalesced"

[apply]
verify_old_text = true
"#
        )
        .unwrap();

        let c = ProofmarkConfig::load(file.path()).unwrap();
        assert_eq!(c.diff.algorithm, DiffAlgorithm::Myers);
        assert_eq!(c.diff.granularity, Granularity::Coalesced);
        assert!(c.diff.ignore_whitespace_only);
        assert!(c.apply.verify_old_text);
        assert_eq!(c.highlight, HighlightStyle::default());
    }

    #[test]
    fn highlight_section() {
        let c: ProofmarkConfig = toml::from_str(
            r#"
[highlight]
open = "<mark>"
close = "</mark>"
"#,
        )
        .unwrap();
        assert_eq!(c.highlight, HighlightStyle::new("<mark>", "</mark>"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProofmarkConfig::load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().contains("reading config"));
    }

    #[test]
    fn invalid_value_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[diff]\nalgorithm = \"lcs\"").unwrap();
        let err = ProofmarkConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("parsing config"));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(
            ProofmarkConfig::load_or_default(None).unwrap(),
            ProofmarkConfig::default()
        );
    }
}
