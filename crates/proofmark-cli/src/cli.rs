use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use proofmark_diff::{DiffAlgorithm, DiffOptions, Granularity};

#[derive(Parser)]
#[command(
    name = "proofmark",
    about = "Proofmark — exact text diffs and positional corrections",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Path to a proofmark.toml configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum AlgorithmArg {
    Greedy,
    Myers,
}

impl From<AlgorithmArg> for DiffAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Greedy => DiffAlgorithm::Greedy,
            AlgorithmArg::Myers => DiffAlgorithm::Myers,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Show deletion/addition segments between two files
    Diff(DiffArgs),
    /// List corrections between an original and a revised file
    Corrections(CorrectionsArgs),
    /// Print the corrected text with changed spans marked
    Highlight(HighlightArgs),
    /// Apply a JSON list of positional edits to a file
    Apply(ApplyArgs),
    /// Render a JSON list of positional edits as inline review markup
    Annotate(AnnotateArgs),
    /// Score the textual overlap of two strings
    Similarity(SimilarityArgs),
    /// Print a string with its whitespace canonicalized
    Normalize(NormalizeArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub original: PathBuf,
    pub revised: PathBuf,
    #[arg(long)]
    pub algorithm: Option<AlgorithmArg>,
    /// Merge contiguous single-char changes into one deletion and addition
    #[arg(long)]
    pub coalesce: bool,
    /// Include unchanged segments
    #[arg(long)]
    pub unchanged: bool,
    /// Report differences even when the files only differ in whitespace
    #[arg(long)]
    pub keep_whitespace: bool,
}

impl DiffArgs {
    /// Layer the command-line flags over the configured options.
    pub fn options(&self, base: &DiffOptions) -> DiffOptions {
        let mut options = base.clone();
        if let Some(algorithm) = self.algorithm {
            options.algorithm = algorithm.into();
        }
        if self.coalesce {
            options.granularity = Granularity::Coalesced;
        }
        if self.unchanged {
            options.include_unchanged = true;
        }
        if self.keep_whitespace {
            options.ignore_whitespace_only = false;
        }
        options
    }
}

#[derive(Args)]
pub struct CorrectionsArgs {
    pub original: PathBuf,
    pub revised: PathBuf,
    #[arg(long)]
    pub algorithm: Option<AlgorithmArg>,
    #[arg(long)]
    pub keep_whitespace: bool,
}

impl CorrectionsArgs {
    pub fn options(&self, base: &DiffOptions) -> DiffOptions {
        let mut options = base.clone();
        if let Some(algorithm) = self.algorithm {
            options.algorithm = algorithm.into();
        }
        if self.keep_whitespace {
            options.ignore_whitespace_only = false;
        }
        options
    }
}

#[derive(Args)]
pub struct HighlightArgs {
    pub original: PathBuf,
    pub corrected: PathBuf,
    #[arg(long)]
    pub open: Option<String>,
    #[arg(long)]
    pub close: Option<String>,
}

#[derive(Args)]
pub struct ApplyArgs {
    pub original: PathBuf,
    pub edits: PathBuf,
    /// Reject edits whose old text does not match the original
    #[arg(long)]
    pub verify: bool,
}

#[derive(Args)]
pub struct AnnotateArgs {
    pub original: PathBuf,
    pub edits: PathBuf,
}

#[derive(Args)]
pub struct SimilarityArgs {
    pub a: String,
    pub b: String,
}

#[derive(Args)]
pub struct NormalizeArgs {
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_diff_flags() {
        let cli = Cli::try_parse_from([
            "proofmark",
            "diff",
            "a.txt",
            "b.txt",
            "--algorithm",
            "myers",
            "--coalesce",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        let Command::Diff(args) = cli.command else {
            panic!("expected diff command");
        };
        let options = args.options(&DiffOptions::default());
        assert_eq!(options.algorithm, DiffAlgorithm::Myers);
        assert_eq!(options.granularity, Granularity::Coalesced);
        assert!(!options.include_unchanged);
        assert!(options.ignore_whitespace_only);
    }

    #[test]
    fn flags_do_not_reset_configured_options() {
        let base = DiffOptions::default()
            .with_algorithm(DiffAlgorithm::Myers)
            .with_unchanged(true);
        let cli = Cli::try_parse_from(["proofmark", "diff", "a", "b", "--keep-whitespace"]).unwrap();
        let Command::Diff(args) = cli.command else {
            panic!("expected diff command");
        };
        let options = args.options(&base);
        assert_eq!(options.algorithm, DiffAlgorithm::Myers);
        assert!(options.include_unchanged);
        assert!(!options.ignore_whitespace_only);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "proofmark",
            "apply",
            "doc.txt",
            "edits.json",
            "--verify",
            "--config",
            "proofmark.toml",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("proofmark.toml")));
        assert!(matches!(cli.command, Command::Apply(ApplyArgs { verify: true, .. })));
    }

    #[test]
    fn rejects_unknown_algorithm() {
        assert!(Cli::try_parse_from(["proofmark", "diff", "a", "b", "--algorithm", "lcs"]).is_err());
    }
}
