use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use proofmark_diff::{corrections, exact_diff_with, highlight, normalize, similarity};
use proofmark_patch::{annotate, apply_edits_with};
use proofmark_types::{DiffSegment, PositionalEdit, SegmentKind};
use serde::Serialize;
use serde_json::json;

use crate::cli::*;
use crate::config::ProofmarkConfig;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = ProofmarkConfig::load_or_default(cli.config.as_deref())?;
    let format = cli.format;
    match cli.command {
        Command::Diff(args) => cmd_diff(args, &config, format),
        Command::Corrections(args) => cmd_corrections(args, &config, format),
        Command::Highlight(args) => cmd_highlight(args, &config, format),
        Command::Apply(args) => cmd_apply(args, &config, format),
        Command::Annotate(args) => cmd_annotate(args, format),
        Command::Similarity(args) => cmd_similarity(args, format),
        Command::Normalize(args) => cmd_normalize(args, format),
    }
}

fn cmd_diff(args: DiffArgs, config: &ProofmarkConfig, format: OutputFormat) -> anyhow::Result<()> {
    let original = read_text(&args.original)?;
    let revised = read_text(&args.revised)?;
    let segments = exact_diff_with(&original, &revised, &args.options(&config.diff));

    if format == OutputFormat::Json {
        return print_json(&segments);
    }
    if segments.is_empty() {
        println!("No differences.");
        return Ok(());
    }
    for segment in &segments {
        println!("{}", render_segment(segment));
    }
    let deletions = segments.iter().filter(|s| s.kind == SegmentKind::Deletion).count();
    let additions = segments.iter().filter(|s| s.kind == SegmentKind::Addition).count();
    println!(
        "\n{} deletions, {} additions",
        deletions.to_string().red(),
        additions.to_string().green()
    );
    Ok(())
}

fn render_segment(segment: &DiffSegment) -> String {
    match segment.kind {
        SegmentKind::Deletion => format!(
            "{} {} {:?}",
            "-".red().bold(),
            segment.source.to_string().dimmed(),
            segment.text
        ),
        SegmentKind::Addition => format!(
            "{} {} {:?}",
            "+".green().bold(),
            segment.target.to_string().dimmed(),
            segment.text
        ),
        SegmentKind::Unchanged => format!(
            "  {} {:?}",
            segment.source.to_string().dimmed(),
            segment.text
        ),
    }
}

fn cmd_corrections(
    args: CorrectionsArgs,
    config: &ProofmarkConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let original = read_text(&args.original)?;
    let revised = read_text(&args.revised)?;
    let records = corrections(&original, &revised, &args.options(&config.diff));

    if format == OutputFormat::Json {
        return print_json(&records);
    }
    if records.is_empty() {
        println!("No corrections.");
        return Ok(());
    }
    for record in &records {
        println!(
            "{}  {:<11} {} → {}",
            record.location.to_string().yellow(),
            record.kind.to_string().cyan(),
            format!("{:?}", record.original_text).red(),
            format!("{:?}", record.corrected_text).green()
        );
    }
    Ok(())
}

fn cmd_highlight(
    args: HighlightArgs,
    config: &ProofmarkConfig,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let original = read_text(&args.original)?;
    let corrected = read_text(&args.corrected)?;
    let mut style = config.highlight.clone();
    if let Some(open) = args.open {
        style.open = open;
    }
    if let Some(close) = args.close {
        style.close = close;
    }

    let marked = highlight(&original, &corrected, &style);
    match format {
        OutputFormat::Json => print_json(&json!({ "highlighted": marked })),
        OutputFormat::Text => {
            println!("{marked}");
            Ok(())
        }
    }
}

fn cmd_apply(args: ApplyArgs, config: &ProofmarkConfig, format: OutputFormat) -> anyhow::Result<()> {
    let original = read_text(&args.original)?;
    let edits = read_edits(&args.edits)?;
    let mut options = config.apply.clone();
    if args.verify {
        options.verify_old_text = true;
    }

    let text = apply_edits_with(&original, &edits, &options)
        .with_context(|| format!("applying edits from {}", args.edits.display()))?;
    match format {
        OutputFormat::Json => print_json(&json!({ "text": text, "edits": edits.len() })),
        OutputFormat::Text => {
            println!("{text}");
            Ok(())
        }
    }
}

fn cmd_annotate(args: AnnotateArgs, format: OutputFormat) -> anyhow::Result<()> {
    let original = read_text(&args.original)?;
    let edits = read_edits(&args.edits)?;
    let marked = annotate(&original, &edits)
        .with_context(|| format!("annotating edits from {}", args.edits.display()))?;
    match format {
        OutputFormat::Json => print_json(&json!({ "annotated": marked })),
        OutputFormat::Text => {
            println!("{marked}");
            Ok(())
        }
    }
}

fn cmd_similarity(args: SimilarityArgs, format: OutputFormat) -> anyhow::Result<()> {
    let score = similarity(&args.a, &args.b);
    match format {
        OutputFormat::Json => print_json(&json!({ "similarity": score })),
        OutputFormat::Text => {
            println!("{}", format!("{score:.4}").bold());
            Ok(())
        }
    }
}

fn cmd_normalize(args: NormalizeArgs, format: OutputFormat) -> anyhow::Result<()> {
    let normalized = normalize(&args.text);
    match format {
        OutputFormat::Json => print_json(&json!({ "normalized": normalized })),
        OutputFormat::Text => {
            println!("{normalized}");
            Ok(())
        }
    }
}

fn read_text(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn read_edits(path: &Path) -> anyhow::Result<Vec<PositionalEdit>> {
    let raw = read_text(path)?;
    serde_json::from_str(&raw).with_context(|| format!("decoding edit list {}", path.display()))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use proofmark_types::TextRange;

    use super::*;

    #[test]
    fn reads_edit_lists_with_short_field_names() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"pos": 6, "oldText": "搓", "newText": "错"}}, {{"pos": 9, "oldText": "", "newText": "此处逻辑不通，"}}]"#
        )
        .unwrap();
        let edits = read_edits(file.path()).unwrap();
        assert_eq!(edits.len(), 2);
        assert_eq!(edits[1], PositionalEdit::insert(9, "此处逻辑不通，"));
    }

    #[test]
    fn malformed_edit_list_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"[{{"position": -3}}]"#).unwrap();
        let err = read_edits(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("decoding edit list"));
    }

    #[test]
    fn renders_segments_with_ranges() {
        colored::control::set_override(false);
        let del = DiffSegment::deletion("world", TextRange::new(6, 11), 6);
        let add = DiffSegment::addition("there", 11, TextRange::new(6, 11));
        assert_eq!(render_segment(&del), r#"- [6, 11) "world""#);
        assert_eq!(render_segment(&add), r#"+ [6, 11) "there""#);
    }
}
