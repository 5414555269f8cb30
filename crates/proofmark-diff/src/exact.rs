//! Exact diff engine: ordered deletion/addition segments between two strings.
//!
//! Segments are emitted in non-decreasing order of both their source and
//! target start offsets. Concatenating the `unchanged` + `deletion` texts in
//! order rebuilds the original; `unchanged` + `addition` rebuilds the revised
//! string. When unchanged runs are not materialized they are the implicit
//! gaps between consecutive change segments.

use proofmark_types::{DiffSegment, SegmentKind, TextRange};
use similar::{capture_diff_slices, Algorithm, DiffTag};
use tracing::debug;

use crate::normalize::whitespace_equivalent;
use crate::options::{DiffAlgorithm, DiffOptions, Granularity};

/// Diff `original` against `revised` with the default options: greedy scan,
/// one segment per changed char, unchanged runs implicit, whitespace-only
/// differences suppressed.
///
/// # Examples
///
/// ```
/// use proofmark_diff::exact_diff;
///
/// assert!(exact_diff("hello", "hello").is_empty());
/// assert!(exact_diff("hello  world", "hello world").is_empty());
///
/// let segments = exact_diff("cat", "cut");
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[0].text, "a");
/// assert_eq!(segments[1].text, "u");
/// ```
pub fn exact_diff(original: &str, revised: &str) -> Vec<DiffSegment> {
    exact_diff_with(original, revised, &DiffOptions::default())
}

/// Diff `original` against `revised`.
pub fn exact_diff_with(original: &str, revised: &str, options: &DiffOptions) -> Vec<DiffSegment> {
    if original == revised && !options.include_unchanged {
        return Vec::new();
    }
    if options.ignore_whitespace_only && whitespace_equivalent(original, revised) {
        debug!("inputs differ only in whitespace");
        return Vec::new();
    }

    let a: Vec<char> = original.chars().collect();
    let b: Vec<char> = revised.chars().collect();
    let mut sink = SegmentSink::new(&a, &b, options.include_unchanged);

    match options.algorithm {
        DiffAlgorithm::Greedy => greedy_scan(&a, &b, &mut sink),
        DiffAlgorithm::Myers => myers_scan(&a, &b, &mut sink),
    }

    let segments = sink.finish();
    let segments = match options.granularity {
        Granularity::Character => segments,
        Granularity::Coalesced => coalesce(&segments),
    };

    debug!(
        algorithm = %options.algorithm,
        original_len = a.len(),
        revised_len = b.len(),
        segments = segments.len(),
        "computed exact diff"
    );
    segments
}

/// Synchronized left-to-right scan with one cursor per string.
///
/// On a mismatch the char under each cursor that is not yet exhausted is
/// reported (deletion first) and both cursors step. This never looks ahead,
/// so it is not a longest-common-subsequence alignment.
fn greedy_scan(a: &[char], b: &[char], sink: &mut SegmentSink<'_>) {
    let (mut i, mut j) = (0, 0);
    while i < a.len() || j < b.len() {
        if i < a.len() && j < b.len() && a[i] == b[j] {
            sink.matched(i, j);
            i += 1;
            j += 1;
            continue;
        }
        if i < a.len() {
            sink.deleted(i, j);
            i += 1;
        }
        if j < b.len() {
            sink.added(i, j);
            j += 1;
        }
    }
}

/// Minimal alignment via Myers; a replaced run reports all deletions before
/// the additions.
///
/// Only the op lengths are taken from `similar`. Positions come from our own
/// cursors, since compacted ops can carry anchors that trail the previous
/// equal run.
fn myers_scan(a: &[char], b: &[char], sink: &mut SegmentSink<'_>) {
    let (mut i, mut j) = (0, 0);
    for op in capture_diff_slices(Algorithm::Myers, a, b) {
        let (tag, old, new) = op.as_tag_tuple();
        match tag {
            DiffTag::Equal => {
                for _ in 0..old.len() {
                    if i < a.len() && j < b.len() && a[i] == b[j] {
                        sink.matched(i, j);
                        i += 1;
                        j += 1;
                        continue;
                    }
                    if i < a.len() {
                        sink.deleted(i, j);
                        i += 1;
                    }
                    if j < b.len() {
                        sink.added(i, j);
                        j += 1;
                    }
                }
            }
            DiffTag::Delete | DiffTag::Insert | DiffTag::Replace => {
                for _ in 0..old.len() {
                    if i < a.len() {
                        sink.deleted(i, j);
                        i += 1;
                    }
                }
                for _ in 0..new.len() {
                    if j < b.len() {
                        sink.added(i, j);
                        j += 1;
                    }
                }
            }
        }
    }
    // Anything the ops left unaccounted for is a trailing replacement.
    while i < a.len() {
        sink.deleted(i, j);
        i += 1;
    }
    while j < b.len() {
        sink.added(i, j);
        j += 1;
    }
}

/// Collects single-char segments and tracks the current unchanged run.
struct SegmentSink<'a> {
    a: &'a [char],
    b: &'a [char],
    include_unchanged: bool,
    run_start: Option<(usize, usize)>,
    segments: Vec<DiffSegment>,
}

impl<'a> SegmentSink<'a> {
    fn new(a: &'a [char], b: &'a [char], include_unchanged: bool) -> Self {
        Self {
            a,
            b,
            include_unchanged,
            run_start: None,
            segments: Vec::new(),
        }
    }

    /// `a[i] == b[j]` are aligned.
    fn matched(&mut self, i: usize, j: usize) {
        if self.run_start.is_none() {
            self.run_start = Some((i, j));
        }
    }

    /// `a[i]` is deleted at point `j` of the revised string.
    fn deleted(&mut self, i: usize, j: usize) {
        self.close_run(i, j);
        self.segments.push(DiffSegment::deletion(
            self.a[i].to_string(),
            TextRange::new(i, i + 1),
            j,
        ));
    }

    /// `b[j]` is inserted at point `i` of the original string.
    fn added(&mut self, i: usize, j: usize) {
        self.close_run(i, j);
        self.segments.push(DiffSegment::addition(
            self.b[j].to_string(),
            i,
            TextRange::new(j, j + 1),
        ));
    }

    /// End the pending unchanged run just before `(i, j)`.
    fn close_run(&mut self, i: usize, j: usize) {
        if let Some((i0, j0)) = self.run_start.take() {
            if self.include_unchanged && i > i0 {
                self.segments.push(DiffSegment::unchanged(
                    self.a[i0..i].iter().collect::<String>(),
                    TextRange::new(i0, i),
                    TextRange::new(j0, j),
                ));
            }
        }
    }

    fn finish(mut self) -> Vec<DiffSegment> {
        self.close_run(self.a.len(), self.b.len());
        self.segments
    }
}

/// Collapse each maximal contiguous run of change segments into at most one
/// deletion followed by at most one addition.
///
/// The deletion spans the run's source range and sits at the run's first
/// target offset; the addition spans the run's target range and sits at the
/// run's source end. `unchanged` segments pass through untouched. Already
/// coalesced input is returned unchanged.
///
/// Feeding segments that violate the ordering/contiguity invariants (for
/// example overlapping ranges) gives unspecified output.
pub fn coalesce(segments: &[DiffSegment]) -> Vec<DiffSegment> {
    let mut out = Vec::with_capacity(segments.len());
    for run in runs(segments) {
        match run {
            Run::Unchanged(segment) => out.push(segment.clone()),
            Run::Changed(hunk) => hunk.emit(&mut out),
        }
    }
    out
}

/// Group the change segments into hunks, dropping unchanged runs.
pub fn change_hunks(segments: &[DiffSegment]) -> Vec<ChangeHunk> {
    runs(segments)
        .into_iter()
        .filter_map(|run| match run {
            Run::Changed(hunk) => Some(hunk),
            Run::Unchanged(_) => None,
        })
        .collect()
}

/// A maximal contiguous run of changes: `deleted` replaced by `added`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeHunk {
    /// Removed span of the original (empty for a pure insertion).
    pub source: TextRange,
    /// Inserted span of the revised string (empty for a pure deletion).
    pub target: TextRange,
    pub deleted: String,
    pub added: String,
}

impl ChangeHunk {
    fn at(source_start: usize, target_start: usize) -> Self {
        Self {
            source: TextRange::point(source_start),
            target: TextRange::point(target_start),
            deleted: String::new(),
            added: String::new(),
        }
    }

    fn touches(&self, segment: &DiffSegment) -> bool {
        segment.source.start == self.source.end && segment.target.start == self.target.end
    }

    fn absorb(&mut self, segment: &DiffSegment) {
        match segment.kind {
            SegmentKind::Deletion => {
                self.deleted.push_str(&segment.text);
                self.source.end = segment.source.end;
            }
            SegmentKind::Addition => {
                self.added.push_str(&segment.text);
                self.target.end = segment.target.end;
            }
            SegmentKind::Unchanged => {}
        }
    }

    fn emit(self, out: &mut Vec<DiffSegment>) {
        if !self.deleted.is_empty() {
            out.push(DiffSegment::deletion(
                self.deleted,
                self.source,
                self.target.start,
            ));
        }
        if !self.added.is_empty() {
            out.push(DiffSegment::addition(
                self.added,
                self.source.end,
                self.target,
            ));
        }
    }
}

enum Run<'a> {
    Unchanged(&'a DiffSegment),
    Changed(ChangeHunk),
}

fn runs(segments: &[DiffSegment]) -> Vec<Run<'_>> {
    let mut out = Vec::new();
    let mut hunk: Option<ChangeHunk> = None;

    for segment in segments {
        if !segment.is_change() {
            if let Some(h) = hunk.take() {
                out.push(Run::Changed(h));
            }
            out.push(Run::Unchanged(segment));
            continue;
        }
        if let Some(h) = hunk.as_mut().filter(|h| h.touches(segment)) {
            h.absorb(segment);
            continue;
        }
        if let Some(h) = hunk.take() {
            out.push(Run::Changed(h));
        }
        let mut h = ChangeHunk::at(segment.source.start, segment.target.start);
        h.absorb(segment);
        hunk = Some(h);
    }
    if let Some(h) = hunk {
        out.push(Run::Changed(h));
    }
    out
}
