//! Unified line diffs of canonical forms.
//!
//! Uses the `similar` crate (Myers diff algorithm) over the canonical
//! renderings of both operands. Text operands are diffed as-is so that
//! multi-line strings stay readable instead of collapsing into one escaped
//! line.

use std::fmt;

use serde::Serialize;
use similar::{Algorithm, TextDiff};
use tracing::trace;

use attest_repr::{render, to_value_lossy, CompareOptions, Value};

use crate::config::DiffConfig;

/// Lines of the unified-diff preamble that carry no information here:
/// `--- expected`, `+++ actual` and the first `@@` hunk header.
const HEADER_LINES: usize = 3;

const EXPECTED_LABEL: &str = "expected.txt";
const ACTUAL_LABEL: &str = "actual.txt";

/// The rendered difference between two values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DiffReport {
    lines: Vec<String>,
}

impl DiffReport {
    /// Returns `true` if there is nothing to show.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of lines in the report.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// The report lines, without line terminators.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of added lines.
    pub fn additions(&self) -> usize {
        self.lines.iter().filter(|l| l.starts_with('+')).count()
    }

    /// Number of removed lines.
    pub fn deletions(&self) -> usize {
        self.lines.iter().filter(|l| l.starts_with('-')).count()
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Diff two values with the default layout.
pub fn diff<T: Serialize + ?Sized>(before: &T, after: &T, options: &CompareOptions) -> DiffReport {
    diff_with_config(before, after, options, &DiffConfig::default())
}

/// Diff two values with an explicit layout.
pub fn diff_with_config<T: Serialize + ?Sized>(
    before: &T,
    after: &T,
    options: &CompareOptions,
    config: &DiffConfig,
) -> DiffReport {
    diff_values(&to_value_lossy(before), &to_value_lossy(after), options, config)
}

/// Diff two captured values.
///
/// Two text values are diffed verbatim; anything else is diffed by
/// canonical form under `options`, the same rendering equality uses.
pub fn diff_values(
    before: &Value,
    after: &Value,
    options: &CompareOptions,
    config: &DiffConfig,
) -> DiffReport {
    if let (Value::Text(lhs), Value::Text(rhs)) = (before, after) {
        return diff_lines(&format!("{lhs}\n"), &format!("{rhs}\n"), config);
    }
    let directives = options.directives_with_indent(&config.indent);
    let lhs = render(before, &directives) + "\n";
    let rhs = render(after, &directives) + "\n";
    diff_lines(&lhs, &rhs, config)
}

/// Diff two strings line by line.
pub fn diff_text(before: &str, after: &str) -> DiffReport {
    diff_values(
        &Value::Text(before.to_owned()),
        &Value::Text(after.to_owned()),
        &CompareOptions::new(),
        &DiffConfig::default(),
    )
}

fn diff_lines(lhs: &str, rhs: &str, config: &DiffConfig) -> DiffReport {
    let text_diff = TextDiff::configure()
        .algorithm(Algorithm::Myers)
        .diff_lines(lhs, rhs);
    let unified = text_diff
        .unified_diff()
        .context_radius(config.context_radius)
        .header(EXPECTED_LABEL, ACTUAL_LABEL)
        .to_string();

    let mut lines: Vec<&str> = unified.split('\n').collect();
    if lines.len() < HEADER_LINES {
        return DiffReport::default();
    }
    // The unified text ends with a newline, leaving an empty last fragment.
    if lines.last() == Some(&"") {
        lines.pop();
    }

    let report = DiffReport {
        lines: lines
            .into_iter()
            .skip(HEADER_LINES)
            .map(str::to_owned)
            .collect(),
    };
    trace!(
        lines = report.len(),
        additions = report.additions(),
        deletions = report.deletions(),
        "computed diff"
    );
    report
}
