//! Result files.
//!
//! The text format is line oriented:
//!
//! ```text
//! graph_load_time:0.0021
//! n_generated:5
//! n_expanded:3
//! n_domCheck:4
//! rt_initHeu:1.2e-5
//! rt_search:3.1e-5
//! N:2
//! Label: 3
//! [5,6,]
//! 0 1 3
//! Label: 4
//! [6,5,]
//! 0 2 3
//! ```
//!
//! Each solution is three lines: its label id, its cost vector with a
//! trailing comma, and its vertex path with a trailing space. Costs are
//! written with the shortest representation that parses back to the same
//! `f64`, so a written file reads back bit-identical.

use std::fmt::Write as _;
use std::path::Path;
use std::time::Duration;

use emoa_kernel::cost::CostVector;
use emoa_search::{SearchResult, SearchStats, Solution};

use crate::error::HarnessError;

/// Contents of a parsed result text file.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultFile {
    /// `None` if the header line is not a `graph_load_time:` line.
    pub graph_load_time: Option<f64>,
    /// Frontier-size and open-list fields are not stored in the text format
    /// and read as 0. The JSON output carries them.
    pub stats: SearchStats,
    pub solutions: Vec<Solution>,
}

/// Render `result` in the text format.
#[must_use]
pub fn render_result_text(result: &SearchResult, graph_load_time: Duration) -> String {
    let s = &result.stats;
    let mut out = String::new();
    let _ = writeln!(out, "graph_load_time:{}", graph_load_time.as_secs_f64());
    let _ = writeln!(out, "n_generated:{}", s.n_generated);
    let _ = writeln!(out, "n_expanded:{}", s.n_expanded);
    let _ = writeln!(out, "n_domCheck:{}", s.n_dom_checks);
    let _ = writeln!(out, "rt_initHeu:{}", s.rt_init_heuristic);
    let _ = writeln!(out, "rt_search:{}", s.rt_search);
    let _ = writeln!(out, "N:{}", result.solutions.len());
    for sol in &result.solutions {
        let _ = writeln!(out, "Label: {}", sol.label_id);
        out.push('[');
        for c in sol.cost.as_slice() {
            let _ = write!(out, "{c},");
        }
        out.push_str("]\n");
        for v in &sol.path {
            let _ = write!(out, "{v} ");
        }
        out.push('\n');
    }
    out
}

/// Write `result` to `path` in the text format.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] if the file cannot be written.
pub fn write_result_text(
    path: &Path,
    result: &SearchResult,
    graph_load_time: Duration,
) -> Result<(), HarnessError> {
    std::fs::write(path, render_result_text(result, graph_load_time))
        .map_err(|e| HarnessError::io(path, e))
}

/// Write `result` to `path` as pretty JSON.
///
/// # Errors
///
/// Returns [`HarnessError::Json`] or [`HarnessError::Io`].
pub fn write_result_json(path: &Path, result: &SearchResult) -> Result<(), HarnessError> {
    let json = serde_json::to_string_pretty(result).map_err(|e| HarnessError::json(path, e))?;
    std::fs::write(path, json).map_err(|e| HarnessError::io(path, e))
}

/// Read a text result file.
///
/// # Errors
///
/// Returns [`HarnessError::Io`] or [`HarnessError::ResultFormat`].
pub fn read_result_text(path: &Path) -> Result<ResultFile, HarnessError> {
    let text = std::fs::read_to_string(path).map_err(|e| HarnessError::io(path, e))?;
    parse_result_text(&text)
}

/// Parse the text format.
///
/// # Errors
///
/// Returns [`HarnessError::ResultFormat`] naming the first bad line.
pub fn parse_result_text(text: &str) -> Result<ResultFile, HarnessError> {
    let mut lines = Cursor {
        lines: text.lines(),
        line: 0,
    };

    let header = lines.next_line()?;
    let graph_load_time = header
        .strip_prefix("graph_load_time:")
        .and_then(|v| v.trim().parse().ok());

    let n_generated = lines.field("n_generated")?;
    let n_expanded = lines.field("n_expanded")?;
    let n_dom_checks = lines.field("n_domCheck")?;
    let rt_init_heuristic = lines.field("rt_initHeu")?;
    let rt_search = lines.field("rt_search")?;
    let count: usize = lines.field("N")?;

    let mut solutions = Vec::with_capacity(count);
    for _ in 0..count {
        let label_id = lines.field("Label")?;

        let cost_line = lines.next_line()?;
        let inner = cost_line
            .trim()
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .ok_or_else(|| lines.error(format!("expected [c1,c2,...,], got {cost_line:?}")))?;
        let cost = inner
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| s.parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| lines.error(format!("bad cost component: {e}")))?;

        let path_line = lines.next_line()?;
        let path = path_line
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<usize>, _>>()
            .map_err(|e| lines.error(format!("bad path vertex: {e}")))?;

        solutions.push(Solution {
            label_id,
            path,
            cost: CostVector::from(cost),
        });
    }

    Ok(ResultFile {
        graph_load_time,
        stats: SearchStats {
            n_generated,
            n_expanded,
            n_dom_checks,
            rt_init_heuristic,
            rt_search,
            ..SearchStats::default()
        },
        solutions,
    })
}

struct Cursor<'a> {
    lines: std::str::Lines<'a>,
    line: usize,
}

impl<'a> Cursor<'a> {
    fn error(&self, detail: String) -> HarnessError {
        HarnessError::ResultFormat {
            line: self.line,
            detail,
        }
    }

    fn next_line(&mut self) -> Result<&'a str, HarnessError> {
        self.line += 1;
        self.lines
            .next()
            .ok_or_else(|| self.error("unexpected end of file".into()))
    }

    fn field<T>(&mut self, key: &str) -> Result<T, HarnessError>
    where
        T: std::str::FromStr,
        T::Err: std::fmt::Display,
    {
        let line = self.next_line()?;
        let value = line
            .split_once(':')
            .filter(|(k, _)| k.trim() == key)
            .map(|(_, v)| v.trim())
            .ok_or_else(|| self.error(format!("expected {key}:<value>, got {line:?}")))?;
        value
            .parse()
            .map_err(|e| self.error(format!("bad {key} value {value:?}: {e}")))
    }
}
