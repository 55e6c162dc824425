pub mod grade;

use crate::error::{HeliumError, Result};
use crate::types::config::Selection;
use crate::types::metrics::{ComplexityEntry, Grade, MaintainabilityEntry};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Worst entries for both metrics, in report order.
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked {
    pub maintainability: Vec<MaintainabilityEntry>,
    pub complexity: Vec<ComplexityEntry>,
}

/// Selects the lowest-maintainability files, then the most complex functions.
/// Complexity candidates are limited to the selected files unless
/// `separate_metrics` is set.
pub fn rank(
    maintainability: Vec<MaintainabilityEntry>,
    complexity: Vec<ComplexityEntry>,
    mi: Selection,
    cc: Selection,
    separate_metrics: bool,
) -> Result<Ranked> {
    let worst_files = select_maintainability(maintainability, mi)?;

    let candidates = if separate_metrics {
        complexity
    } else {
        let selected = worst_files
            .iter()
            .map(|entry| entry.path.as_str())
            .collect::<HashSet<_>>();
        complexity
            .into_iter()
            .filter(|entry| selected.contains(entry.path.as_str()))
            .collect()
    };
    let worst_functions = select_complexity(candidates, cc)?;

    tracing::info!(
        maintainability = worst_files.len(),
        complexity = worst_functions.len(),
        separate_metrics,
        "ranked metrics"
    );

    Ok(Ranked {
        maintainability: worst_files,
        complexity: worst_functions,
    })
}

pub fn select_maintainability(
    entries: Vec<MaintainabilityEntry>,
    selection: Selection,
) -> Result<Vec<MaintainabilityEntry>> {
    let candidates = within_grades(entries, selection, |entry: &MaintainabilityEntry| {
        entry.grade
    });
    top_k(
        candidates,
        selection.count,
        "maintainability",
        |a: &MaintainabilityEntry, b: &MaintainabilityEntry| a.score.total_cmp(&b.score),
    )
}

pub fn select_complexity(
    entries: Vec<ComplexityEntry>,
    selection: Selection,
) -> Result<Vec<ComplexityEntry>> {
    let candidates = within_grades(entries, selection, |entry: &ComplexityEntry| entry.grade);
    top_k(
        candidates,
        selection.count,
        "cyclomatic complexity",
        |a: &ComplexityEntry, b: &ComplexityEntry| b.complexity.cmp(&a.complexity),
    )
}

fn within_grades<T>(
    entries: Vec<T>,
    selection: Selection,
    grade_of: impl Fn(&T) -> Grade,
) -> Vec<T> {
    entries
        .into_iter()
        .filter(|entry| {
            let grade = grade_of(entry);
            grade >= selection.min_grade && grade <= selection.max_grade
        })
        .collect()
}

/// Stable sort by `worst_first`, then keep the first `count`.
fn top_k<T>(
    mut entries: Vec<T>,
    count: usize,
    metric: &'static str,
    worst_first: impl Fn(&T, &T) -> Ordering,
) -> Result<Vec<T>> {
    if entries.len() < count {
        return Err(HeliumError::InsufficientResults {
            metric,
            required: count,
        });
    }
    entries.sort_by(|a, b| worst_first(a, b));
    entries.truncate(count);
    Ok(entries)
}
