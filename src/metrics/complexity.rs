use crate::analyze::grade::grade_complexity;
use crate::error::{HeliumError, Result};
use crate::types::metrics::{ComplexityEntry, FunctionKind};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CcRecord {
    Blocks(Vec<Block>),
    Failed { error: String },
}

#[derive(Debug, Deserialize)]
struct Block {
    #[serde(rename = "type")]
    kind: String,
    name: String,
    complexity: u32,
    lineno: Option<u32>,
    #[serde(default)]
    closures: Vec<Block>,
}

pub fn load_complexity(path: &Path) -> Result<Vec<ComplexityEntry>> {
    let raw = super::read_metrics_file(path)?;
    let entries = parse_complexity(&raw)
        .map_err(|e| HeliumError::MetricsParse(format!("{}: {}", path.display(), e)))?;
    tracing::info!(
        path = %path.display(),
        entries = entries.len(),
        "loaded complexity metrics"
    );
    Ok(entries)
}

/// Only function-like blocks are kept. Grades are recomputed from the
/// complexity so every entry uses the same A-F scale.
pub(crate) fn parse_complexity(raw: &str) -> std::result::Result<Vec<ComplexityEntry>, String> {
    let records: BTreeMap<String, CcRecord> =
        serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut entries = Vec::new();
    for (path, record) in records {
        let blocks = match record {
            CcRecord::Blocks(blocks) => blocks,
            CcRecord::Failed { error } => {
                tracing::warn!(path = %path, error = %error, "skipping file the analyzer could not score");
                continue;
            }
        };

        push_blocks(&path, blocks, &mut entries);
    }
    Ok(entries)
}

/// Closures are ranked as functions in their own right, right after their parent.
fn push_blocks(path: &str, blocks: Vec<Block>, entries: &mut Vec<ComplexityEntry>) {
    for block in blocks {
        let kind = match block.kind.as_str() {
            "function" => FunctionKind::Function,
            "method" => FunctionKind::Method,
            _ => continue,
        };
        entries.push(ComplexityEntry {
            path: path.to_string(),
            name: block.name,
            kind,
            complexity: block.complexity,
            grade: grade_complexity(block.complexity),
            line: block.lineno,
        });
        push_blocks(path, block.closures, entries);
    }
}
