use crate::analyze::grade::grade_maintainability;
use crate::error::{HeliumError, Result};
use crate::types::metrics::{Grade, MaintainabilityEntry};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum MiRecord {
    Scored { mi: f64, rank: Option<String> },
    Failed { error: String },
}

pub fn load_maintainability(path: &Path) -> Result<Vec<MaintainabilityEntry>> {
    let raw = super::read_metrics_file(path)?;
    let entries = parse_maintainability(&raw)
        .map_err(|e| HeliumError::MetricsParse(format!("{}: {}", path.display(), e)))?;
    tracing::info!(
        path = %path.display(),
        entries = entries.len(),
        "loaded maintainability metrics"
    );
    Ok(entries)
}

pub(crate) fn parse_maintainability(raw: &str) -> std::result::Result<Vec<MaintainabilityEntry>, String> {
    let records: BTreeMap<String, MiRecord> =
        serde_json::from_str(raw).map_err(|e| e.to_string())?;

    let mut entries = Vec::with_capacity(records.len());
    for (path, record) in records {
        match record {
            MiRecord::Scored { mi, rank } => {
                if !mi.is_finite() {
                    return Err(format!("non-finite maintainability index for {path}"));
                }
                let grade = match rank.as_deref() {
                    Some(rank) => rank.parse::<Grade>()?,
                    None => grade_maintainability(mi),
                };
                entries.push(MaintainabilityEntry {
                    path,
                    score: mi,
                    grade,
                });
            }
            MiRecord::Failed { error } => {
                tracing::warn!(path = %path, error = %error, "skipping file the analyzer could not score");
            }
        }
    }
    Ok(entries)
}
