pub mod json;
pub mod md;

use crate::analyze::Ranked;
use crate::error::{HeliumError, Result};
use crate::types::config::HeliumConfig;
use crate::types::report::QualityReport;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, TimeZone};
use std::fmt::Display;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn build<Tz>(config: &HeliumConfig, ranked: Ranked, now: DateTime<Tz>) -> Result<QualityReport>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    Ok(QualityReport {
        project_name: config.project.name.clone(),
        generated_at: format_timestamp(&now, &config.report.date_format)?,
        maintainability: ranked.maintainability,
        complexity: ranked.complexity,
    })
}

/// Formats `now` with a strftime pattern, rejecting patterns chrono cannot
/// render.
pub fn format_timestamp<Tz>(now: &DateTime<Tz>, pattern: &str) -> Result<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let items = StrftimeItems::new(pattern).collect::<Vec<_>>();
    if items.iter().any(|item| matches!(item, Item::Error)) {
        return Err(HeliumError::ConfigParse(format!(
            "report.date_format is not a valid strftime pattern: {pattern}"
        )));
    }
    Ok(now.format_with_items(items.iter()).to_string())
}

pub fn render(report: &QualityReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => json::to_json(report).map_err(HeliumError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
