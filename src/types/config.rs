use crate::error::HeliumError;
use crate::types::metrics::Grade;
use globset::Glob;
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROJECT_NAME: &str = "Unnamed project";
pub const DEFAULT_OUTPUT: &str = "helium.pdf";
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y %H:%M:%S";
pub const DEFAULT_MI_COUNT: usize = 3;
pub const DEFAULT_CC_COUNT: usize = 8;

/// Highest slot that fits in the `#ffXXff` placeholder color.
pub const MAX_COLOR_SLOT: usize = 0xff;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeliumConfig {
    pub project: ProjectConfig,
    pub report: ReportConfig,
    pub maintainability: MetricConfig,
    pub complexity: MetricConfig,
    pub render: RenderConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    pub name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_PROJECT_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub template: String,
    pub output: String,
    pub separate_metrics: bool,
    pub excludes: Vec<String>,
    pub date_format: String,
    pub comment_placeholders: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            template: "builtin".to_string(),
            output: DEFAULT_OUTPUT.to_string(),
            separate_metrics: false,
            excludes: Vec::new(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            comment_placeholders: false,
        }
    }
}

/// Per-metric selection settings. `count` is `None` when the metric's own
/// default applies.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_grade: Option<Grade>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_grade: Option<Grade>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub command: String,
    pub args: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            command: "rsvg-convert".to_string(),
            args: ["-f", "pdf", "-o", "{output}", "{input}"]
                .iter()
                .map(|arg| arg.to_string())
                .collect(),
        }
    }
}

/// Resolved selection window for one metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub count: usize,
    pub min_grade: Grade,
    pub max_grade: Grade,
}

impl HeliumConfig {
    pub fn with_name(name: &str) -> Self {
        let mut cfg = Self::default();
        cfg.project.name = name.to_string();
        cfg
    }

    pub fn maintainability_selection(&self) -> Selection {
        Selection {
            count: self.maintainability.count.unwrap_or(DEFAULT_MI_COUNT),
            min_grade: self.maintainability.min_grade.unwrap_or(Grade::A),
            max_grade: self.maintainability.max_grade.unwrap_or(Grade::C),
        }
    }

    pub fn complexity_selection(&self) -> Selection {
        Selection {
            count: self.complexity.count.unwrap_or(DEFAULT_CC_COUNT),
            min_grade: self.complexity.min_grade.unwrap_or(Grade::A),
            max_grade: self.complexity.max_grade.unwrap_or(Grade::F),
        }
    }

    pub fn validate(&self) -> Result<(), HeliumError> {
        let mi = self.maintainability_selection();
        let cc = self.complexity_selection();

        for (section, selection) in [("maintainability", mi), ("complexity", cc)] {
            if selection.count == 0 {
                return Err(HeliumError::ConfigParse(format!(
                    "{section}.count must be greater than 0"
                )));
            }
            if selection.min_grade > selection.max_grade {
                return Err(HeliumError::ConfigParse(format!(
                    "{section}.min_grade ({}) is worse than {section}.max_grade ({})",
                    selection.min_grade, selection.max_grade
                )));
            }
        }

        if mi.max_grade > Grade::C {
            return Err(HeliumError::ConfigParse(format!(
                "maintainability.max_grade must be between A and C (found {})",
                mi.max_grade
            )));
        }

        if mi.count + cc.count > MAX_COLOR_SLOT {
            return Err(HeliumError::ConfigParse(format!(
                "maintainability.count + complexity.count must not exceed {MAX_COLOR_SLOT} (found {})",
                mi.count + cc.count
            )));
        }

        if self.render.command.trim().is_empty() {
            return Err(HeliumError::ConfigParse(
                "render.command must be a non-empty program name".to_string(),
            ));
        }

        for pattern in &self.report.excludes {
            Glob::new(pattern).map_err(|e| {
                HeliumError::ConfigParse(format!("report.excludes contains invalid glob: {e}"))
            })?;
        }

        if self.report.date_format.trim().is_empty() {
            return Err(HeliumError::ConfigParse(
                "report.date_format must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
