pub mod fill;

use crate::error::{HeliumError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Path, PathBuf};

pub use fill::{fill, substitutions};

/// The report template shipped inside the binary.
pub const BUILTIN_TEMPLATE: &str = include_str!("../../templates/report_template.svg");

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    Builtin,
    File(PathBuf),
    Base64(String),
}

impl TemplateSource {
    /// Interprets a `report.template` value. Relative paths resolve against
    /// `root`; `file:` and `base64:` prefixes are recognised.
    pub fn parse(value: &str, root: &Path) -> Self {
        let value = value.trim();
        if value.is_empty() || value == "builtin" {
            return Self::Builtin;
        }
        if let Some(data) = value.strip_prefix("base64:") {
            return Self::Base64(data.to_string());
        }
        let path = value.strip_prefix("file:").unwrap_or(value);
        Self::File(root.join(path))
    }

    pub fn load(&self) -> Result<String> {
        match self {
            Self::Builtin => Ok(BUILTIN_TEMPLATE.to_string()),
            Self::File(path) => {
                if !path.exists() {
                    return Err(HeliumError::PathNotFound(path.display().to_string()));
                }
                Ok(std::fs::read_to_string(path)?)
            }
            Self::Base64(data) => {
                let compact = data
                    .chars()
                    .filter(|c| !c.is_ascii_whitespace())
                    .collect::<String>();
                let bytes = STANDARD
                    .decode(compact)
                    .map_err(|e| HeliumError::Template(format!("invalid base64 template: {e}")))?;
                String::from_utf8(bytes).map_err(|_| {
                    HeliumError::Template("base64 template is not valid UTF-8".to_string())
                })
            }
        }
    }
}
