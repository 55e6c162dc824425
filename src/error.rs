use thiserror::Error;

#[derive(Error, Debug)]
pub enum HeliumError {
    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("metrics parse error: {0}")]
    MetricsParse(String),

    #[error("Not enough {metric} results to generate report (minimum {required} required)")]
    InsufficientResults {
        metric: &'static str,
        required: usize,
    },

    #[error("template error: {0}")]
    Template(String),

    #[error("renderer failed: {0}")]
    Render(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HeliumError>;
