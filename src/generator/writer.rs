use crate::analyze;
use crate::cli::{MetricsArgs, ReportCommand};
use crate::config;
use crate::error::{HeliumError, Result};
use crate::metrics;
use crate::render;
use crate::report;
use crate::template::{self, TemplateSource};
use crate::types::config::HeliumConfig;
use crate::types::report::QualityReport;
use chrono::Local;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the report ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportArtifacts {
    pub svg: Option<PathBuf>,
    pub rendered: Option<PathBuf>,
}

/// Loads config and metrics for `args.path` and ranks them.
pub fn prepare(args: &MetricsArgs) -> Result<(HeliumConfig, QualityReport)> {
    if !args.path.exists() {
        return Err(HeliumError::PathNotFound(args.path.display().to_string()));
    }

    let loaded = config::load_config(&args.path)?;
    if loaded.is_none() {
        tracing::warn!(
            "no {} found in {}; using defaults",
            config::DEFAULT_CONFIG_FILE,
            args.path.display()
        );
    }
    let mut cfg = loaded.unwrap_or_default();
    if args.separate_metrics {
        cfg.report.separate_metrics = true;
    }

    let excludes = metrics::build_excludes(&cfg.report.excludes)?;
    let maintainability =
        metrics::apply_excludes(metrics::load_maintainability(&args.maintainability)?, &excludes);
    let complexity =
        metrics::apply_excludes(metrics::load_complexity(&args.complexity)?, &excludes);

    let ranked = analyze::rank(
        maintainability,
        complexity,
        cfg.maintainability_selection(),
        cfg.complexity_selection(),
        cfg.report.separate_metrics,
    )?;
    let quality_report = report::build(&cfg, ranked, Local::now())?;
    Ok((cfg, quality_report))
}

pub fn execute_report(cmd: &ReportCommand) -> Result<ReportArtifacts> {
    let (cfg, quality_report) = prepare(&cmd.metrics)?;
    let root = cmd.metrics.path.as_path();

    // Command-line paths follow the working directory like --output does;
    // the configured template is relative to the project root.
    let source = match &cmd.template {
        Some(value) => TemplateSource::parse(value, Path::new("")),
        None => TemplateSource::parse(&cfg.report.template, root),
    };
    tracing::debug!(?source, "loading template");
    let raw_template = source.load()?;

    let subs = template::substitutions(&quality_report)?;
    let filled = template::fill(&raw_template, &subs, cfg.report.comment_placeholders)?;

    if let Some(svg_path) = &cmd.svg_output {
        write_file(svg_path, &filled)?;
        if cmd.no_render {
            return Ok(ReportArtifacts {
                svg: Some(svg_path.clone()),
                rendered: None,
            });
        }
    }

    let output = cmd
        .output
        .clone()
        .unwrap_or_else(|| root.join(&cfg.report.output));

    match &cmd.svg_output {
        Some(svg_path) => render::render(&cfg.render, svg_path, &output)?,
        None => {
            let mut scratch = tempfile::Builder::new()
                .prefix("helium-")
                .suffix(".svg")
                .tempfile()?;
            scratch.write_all(filled.as_bytes())?;
            scratch.flush()?;
            render::render(&cfg.render, scratch.path(), &output)?;
        }
    }

    Ok(ReportArtifacts {
        svg: cmd.svg_output.clone(),
        rendered: Some(output),
    })
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    tracing::info!(path = %path.display(), bytes = content.len(), "wrote filled template");
    Ok(())
}
