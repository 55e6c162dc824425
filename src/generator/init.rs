use crate::cli::InitCommand;
use crate::config::DEFAULT_CONFIG_FILE;
use crate::error::{HeliumError, Result};
use crate::types::config::{HeliumConfig, DEFAULT_CC_COUNT, DEFAULT_MI_COUNT};
use crate::types::metrics::Grade;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Written,
    Skipped,
    Previewed,
}

/// Default config with every selection setting spelled out, so the written
/// file documents the knobs.
pub fn starter_config(name: &str) -> HeliumConfig {
    let mut cfg = HeliumConfig::with_name(name);
    cfg.maintainability.count = Some(DEFAULT_MI_COUNT);
    cfg.maintainability.min_grade = Some(Grade::A);
    cfg.maintainability.max_grade = Some(Grade::C);
    cfg.complexity.count = Some(DEFAULT_CC_COUNT);
    cfg.complexity.min_grade = Some(Grade::A);
    cfg.complexity.max_grade = Some(Grade::F);
    cfg
}

pub fn render_config(cfg: &HeliumConfig) -> Result<String> {
    let body = toml::to_string_pretty(cfg)?;
    Ok(format!("# Generated by helium\n\n{body}"))
}

pub fn execute_init(cmd: &InitCommand) -> Result<InitOutcome> {
    if !cmd.path.exists() {
        return Err(HeliumError::PathNotFound(cmd.path.display().to_string()));
    }

    let name = cmd
        .name
        .clone()
        .unwrap_or_else(|| default_project_name(&cmd.path));
    let content = render_config(&starter_config(&name))?;
    let target = cmd.path.join(DEFAULT_CONFIG_FILE);

    if cmd.dry_run {
        println!("{content}");
        return Ok(InitOutcome::Previewed);
    }

    if target.exists() && cmd.no_overwrite {
        println!("skipped: {} already exists", target.display());
        return Ok(InitOutcome::Skipped);
    }

    write_config(&target, &content)?;
    println!("wrote {}", target.display());
    Ok(InitOutcome::Written)
}

fn write_config(target: &Path, content: &str) -> Result<()> {
    fs::write(target, content)?;
    tracing::info!(path = %target.display(), "wrote config");
    Ok(())
}

/// Directory name of `root`, or the stock name when it has none.
fn default_project_name(root: &Path) -> String {
    root.canonicalize()
        .ok()
        .and_then(|path| path.file_name().map(|name| name.to_string_lossy().into_owned()))
        .unwrap_or_else(|| crate::types::config::DEFAULT_PROJECT_NAME.to_string())
}
