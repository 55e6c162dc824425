use crate::error::{HeliumError, Result};
use crate::types::config::RenderConfig;
use std::path::Path;
use std::process::Command;

/// Expands `{input}` and `{output}` in the configured renderer arguments.
pub fn renderer_args(config: &RenderConfig, input: &Path, output: &Path) -> Vec<String> {
    let input = input.display().to_string();
    let output = output.display().to_string();
    config
        .args
        .iter()
        .map(|arg| arg.replace("{input}", &input).replace("{output}", &output))
        .collect()
}

/// Runs the external renderer to turn the filled SVG at `input` into
/// `output`.
pub fn render(config: &RenderConfig, input: &Path, output: &Path) -> Result<()> {
    let args = renderer_args(config, input, output);
    tracing::info!(command = %config.command, ?args, "invoking renderer");

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    // A report left over from an earlier run must not pass the check below.
    if output.is_file() {
        tracing::debug!(path = %output.display(), "removing previous output");
        std::fs::remove_file(output)?;
    }

    let result = Command::new(&config.command)
        .args(&args)
        .output()
        .map_err(|e| HeliumError::Render(format!("could not start {}: {}", config.command, e)))?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(HeliumError::Render(format!(
            "{} exited with {}: {}",
            config.command,
            result.status,
            stderr.trim()
        )));
    }

    if !output.exists() {
        return Err(HeliumError::Render(format!(
            "{} did not produce {}",
            config.command,
            output.display()
        )));
    }
    Ok(())
}
