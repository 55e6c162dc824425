use crate::error::{HeliumError, Result};
use crate::types::config::HeliumConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "helium.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".helium/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/helium/config.toml";

/// Loads the layered config for `root`. Returns `None` when the project has
/// no `helium.toml`; callers fall back to defaults.
pub fn load_config(root: &Path) -> Result<Option<HeliumConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<HeliumConfig>> {
    let repo_path = root.join(DEFAULT_CONFIG_FILE);
    if !repo_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &repo_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: HeliumConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| HeliumError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    tracing::debug!(path = %path.display(), "merging config layer");
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| HeliumError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::metrics::Grade;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_returns_none_when_repo_file_missing() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None).expect("load should not fail");
        assert!(cfg.is_none());
    }

    #[test]
    fn load_config_merges_global_repo_and_local_in_order() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[render]
command = "inkscape"
args = ["--export-filename={output}", "{input}"]

[complexity]
count = 5
"#,
        )
        .expect("global config should write");

        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[project]
name = "repo"

[complexity]
count = 6
max_grade = "E"
"#,
        )
        .expect("repo config should write");

        fs::create_dir_all(root.path().join(".helium")).expect("local helium dir should create");
        fs::write(
            root.path().join(DEFAULT_LOCAL_FILE),
            r#"
[report]
output = "local.pdf"
"#,
        )
        .expect("local override should write");

        let cfg = load_config_with_global(root.path(), Some(&global_path))
            .expect("load should succeed")
            .expect("merged config should exist");

        assert_eq!(cfg.project.name, "repo");
        assert_eq!(cfg.render.command, "inkscape");
        assert_eq!(cfg.complexity.count, Some(6));
        assert_eq!(cfg.complexity.max_grade, Some(Grade::E));
        assert_eq!(cfg.report.output, "local.pdf");
        assert_eq!(cfg.report.template, "builtin");
    }

    #[test]
    fn load_config_rejects_invalid_merged_values() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[maintainability]
count = 0
"#,
        )
        .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(matches!(err, HeliumError::ConfigParse(_)));
    }

    #[test]
    fn load_config_reports_malformed_file_path() {
        let root = TempDir::new().expect("root temp dir should be created");
        fs::write(root.path().join(DEFAULT_CONFIG_FILE), "[project\nname = ")
            .expect("repo config should write");

        let err = load_config_with_global(root.path(), None).expect_err("load should fail");
        assert!(err.to_string().contains("helium.toml"));
    }
}
