use crate::types::config::UpdaterConfig;
use crate::utils::fs::{get_cwd, get_user_home};
use crate::utils::logger::{LogLevel, Logger};
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "config.json";

/// Resolves the config file location.
///
/// ### Parameters
/// - `explicit`: Path given on the command line, if any
///
/// Without an explicit path, `config.json` in the current directory is
/// preferred, then `~/.addonup/config.json`.
pub fn resolve_config_path(explicit: Option<&str>) -> Result<PathBuf, String> {
    if let Some(p) = explicit {
        return Ok(PathBuf::from(p));
    }

    let local = get_cwd()?.join(CONFIG_FILE);
    if local.is_file() {
        return Ok(local);
    }

    let home = get_user_home()?.join(".addonup").join(CONFIG_FILE);
    if home.is_file() {
        return Ok(home);
    }

    Err(format!(
        "Config file not found at '{}'. Run 'addonup init' to create one.",
        local.display()
    ))
}

/// Loads and validates the updater config from the given path.
pub fn load_config(path: &Path) -> Result<UpdaterConfig, String> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config file '{}': {}", path.display(), e))?;

    let config: UpdaterConfig = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse config file '{}': {}", path.display(), e))?;

    if config.page.trim().is_empty() {
        return Err(format!(
            "Field 'page' is required in config file '{}'",
            path.display()
        ));
    }
    if config.directories.is_empty() {
        return Err(format!(
            "Field 'directories' must list at least one directory in config file '{}'",
            path.display()
        ));
    }

    Ok(config)
}

/// Writes a starter `config.json` in the current directory. Refuses to
/// overwrite an existing one.
pub fn write_starter_config() -> Result<(), String> {
    let target = get_cwd()?.join(CONFIG_FILE);
    if target.exists() {
        return Err(format!(
            "Config file already exists at '{}'",
            target.display()
        ));
    }

    let starter = UpdaterConfig::default();
    let raw = serde_json::to_string_pretty(&starter)
        .map_err(|e| format!("Failed to serialize starter config: {}", e))?;
    std::fs::write(&target, raw)
        .map_err(|e| format!("Failed to write config file '{}': {}", target.display(), e))?;

    Logger::new().log_message(
        LogLevel::Success,
        &format!("Starter config written to '{}'", target.display()),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"{ "page": "https://example.com/feed", "directories": ["ElvUI"] }"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.page, "https://example.com/feed");
        assert_eq!(config.directories, vec!["ElvUI".to_string()]);
    }

    #[test]
    fn rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("nope.json")).unwrap_err();
        assert!(err.contains("Failed to read config file"), "{}", err);
    }

    #[test]
    fn rejects_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.contains("Failed to parse config file"), "{}", err);
    }

    #[test]
    fn rejects_empty_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            r#"{ "page": "https://example.com/feed", "directories": [] }"#,
        )
        .unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.contains("directories"), "{}", err);
    }

    #[test]
    fn rejects_blank_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "page": " ", "directories": ["ElvUI"] }"#).unwrap();
        let err = load_config(&path).unwrap_err();
        assert!(err.contains("'page'"), "{}", err);
    }

    #[test]
    fn starter_config_round_trips() {
        let starter = crate::types::config::UpdaterConfig::default();
        let raw = serde_json::to_string_pretty(&starter).unwrap();
        let parsed: crate::types::config::UpdaterConfig = serde_json::from_str(&raw).unwrap();
        assert_eq!(parsed.addon, "ElvUI");
        assert!(!parsed.directories.is_empty());
    }
}
