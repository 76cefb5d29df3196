use crate::types::config::UpdaterConfig;
use std::path::PathBuf;

pub const INSTALL_PATH_ENV: &str = "ADDONUP_INSTALL_PATH";

#[cfg(windows)]
const WOW_REGISTRY_KEY: &str = r"SOFTWARE\Wow6432Node\Blizzard Entertainment\World of Warcraft";

/// Resolves the `Interface/AddOns` directory for the configured game install.
///
/// ### Parameters
/// - `config`: The loaded updater config
///
/// Precedence: `install_path` in the config, then the ADDONUP_INSTALL_PATH
/// environment variable, then (Windows only) the Blizzard registry key.
pub fn resolve_addons_dir(config: &UpdaterConfig) -> Result<PathBuf, String> {
    let game_root = match &config.install_path {
        Some(p) if !p.trim().is_empty() => PathBuf::from(p),
        _ => match std::env::var(INSTALL_PATH_ENV) {
            Ok(v) if !v.trim().is_empty() => PathBuf::from(v),
            _ => detect_game_root()?,
        },
    };

    let addons_dir = game_root.join("Interface").join("AddOns");
    if !addons_dir.is_dir() {
        return Err(format!(
            "AddOns directory not found at '{}'",
            addons_dir.display()
        ));
    }

    Ok(addons_dir)
}

#[cfg(windows)]
fn detect_game_root() -> Result<PathBuf, String> {
    use winreg::RegKey;
    use winreg::enums::HKEY_LOCAL_MACHINE;

    let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
    let key = hklm
        .open_subkey(WOW_REGISTRY_KEY)
        .map_err(|e| format!("Failed to find the WoW install registry key: {}", e))?;
    let install_path: String = key
        .get_value("InstallPath")
        .map_err(|e| format!("Failed to read InstallPath from the registry: {}", e))?;

    Ok(PathBuf::from(install_path))
}

#[cfg(not(windows))]
fn detect_game_root() -> Result<PathBuf, String> {
    Err(format!(
        "No install path configured. Set 'install_path' in the config file or the {} environment variable.",
        INSTALL_PATH_ENV
    ))
}
