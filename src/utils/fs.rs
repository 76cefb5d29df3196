use std::path::PathBuf;

pub fn get_cwd() -> Result<PathBuf, String> {
    std::env::current_dir().map_err(|e| format!("Failed to get current working directory: {}", e))
}

pub fn get_user_home() -> Result<PathBuf, String> {
    dirs::home_dir().ok_or_else(|| "Failed to get user home directory".to_string())
}
