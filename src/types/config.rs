use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdaterConfig {
    #[serde(default = "default_addon")]
    pub addon: String,
    pub page: String,
    pub directories: Vec<String>,
    #[serde(default)]
    pub install_path: Option<String>,
}

fn default_addon() -> String {
    "ElvUI".to_string()
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        UpdaterConfig {
            addon: default_addon(),
            page: "https://api.tukui.org/v1/addon/elvui".to_string(),
            directories: vec![
                "ElvUI".to_string(),
                "ElvUI_Options".to_string(),
                "ElvUI_Libraries".to_string(),
            ],
            install_path: None,
        }
    }
}
