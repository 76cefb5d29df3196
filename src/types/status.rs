use std::path::PathBuf;

/// Everything the pipeline resolves for one addon before the
/// upgrade decision is made.
#[derive(Debug, Clone)]
pub struct AddonStatus {
    pub addon: String,
    pub page: String,
    pub directories: Vec<String>,
    pub addons_dir: PathBuf,
    pub local_version: f64,
    pub remote_version: f64,
    pub download_url: String,
}

impl AddonStatus {
    /// Strictly greater: an equal or older remote build is never installed.
    pub fn update_available(&self) -> bool {
        self.remote_version > self.local_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(local: f64, remote: f64) -> AddonStatus {
        AddonStatus {
            addon: "ElvUI".to_string(),
            page: "https://example.com/feed".to_string(),
            directories: vec!["ElvUI".to_string()],
            addons_dir: PathBuf::from("AddOns"),
            local_version: local,
            remote_version: remote,
            download_url: "https://example.com/elvui.zip".to_string(),
        }
    }

    #[test]
    fn newer_remote_triggers_update() {
        assert!(status(13.87, 13.88).update_available());
    }

    #[test]
    fn equal_versions_do_nothing() {
        assert!(!status(13.88, 13.88).update_available());
    }

    #[test]
    fn older_remote_does_nothing() {
        assert!(!status(13.88, 13.87).update_available());
    }
}
