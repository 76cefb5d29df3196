use serde::Deserialize;

/// Shape of the JSON version feed: the latest version string and the
/// archive download URL for it.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedResponse {
    pub url: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_feed_payload() {
        let raw = r#"{ "url": "https://example.com/elvui-13.88.zip", "version": "13.88" }"#;
        let feed: FeedResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(feed.url, "https://example.com/elvui-13.88.zip");
        assert_eq!(feed.version, "13.88");
    }

    #[test]
    fn extra_fields_are_ignored() {
        let raw = r#"{ "url": "u", "version": "1.0", "changelog_url": "c", "slug": "elvui" }"#;
        let feed: FeedResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(feed.version, "1.0");
    }
}
