use crate::types::feed::FeedResponse;
use std::time::Duration;

const FEED_TIMEOUT: Duration = Duration::from_secs(5);

pub fn build_client() -> Result<reqwest::Client, String> {
    reqwest::Client::builder()
        .timeout(FEED_TIMEOUT)
        .build()
        .map_err(|e| format!("Failed to build HTTP client: {}", e))
}

/// Fetches the version feed and returns the parsed remote version and
/// the archive download URL.
///
/// ### Parameters
/// - `client`: The shared HTTP client
/// - `page`: The feed endpoint URL
///
pub async fn fetch_feed(client: &reqwest::Client, page: &str) -> Result<(f64, String), String> {
    let response = client
        .get(page)
        .send()
        .await
        .map_err(|e| format!("Failed to query version feed '{}': {}", page, e))?;

    if !response.status().is_success() {
        return Err(format!(
            "Version feed '{}' returned HTTP {}",
            page,
            response.status()
        ));
    }

    let feed: FeedResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to decode version feed response: {}", e))?;

    let version = parse_feed_version(&feed.version)?;
    Ok((version, feed.url))
}

pub fn parse_feed_version(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| format!("Failed to parse version number '{}': {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_version() {
        assert_eq!(parse_feed_version("13.88").unwrap(), 13.88);
    }

    #[test]
    fn parses_padded_version() {
        assert_eq!(parse_feed_version(" 13.88 ").unwrap(), 13.88);
    }

    #[test]
    fn rejects_garbage_version() {
        let err = parse_feed_version("v13.88").unwrap_err();
        assert!(err.contains("Failed to parse version number"), "{}", err);
    }

    #[test]
    fn rejects_empty_version() {
        assert!(parse_feed_version("").is_err());
    }
}
