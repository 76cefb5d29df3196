use std::io::Cursor;
use std::path::Path;

/// Downloads the release archive into memory. Release zips are a few
/// megabytes, so buffering the whole body is fine.
pub async fn download_archive(client: &reqwest::Client, url: &str) -> Result<Vec<u8>, String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to download archive '{}': {}", url, e))?;

    if !response.status().is_success() {
        return Err(format!(
            "Archive download '{}' returned HTTP {}",
            url,
            response.status()
        ));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| format!("Failed to read archive body: {}", e))?;

    Ok(bytes.to_vec())
}

/// Removes the configured addon subdirectories before extraction so stale
/// files from the previous release don't survive the upgrade.
pub fn replace_directories(addons_dir: &Path, directories: &[String]) -> Result<(), String> {
    for dir in directories {
        let target = addons_dir.join(dir);
        if target.exists() {
            std::fs::remove_dir_all(&target).map_err(|e| {
                format!("Failed to remove directory '{}': {}", target.display(), e)
            })?;
        }
    }

    Ok(())
}

/// Extracts every zip entry under the addons directory and returns the
/// number of files written. Entries that escape the target directory
/// (absolute paths or `..` components) are rejected.
pub fn extract_archive(bytes: &[u8], addons_dir: &Path) -> Result<usize, String> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
        .map_err(|e| format!("Failed to open downloaded zip: {}", e))?;

    let mut extracted = 0usize;
    for i in 0..archive.len() {
        let mut entry = archive
            .by_index(i)
            .map_err(|e| format!("Failed to read zip entry {}: {}", i, e))?;

        let rel = match entry.enclosed_name() {
            Some(p) => p.to_path_buf(),
            None => {
                return Err(format!(
                    "Zip entry '{}' escapes the target directory",
                    entry.name()
                ));
            }
        };
        let target = addons_dir.join(&rel);

        if entry.is_dir() {
            std::fs::create_dir_all(&target).map_err(|e| {
                format!("Failed to create directory '{}': {}", target.display(), e)
            })?;
        } else {
            if let Some(parent) = target.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    format!("Failed to create directory '{}': {}", parent.display(), e)
                })?;
            }

            let mut out = std::fs::File::create(&target)
                .map_err(|e| format!("Failed to create file '{}': {}", target.display(), e))?;
            std::io::copy(&mut entry, &mut out).map_err(|e| {
                format!(
                    "Failed to extract '{}' to '{}': {}",
                    entry.name(),
                    target.display(),
                    e
                )
            })?;
            extracted += 1;
        }
    }

    Ok(extracted)
}
