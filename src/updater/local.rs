use std::path::Path;

const VERSION_PREFIX: &str = "## Version: ";

/// Reads the installed addon version from its TOC file:
/// `<addons>/<addon>/<addon>_Mainline.toc`.
pub fn read_local_version(addons_dir: &Path, addon: &str) -> Result<f64, String> {
    let toc_path = addons_dir
        .join(addon)
        .join(format!("{}_Mainline.toc", addon));

    let contents = std::fs::read_to_string(&toc_path)
        .map_err(|e| format!("Failed to read TOC file '{}': {}", toc_path.display(), e))?;

    parse_toc_version(&contents)
        .map_err(|e| format!("{} (in '{}')", e, toc_path.display()))
}

/// Finds the `## Version:` line and parses its value as a float.
/// TOC files ship with CRLF line endings; `lines()` strips the trailing `\r`.
pub fn parse_toc_version(contents: &str) -> Result<f64, String> {
    for line in contents.lines() {
        if let Some(rest) = line.strip_prefix(VERSION_PREFIX) {
            let raw = rest.trim();
            return raw
                .parse::<f64>()
                .map_err(|e| format!("Failed to parse version number '{}': {}", raw, e));
        }
    }

    Err("Version line not found".to_string())
}
