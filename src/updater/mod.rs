pub mod archive;
pub mod config;
pub mod install;
pub mod local;
pub mod remote;

use crate::types::status::AddonStatus;
use crate::utils::logger::{LogLevel, Logger};
use crate::utils::spinner::with_spinner;
use std::io::BufRead;

/// Runs the read-only half of the pipeline: config, install path, local
/// version, remote version.
async fn gather_status(config_path: Option<&str>) -> Result<AddonStatus, String> {
    let path = config::resolve_config_path(config_path)?;
    let config = config::load_config(&path)?;
    let addons_dir = install::resolve_addons_dir(&config)?;

    let addon = config.addon.clone();
    let dir = addons_dir.clone();
    let local_version =
        tokio::task::spawn_blocking(move || local::read_local_version(&dir, &addon))
            .await
            .map_err(|e| format!("Join error: {}", e))??;

    let client = remote::build_client()?;
    let (remote_version, download_url) = remote::fetch_feed(&client, &config.page).await?;

    Ok(AddonStatus {
        addon: config.addon,
        page: config.page,
        directories: config.directories,
        addons_dir,
        local_version,
        remote_version,
        download_url,
    })
}

/// Reports whether an update is available without downloading anything.
pub async fn run_check(config_path: Option<&str>) -> Result<(), String> {
    let status = gather_status(config_path).await?;
    let logger = Logger::new();

    if status.update_available() {
        logger.log_message(
            LogLevel::Info,
            &format!(
                "{} {:.2} is outdated, {:.2} is available from {}",
                status.addon, status.local_version, status.remote_version, status.page
            ),
        );
    } else {
        logger.log_message(
            LogLevel::Success,
            &format!(
                "{} {:.2} is up to date",
                status.addon, status.local_version
            ),
        );
    }

    Ok(())
}

/// Full pipeline: check the feed, and when the remote build is newer,
/// download its archive and extract it over the install.
pub async fn run_update(config_path: Option<&str>, quiet: bool) -> Result<(), String> {
    let status = gather_status(config_path).await?;
    let logger = Logger::new();

    if !status.update_available() {
        logger.log_message(
            LogLevel::Info,
            &format!("Nothing to do, {} {:.2} is current", status.addon, status.local_version),
        );
        pause_before_exit(quiet);
        return Ok(());
    }

    logger.log_message(
        LogLevel::Info,
        &format!(
            "Upgrading {} {:.2} -> {:.2}",
            status.addon, status.local_version, status.remote_version
        ),
    );

    let client = remote::build_client()?;

    let download_spinner = with_spinner("Downloading archive...");
    let bytes = match archive::download_archive(&client, &status.download_url).await {
        Ok(bytes) => bytes,
        Err(e) => {
            download_spinner.fail(e.clone());
            return Err(e);
        }
    };
    download_spinner.succeed(format!("Downloaded {} bytes", bytes.len()));

    let extract_spinner = with_spinner("Replacing addon directories...");
    let addons_dir = status.addons_dir.clone();
    let directories = status.directories.clone();
    let res = tokio::task::spawn_blocking(move || {
        archive::replace_directories(&addons_dir, &directories)?;
        archive::extract_archive(&bytes, &addons_dir)
    })
    .await
    .map_err(|e| format!("Join error: {}", e))?;

    match res {
        Ok(count) => extract_spinner.succeed(format!("Extracted {} file(s)", count)),
        Err(e) => {
            extract_spinner.fail(e.clone());
            return Err(e);
        }
    }

    logger.log_message(
        LogLevel::Success,
        &format!("{} updated to {:.2}", status.addon, status.remote_version),
    );

    pause_before_exit(quiet);
    Ok(())
}

/// The binary is double-clickable on Windows; keep the console window open
/// until the user has read the outcome, unless --quiet was passed.
fn pause_before_exit(quiet: bool) {
    if quiet {
        return;
    }

    println!("Press 'Enter' to finish...");
    let mut line = String::new();
    let _ = std::io::stdin().lock().read_line(&mut line);
}
