//! Configuration management for the Lidarr want-list importer.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. All Lidarr connection
//! parameters live here: the API key, the base URL, and the add-artist
//! defaults (root folder and profile ids).
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use dotenv;
use std::{env, path::PathBuf};

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and
/// loads environment variables from a `.env` file located in the
/// platform-specific local data directory under `lidlist/.env`.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/lidlist/.env`
/// - macOS: `~/Library/Application Support/lidlist/.env`
/// - Windows: `%LOCALAPPDATA%/lidlist/.env`
///
/// # Returns
///
/// Returns `Ok(())` if the environment file is successfully loaded, or
/// an error string if directory creation or file loading fails.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("lidlist/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    dotenv::from_path(path).map_err(|e| e.to_string())?;
    Ok(())
}

/// Returns the Lidarr API key.
///
/// Retrieves the `LIDARR_API_KEY` environment variable. The key is
/// found on the Settings | General tab of the Lidarr web UI and is
/// sent as the `X-Api-Key` header on every request.
///
/// # Panics
///
/// Panics if the `LIDARR_API_KEY` environment variable is not set.
///
/// # Example
///
/// ```
/// let key = lidarr_api_key(); // e.g., "1f4e..."
/// ```
pub fn lidarr_api_key() -> String {
    env::var("LIDARR_API_KEY").expect("LIDARR_API_KEY must be set")
}

/// Returns the Lidarr API base URL.
///
/// Retrieves the `LIDARR_API_URL` environment variable, falling back
/// to `http://localhost:8686/lidarr/api/v1` for a default local
/// installation behind the `/lidarr` URL base.
///
/// # Example
///
/// ```
/// let url = lidarr_apiurl(); // e.g., "http://localhost:8686/lidarr/api/v1"
/// ```
pub fn lidarr_apiurl() -> String {
    env::var("LIDARR_API_URL")
        .unwrap_or_else(|_| "http://localhost:8686/lidarr/api/v1".to_string())
}

/// Returns the root folder path for newly added artists.
///
/// Retrieves the `LIDARR_ROOT_FOLDER` environment variable, falling
/// back to `/data/media/music`. Must match a root folder configured in
/// Lidarr, otherwise the add-artist call is rejected.
pub fn root_folder_path() -> String {
    env::var("LIDARR_ROOT_FOLDER").unwrap_or_else(|_| "/data/media/music".to_string())
}

/// Returns the quality profile id used when adding artists.
///
/// Retrieves the `LIDARR_QUALITY_PROFILE_ID` environment variable,
/// falling back to `1` (the first profile of a stock installation).
/// Non-numeric values also fall back to the default.
pub fn quality_profile_id() -> u64 {
    env::var("LIDARR_QUALITY_PROFILE_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}

/// Returns the metadata profile id used when adding artists.
///
/// Retrieves the `LIDARR_METADATA_PROFILE_ID` environment variable,
/// falling back to `1`. Non-numeric values also fall back to the
/// default.
pub fn metadata_profile_id() -> u64 {
    env::var("LIDARR_METADATA_PROFILE_ID")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(1)
}
