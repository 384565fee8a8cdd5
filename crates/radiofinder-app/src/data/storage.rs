//! Storage layer
//!
//! File I/O for settings (JSON) and the channel list (INI-style text).

use crate::config::app::NAME;
use crate::error::{AppError, Result};
use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Get the application config directory path
pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .map(|p| p.join(NAME))
        .ok_or_else(|| {
            AppError::Storage(
                "Could not determine config directory. HOME environment variable may not be set."
                    .to_string(),
            )
        })
}

/// Get path to a specific data file in the default config directory
pub fn data_path(filename: &str) -> Result<PathBuf> {
    Ok(config_dir()?.join(filename))
}

/// Create a directory if it doesn't exist, with proper error handling
fn create_dir_if_needed(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        let msg = match e.kind() {
            ErrorKind::PermissionDenied => {
                format!("Permission denied: cannot create directory {:?}", path)
            }
            _ => format!("Failed to create directory {:?}: {}", path, e),
        };
        AppError::Storage(msg)
    })
}

/// Read a text file. `None` if it doesn't exist.
pub fn read_text(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) => match e.kind() {
            ErrorKind::NotFound => Ok(None),
            ErrorKind::PermissionDenied => Err(AppError::Storage(format!(
                "Permission denied: cannot read {:?}",
                path
            ))),
            _ => Err(AppError::Storage(format!("Failed to read {:?}: {}", path, e))),
        },
    }
}

/// Write a text file, creating parent directories first
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            create_dir_if_needed(parent)?;
        }
    }

    fs::write(path, content).map_err(|e| {
        let msg = match e.kind() {
            ErrorKind::PermissionDenied => {
                format!("Permission denied: cannot write to {:?}", path)
            }
            ErrorKind::ReadOnlyFilesystem => {
                format!("Cannot write to {:?}: filesystem is read-only", path)
            }
            _ => format!("Failed to write to {:?}: {}", path, e),
        };
        AppError::Storage(msg)
    })
}

/// Load data from a JSON file at a specific path
///
/// Returns `None` if the file doesn't exist or is empty.
pub fn load_from<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    let content = match read_text(path)? {
        Some(c) => c,
        None => return Ok(None),
    };

    if content.trim().is_empty() {
        return Ok(None);
    }

    let data = serde_json::from_str(&content)
        .map_err(|e| AppError::Storage(format!("Failed to parse {:?}: {}", path, e)))?;

    Ok(Some(data))
}

/// Save data to a JSON file at a specific path
pub fn save_to<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    let content = serde_json::to_string_pretty(data)
        .map_err(|e| AppError::Storage(format!("Failed to serialize data: {}", e)))?;

    write_text(path, &content)
}
