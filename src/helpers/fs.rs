//! File System Utilities
//!
//! Configuration directory management.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::PathBuf;

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/helpdesk-gui/` or `$XDG_CONFIG_HOME/helpdesk-gui/`
/// - **macOS**: `~/Library/Application Support/com.helpdesk.helpdesk-gui/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\helpdesk\helpdesk-gui\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "helpdesk", "helpdesk-gui") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}
