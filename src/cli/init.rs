//! Init command implementation

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use voxlearn::Config;

/// Default configuration content for voxlearn init
pub const DEFAULT_CONFIG: &str = r#"# VoxLearn Configuration
# ======================

# REST API (voxlearn serve)
[server]
bind = "127.0.0.1"
port = 5000

# Voice commands
#   language             - BCP-47 recognition language
#   sensitivity          - 1 (strict) .. 5 (permissive); used when the user
#                          has no stored preference
#   auto_start           - start listening as soon as the session starts
#   prune_stale_controls - drop "click <label>" commands for controls that
#                          are no longer visible
[voice]
language = "en-US"
sensitivity = 3
auto_start = true
prune_stale_controls = true

# Read-aloud
#   default_voice - voice name used when the user has no preference;
#                   empty picks the first English voice
[speech]
pitch = 1.0
default_voice = ""

# Live region: identical messages within this window are announced once
[announcer]
debounce_ms = 750

# Alt+key shortcuts (see `voxlearn commands`)
[keyboard]
enabled = true
"#;

/// Write a default config to `config_path`, or `<work_dir>/.voxlearn/config.toml`
pub async fn init_command(work_dir: &Path, config_path: Option<PathBuf>, force: bool) -> Result<()> {
    let config_path = config_path.unwrap_or_else(|| Config::project_config_path(work_dir));

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    if let Some(parent) = config_path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!("Created: {}", config_path.display());

    Ok(())
}
