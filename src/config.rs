use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level hwgrab configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GrabConfig {
    pub launch: LaunchConfig,
}

/// Helper applications started for the bench operator after the report is
/// assembled. Values are executable names or paths, started without
/// arguments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Screen-capture tool opened so the operator can photograph the result.
    pub snapshot: String,
    /// Settings panel opened for the final device checks.
    pub settings: String,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            snapshot: "snapshot".to_string(),
            settings: "/usr/bin/gnome-control-center".to_string(),
        }
    }
}

const SYSTEM_CONFIG: &str = "/etc/hwgrab/config.toml";

/// Load the system config file if it exists.
fn load_system() -> Option<toml::Value> {
    let path = Path::new(SYSTEM_CONFIG);
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Load the user config file (~/.config/hwgrab/config.toml) if it exists.
fn load_user() -> Option<toml::Value> {
    let dir = dirs::config_dir()?;
    let path = dir.join("hwgrab").join("config.toml");
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Recursively merge two TOML values. Tables are merged key-by-key;
/// all other types in `overlay` replace `base`.
fn merge_values(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_values(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load config from a specific path, ignoring system/user files.
fn load_from_path(path: &Path) -> GrabConfig {
    match std::fs::read_to_string(path) {
        Ok(content) => toml::from_str(&content).unwrap_or_else(|e| {
            eprintln!(
                "warning: failed to parse config at {}: {}",
                path.display(),
                e
            );
            GrabConfig::default()
        }),
        Err(e) => {
            eprintln!(
                "warning: failed to read config at {}: {}",
                path.display(),
                e
            );
            GrabConfig::default()
        }
    }
}

/// Load the merged config: system defaults, then user overrides.
/// If `override_path` is provided, use only that file instead.
pub fn load(override_path: Option<&PathBuf>) -> GrabConfig {
    if let Some(path) = override_path {
        return load_from_path(path);
    }

    let system = load_system();
    let user = load_user();

    let merged = match (system, user) {
        (Some(s), Some(u)) => Some(merge_values(s, u)),
        (Some(v), None) | (None, Some(v)) => Some(v),
        (None, None) => None,
    };

    match merged {
        Some(value) => value.try_into().unwrap_or_else(|e| {
            eprintln!("warning: failed to deserialize config: {}", e);
            GrabConfig::default()
        }),
        None => GrabConfig::default(),
    }
}
