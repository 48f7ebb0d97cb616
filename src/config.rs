use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Embedded default configuration.
const DEFAULT_CONFIG: &str = include_str!("../config.default.toml");

// ── Final (merged) config types ──

#[derive(Debug, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub exempt: Exempt,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Settings {
    /// Path to the host settings file holding the allow/deny rules.
    #[serde(default)]
    pub settings_file: String,
    /// Write a record of every decision to the log file.
    #[serde(default)]
    pub log_decisions: bool,
}

#[derive(Debug, Deserialize, Serialize, Default)]
pub struct Exempt {
    /// Command names skipped during rule checks inside a chain.
    #[serde(default)]
    pub commands: Vec<String>,
}

// ── Overlay types (user config that merges with defaults) ──

#[derive(Debug, Deserialize, Default)]
struct ConfigOverlay {
    #[serde(default)]
    settings: SettingsOverlay,
    #[serde(default)]
    exempt: ExemptOverlay,
}

#[derive(Debug, Deserialize, Default)]
struct SettingsOverlay {
    settings_file: Option<String>,
    log_decisions: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
struct ExemptOverlay {
    #[serde(default)]
    replace: bool,
    #[serde(default)]
    commands: Vec<String>,
    #[serde(default)]
    remove_commands: Vec<String>,
}

// ── Merge logic ──

/// Merge a user list into a default list.
/// In replace mode: user list replaces default entirely.
/// In merge mode: remove items first, then extend with additions (deduped).
fn merge_list(base: &mut Vec<String>, add: Vec<String>, remove: &[String], replace: bool) {
    if replace {
        *base = add;
    } else {
        base.retain(|item| !remove.contains(item));
        for item in add {
            if !base.contains(&item) {
                base.push(item);
            }
        }
    }
}

impl Config {
    /// Load the default embedded configuration.
    pub fn default_config() -> Self {
        toml::from_str(DEFAULT_CONFIG).expect("embedded default config must parse")
    }

    /// Load configuration with resolution order:
    /// 1. Start with embedded defaults
    /// 2. Merge user overlay from ~/.config/cc-chaingate/config.toml (if exists)
    pub fn load() -> Self {
        let mut config = Self::default_config();
        if let Some(overlay) = Self::load_overlay() {
            config.apply_overlay(overlay);
        }
        config
    }

    /// The rule source path, with `~` expanded.
    pub fn settings_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.settings.settings_file).as_ref())
    }

    /// Try to load user overlay from ~/.config/cc-chaingate/config.toml.
    /// An unreadable or unparsable overlay leaves the defaults in place.
    fn load_overlay() -> Option<ConfigOverlay> {
        let home = std::env::var_os("HOME")?;
        let path = std::path::Path::new(&home).join(".config/cc-chaingate/config.toml");
        let content = std::fs::read_to_string(path).ok()?;
        toml::from_str(&content).ok()
    }

    /// Apply an overlay on top of this config (merge semantics).
    fn apply_overlay(&mut self, overlay: ConfigOverlay) {
        // Settings: scalar overrides
        if let Some(v) = overlay.settings.settings_file {
            self.settings.settings_file = v;
        }
        if let Some(v) = overlay.settings.log_decisions {
            self.settings.log_decisions = v;
        }

        // Exempt commands
        let e = overlay.exempt;
        merge_list(
            &mut self.exempt.commands,
            e.commands,
            &e.remove_commands,
            e.replace,
        );
    }

    /// Apply an overlay from a TOML string. Used for testing.
    #[cfg(test)]
    fn apply_overlay_str(&mut self, toml_str: &str) {
        let overlay: ConfigOverlay = toml::from_str(toml_str).unwrap();
        self.apply_overlay(overlay);
    }
}
