//! Reads the host settings file and extracts the Bash rule patterns.
//!
//! The rules live in Claude Code's `settings.json` under
//! `permissions.allow` / `permissions.deny` as `Bash(<pattern>)` entries.
//! Any read or parse failure degrades to an empty rule set, which can
//! never auto-approve anything.

use std::path::Path;

use serde::Deserialize;

use crate::rules::Pattern;

/// Allow and deny patterns extracted from the host's permissions lists.
#[derive(Debug, Default)]
pub struct RuleSet {
    pub allow: Vec<Pattern>,
    pub deny: Vec<Pattern>,
}

#[derive(Deserialize, Default)]
struct Settings {
    #[serde(default)]
    permissions: Permissions,
}

#[derive(Deserialize, Default)]
struct Permissions {
    #[serde(default)]
    allow: Vec<String>,
    #[serde(default)]
    deny: Vec<String>,
}

impl RuleSet {
    /// Load the rule set from a settings file.
    pub fn load(path: &Path) -> Self {
        let Ok(content) = std::fs::read_to_string(path) else {
            return Self::default();
        };
        Self::from_json(&content)
    }

    /// Parse a settings document. Unparsable content yields an empty set.
    pub fn from_json(content: &str) -> Self {
        let settings: Settings = serde_json::from_str(content).unwrap_or_default();
        Self {
            allow: extract_bash_patterns(&settings.permissions.allow),
            deny: extract_bash_patterns(&settings.permissions.deny),
        }
    }

    /// Build a rule set directly from bare pattern strings.
    pub fn from_patterns(allow: &[&str], deny: &[&str]) -> Self {
        Self {
            allow: allow.iter().map(|s| Pattern::parse(s)).collect(),
            deny: deny.iter().map(|s| Pattern::parse(s)).collect(),
        }
    }
}

/// Pull the inner pattern out of `Bash(<pattern>)` entries.
///
/// Entries for other tool categories (`Read(...)`, `WebFetch(...)`, ...)
/// and entries with an empty inner pattern are ignored.
fn extract_bash_patterns(entries: &[String]) -> Vec<Pattern> {
    entries
        .iter()
        .filter_map(|e| e.strip_prefix("Bash(")?.strip_suffix(')'))
        .filter(|inner| !inner.is_empty())
        .map(Pattern::parse)
        .collect()
}
