//! Configuration to acknowledge user preferences as well as set defaults.
//!
//! Specifically, we try to find a tdump.toml, and if present we load settings from there.
//! This provides output styling, redaction patterns and whether to parse on a worker thread.

use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// File looked up in the working directory when no path is given.
pub const CONFIG_FILE: &str = "tdump.toml";

const DEFAULT_REPLACEMENT: &str = "<redacted>";

#[derive(Facet, Clone, Debug, PartialEq)]
/// User preferences loaded from tdump.toml or falling back to defaults.
pub struct Config {
    #[facet(default = true)]
    /// Draw box-drawing guides in front of nested lines.
    pub tree_guides: bool,
    #[facet(default = Vec::new())]
    /// Regular expressions masked out of every line before parsing.
    pub redact_patterns: Vec<String>,
    #[facet(default = DEFAULT_REPLACEMENT.to_string())]
    /// Text substituted for each redacted match.
    pub redact_replacement: String,
    #[facet(default = true)]
    /// Run parsing and searching on a worker thread.
    pub background: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tree_guides: true,
            redact_patterns: Vec::new(),
            redact_replacement: DEFAULT_REPLACEMENT.to_string(),
            background: true,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from tdump.toml in the working directory if present.
    pub fn load() -> Self {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    #[must_use]
    /// Load configuration from `path`, using defaults when it is missing or malformed.
    pub fn load_from(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            return Self::default();
        };

        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring malformed config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
