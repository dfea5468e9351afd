//! ember_options: ember.json parsing and driver options.
//!
//! The configuration file only supplies defaults; command-line flags given
//! to `ember` always win. Every field is optional so an empty `{}` is a
//! valid configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use ember_core::{EmberError, Result};
use log::debug;
use serde::{Deserialize, Serialize};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "ember.json";

/// How diagnostics are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticFormat {
    /// `[line N] Error at 'x': message`
    #[default]
    Pretty,
    /// One JSON array of issues per file.
    Json,
    /// Source snippets with labels.
    Fancy,
}

/// What `ember parse` prints for a successfully parsed file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputKind {
    /// Parenthesized prefix form, one statement per line.
    #[default]
    Ast,
    /// The token listing.
    Tokens,
    /// The module serialized as JSON.
    Json,
    None,
}

macro_rules! impl_str_enum {
    ($ty:ident { $($variant:ident => $text:expr),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $text,)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = String;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                match s {
                    $($text => Ok($ty::$variant),)+
                    _ => Err(format!(
                        "unknown value '{}', expected one of: {}",
                        s,
                        [$($text),+].join(", ")
                    )),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

impl_str_enum!(DiagnosticFormat {
    Pretty => "pretty",
    Json => "json",
    Fancy => "fancy",
});

impl_str_enum!(OutputKind {
    Ast => "ast",
    Tokens => "tokens",
    Json => "json",
    None => "none",
});

/// The `diagnostics` section of ember.json.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosticsOptions {
    pub format: Option<DiagnosticFormat>,
    pub color: Option<bool>,
}

/// The ember.json file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmberConfig {
    #[serde(default)]
    pub diagnostics: DiagnosticsOptions,
    pub output: Option<OutputKind>,
}

impl EmberConfig {
    pub fn format(&self) -> DiagnosticFormat {
        self.diagnostics.format.unwrap_or_default()
    }

    pub fn output(&self) -> OutputKind {
        self.output.unwrap_or_default()
    }

    /// Whether to color output; follows the terminal unless configured.
    pub fn color(&self, is_terminal: bool) -> bool {
        self.diagnostics.color.unwrap_or(is_terminal)
    }

    /// Overlay values set in `overrides` on top of this configuration.
    pub fn merged_with(mut self, overrides: &EmberConfig) -> EmberConfig {
        if overrides.diagnostics.format.is_some() {
            self.diagnostics.format = overrides.diagnostics.format;
        }
        if overrides.diagnostics.color.is_some() {
            self.diagnostics.color = overrides.diagnostics.color;
        }
        if overrides.output.is_some() {
            self.output = overrides.output;
        }
        self
    }
}

/// Parse an ember.json file from a string.
pub fn parse_config(content: &str) -> std::result::Result<EmberConfig, serde_json::Error> {
    serde_json::from_str(content)
}

/// Parse an ember.json file from a path.
pub fn parse_config_file(path: &Path) -> Result<EmberConfig> {
    let content =
        std::fs::read_to_string(path).map_err(|err| EmberError::read_source(path, err))?;
    let config = parse_config(&content).map_err(|err| EmberError::Config {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;
    debug!("loaded configuration from {}", path.display());
    Ok(config)
}

/// Load the configuration for a run: `explicit` when given (it must exist),
/// otherwise `ember.json` in `dir` when present, otherwise the defaults.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<EmberConfig> {
    if let Some(path) = explicit {
        return parse_config_file(path);
    }
    let candidate: PathBuf = dir.join(CONFIG_FILE_NAME);
    if candidate.is_file() {
        parse_config_file(&candidate)
    } else {
        debug!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
        Ok(EmberConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A scratch directory unique to one test.
    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("ember_options_{}_{}", name, std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"{ "diagnostics": { "format": "fancy", "color": false }, "output": "json" }"#,
        )
        .unwrap();
        assert_eq!(config.format(), DiagnosticFormat::Fancy);
        assert!(!config.color(true));
        assert_eq!(config.output(), OutputKind::Json);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config, EmberConfig::default());
        assert_eq!(config.format(), DiagnosticFormat::Pretty);
        assert_eq!(config.output(), OutputKind::Ast);
        assert!(config.color(true));
        assert!(!config.color(false));
    }

    #[test]
    fn test_rejects_unknown_enum_values() {
        assert!(parse_config(r#"{ "output": "xml" }"#).is_err());
        assert!("xml".parse::<OutputKind>().is_err());
        assert_eq!("none".parse::<OutputKind>(), Ok(OutputKind::None));
        assert_eq!(DiagnosticFormat::Json.to_string(), "json");
    }

    #[test]
    fn test_merge_prefers_overrides() {
        let base = parse_config(r#"{ "diagnostics": { "format": "json" }, "output": "tokens" }"#).unwrap();
        let flags = EmberConfig {
            output: Some(OutputKind::None),
            ..EmberConfig::default()
        };
        let merged = base.merged_with(&flags);
        assert_eq!(merged.format(), DiagnosticFormat::Json);
        assert_eq!(merged.output(), OutputKind::None);
    }

    #[test]
    fn test_load_discovers_config_in_dir() {
        let dir = scratch_dir("discover");
        assert_eq!(load_config(None, &dir).unwrap(), EmberConfig::default());

        std::fs::write(dir.join(CONFIG_FILE_NAME), r#"{ "output": "none" }"#).unwrap();
        assert_eq!(load_config(None, &dir).unwrap().output(), OutputKind::None);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_errors() {
        let dir = scratch_dir("errors");
        let missing = dir.join("missing.json");
        assert!(matches!(
            load_config(Some(&missing), &dir),
            Err(EmberError::ReadSource { .. })
        ));

        let broken = dir.join("broken.json");
        std::fs::write(&broken, "{ not json").unwrap();
        let err = load_config(Some(&broken), &dir).unwrap_err();
        assert!(matches!(err, EmberError::Config { .. }));
        assert!(err.to_string().starts_with("invalid configuration in"));
        let _ = std::fs::remove_dir_all(&dir);
    }
}
