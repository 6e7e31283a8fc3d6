//! Target application descriptors
//!
//! The launchable-app list is supplied as a JSON array of descriptor
//! objects. Loading validates every descriptor before any of them is used;
//! the locator consumes them as-is afterwards.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("app '{name}': {problem}")]
    Invalid { name: String, problem: String },
}

/// One launchable/locatable application
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TargetApp {
    /// Name shown on the overlay and used to select the app
    pub display_name: String,
    /// Absolute path of the executable to launch
    pub start_path: PathBuf,
    /// Command-line parameters passed on launch, may be empty
    #[serde(default)]
    pub start_parameters: String,
    /// Absolute working directory to launch under
    pub start_working_directory: PathBuf,
    /// Executable base name (with extension) to match running processes,
    /// compared case-insensitively
    pub match_executable: String,
    /// Optional case-sensitive title substring qualifying the window match
    #[serde(default)]
    pub match_title: String,
    /// Whether the app's window belongs in the region above the overlay
    pub prefer_above: bool,
}

impl TargetApp {
    fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |problem: String| ConfigError::Invalid {
            name: self.display_name.clone(),
            problem,
        };

        if self.display_name.is_empty() {
            return Err(ConfigError::Invalid {
                name: "<unnamed>".into(),
                problem: "display_name must not be empty".into(),
            });
        }
        if self.match_executable.is_empty() {
            return Err(invalid("match_executable must not be empty".into()));
        }
        if !self.start_path.is_absolute() {
            return Err(invalid(format!(
                "start_path '{}' must be absolute",
                self.start_path.display()
            )));
        }
        if !self.start_working_directory.is_absolute() {
            return Err(invalid(format!(
                "start_working_directory '{}' must be absolute",
                self.start_working_directory.display()
            )));
        }
        Ok(())
    }
}

/// Loads and validates the app list from a JSON file.
pub fn load(path: &Path) -> Result<Vec<TargetApp>, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, path)
}

fn parse(content: &str, path: &Path) -> Result<Vec<TargetApp>, ConfigError> {
    let apps: Vec<TargetApp> =
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    for app in &apps {
        app.validate()?;
    }
    Ok(apps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abs(tail: &str) -> String {
        if cfg!(windows) {
            format!("C:\\\\{tail}")
        } else {
            format!("/{tail}")
        }
    }

    fn sample_json() -> String {
        format!(
            r#"[{{
                "display_name": "Editor",
                "start_path": "{path}",
                "start_working_directory": "{dir}",
                "match_executable": "editor.exe",
                "match_title": "Editor",
                "prefer_above": true
            }}]"#,
            path = abs("tools/editor.exe"),
            dir = abs("tools"),
        )
    }

    #[test]
    fn parses_valid_descriptor() {
        let apps = parse(&sample_json(), Path::new("apps.json")).unwrap();
        assert_eq!(apps.len(), 1);
        assert_eq!(apps[0].display_name, "Editor");
        assert_eq!(apps[0].match_executable, "editor.exe");
        assert_eq!(apps[0].start_parameters, "");
        assert!(apps[0].prefer_above);
    }

    #[test]
    fn rejects_missing_required_field() {
        let json = r#"[{ "display_name": "Editor" }]"#;
        assert!(matches!(
            parse(json, Path::new("apps.json")),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn rejects_relative_start_path() {
        let json = format!(
            r#"[{{
                "display_name": "Editor",
                "start_path": "editor.exe",
                "start_working_directory": "{dir}",
                "match_executable": "editor.exe",
                "prefer_above": false
            }}]"#,
            dir = abs("tools"),
        );
        assert!(matches!(
            parse(&json, Path::new("apps.json")),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_empty_match_executable() {
        let json = format!(
            r#"[{{
                "display_name": "Editor",
                "start_path": "{path}",
                "start_working_directory": "{dir}",
                "match_executable": "",
                "prefer_above": false
            }}]"#,
            path = abs("tools/editor.exe"),
            dir = abs("tools"),
        );
        assert!(matches!(
            parse(&json, Path::new("apps.json")),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn rejects_unknown_fields() {
        let json = format!(
            r#"[{{
                "display_name": "Editor",
                "start_path": "{path}",
                "start_working_directory": "{dir}",
                "match_executable": "editor.exe",
                "prefer_above": false,
                "always_on_top": true
            }}]"#,
            path = abs("tools/editor.exe"),
            dir = abs("tools"),
        );
        assert!(matches!(
            parse(&json, Path::new("apps.json")),
            Err(ConfigError::Parse { .. })
        ));
    }
}
