use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level maya configuration (`maya.toml`).
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MayaConfig {
    /// Output settings.
    #[serde(default)]
    pub render: RenderToml,

    /// Input recognition settings.
    #[serde(default)]
    pub input: InputToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RenderToml {
    /// `%` template for Mayan output; `None` prints the default form.
    #[serde(default)]
    pub template: Option<String>,
    /// Also print the correlated Gregorian date for Long Count input.
    #[serde(default = "default_true")]
    pub show_gregorian: bool,
}

impl Default for RenderToml {
    fn default() -> Self {
        Self {
            template: None,
            show_gregorian: default_true(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct InputToml {
    /// chrono format tried before falling back to Long Count parsing.
    #[serde(default = "default_gregorian_format")]
    pub gregorian_format: String,
}

impl Default for InputToml {
    fn default() -> Self {
        Self {
            gregorian_format: default_gregorian_format(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_gregorian_format() -> String {
    "%Y-%m-%d".to_string()
}

impl MayaConfig {
    /// Loads the config at `path`, or defaults if the file does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = MayaConfig::load(&dir.path().join("maya.toml")).unwrap();
        assert!(config.render.template.is_none());
        assert!(config.render.show_gregorian);
        assert_eq!(config.input.gregorian_format, "%Y-%m-%d");
    }

    #[test]
    fn empty_file_is_default() {
        let file = write_config("");
        let config = MayaConfig::load(file.path()).unwrap();
        assert!(config.render.template.is_none());
        assert!(config.render.show_gregorian);
    }

    #[test]
    fn full_file() {
        let file = write_config(
            r#"
[render]
template = "%L %t %D"
show_gregorian = false

[input]
gregorian_format = "%d/%m/%Y"
"#,
        );
        let config = MayaConfig::load(file.path()).unwrap();
        assert_eq!(config.render.template.as_deref(), Some("%L %t %D"));
        assert!(!config.render.show_gregorian);
        assert_eq!(config.input.gregorian_format, "%d/%m/%Y");
    }

    #[test]
    fn unknown_field_rejected() {
        let file = write_config("[render]\ncolour = true\n");
        assert!(MayaConfig::load(file.path()).is_err());
    }
}
