//! Translator configuration (vtlower.toml format).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root translator configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TranslatorConfig {
    /// Where generated files go.
    #[serde(default)]
    pub output: OutputConfig,

    /// Names the emitted code borrows from the target runtime library.
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Entry-point generation.
    #[serde(default)]
    pub entry: EntryConfig,
}

/// Output locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory. Must exist before a run.
    pub dir: PathBuf,

    /// Header file name.
    pub header: String,

    /// Implementation file name.
    pub implementation: String,

    /// Entry-point file name.
    pub entry_point: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("output"),
            header: "output.h".to_string(),
            implementation: "output.cpp".to_string(),
            entry_point: "main.cpp".to_string(),
        }
    }
}

/// Runtime library conventions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Foundational runtime header included by every generated header.
    pub header: String,

    /// Foundational namespace pulled in with a using-directive.
    pub namespace: String,

    /// Array template allocated by `new` (`__rt::__Array<T>`).
    pub array_template: String,

    /// Array handle type used in declarations (`__rt::Array<T>`).
    pub array_type: String,

    /// Function wrapping string literals.
    pub literal: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            header: "java_lang.h".to_string(),
            namespace: "java::lang".to_string(),
            array_template: "__rt::__Array".to_string(),
            array_type: "__rt::Array".to_string(),
            literal: "__rt::literal".to_string(),
        }
    }
}

/// Entry-point generation settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntryConfig {
    /// Class whose `main` the generated entry point forwards to.
    #[serde(default)]
    pub main_class: Option<String>,
}

impl TranslatorConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: TranslatorConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Full path of the generated header.
    pub fn header_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.header)
    }

    /// Full path of the generated implementation file.
    pub fn implementation_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.implementation)
    }

    /// Full path of the generated entry point.
    pub fn entry_point_path(&self) -> PathBuf {
        self.output.dir.join(&self.output.entry_point)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: TranslatorConfig = toml::from_str("").expect("Failed to parse config");
        assert_eq!(config, TranslatorConfig::default());
        assert_eq!(config.header_path(), PathBuf::from("output/output.h"));
        assert_eq!(config.runtime.namespace, "java::lang");
        assert!(config.entry.main_class.is_none());
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
[output]
dir = "build/gen"
header = "shapes.h"

[runtime]
header = "runtime.h"

[entry]
main_class = "Test001"
        "#;

        let config: TranslatorConfig = toml::from_str(toml).expect("Failed to parse config");
        assert_eq!(config.header_path(), PathBuf::from("build/gen/shapes.h"));
        assert_eq!(config.output.implementation, "output.cpp");
        assert_eq!(config.runtime.header, "runtime.h");
        assert_eq!(config.runtime.literal, "__rt::literal");
        assert_eq!(config.entry.main_class.as_deref(), Some("Test001"));
    }
}
