//! Configuration type definitions.
//!
//! This module contains the data structures read from `site.yaml`.
//! Every field has a default, so an empty (or missing) file yields the
//! standard `files/` → `output/` layout.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Root configuration
// =============================================================================

/// Root site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RootConfig {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub build: BuildConfig,
    #[serde(default)]
    pub markdown: MarkdownConfig,
}

// =============================================================================
// Site configuration
// =============================================================================

/// Where the site reads from and writes to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Root of the input tree
    #[serde(default = "default_input")]
    pub input: PathBuf,
    /// Output directory (destroyed and recreated on every build)
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Directory holding the page templates
    #[serde(default = "default_templates")]
    pub templates: PathBuf,
    /// Asset folder name handed to templates as `scripts_folder`
    #[serde(default = "default_scripts_folder")]
    pub scripts_folder: String,
    /// Template used when a page names none, or names a missing one
    #[serde(default = "default_template")]
    pub default_template: String,
}

fn default_input() -> PathBuf {
    PathBuf::from("files")
}

fn default_output() -> PathBuf {
    PathBuf::from("output")
}

fn default_templates() -> PathBuf {
    PathBuf::from("templates")
}

fn default_scripts_folder() -> String {
    "scripts".to_string()
}

fn default_template() -> String {
    "default".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            templates: default_templates(),
            scripts_folder: default_scripts_folder(),
            default_template: default_template(),
        }
    }
}

// =============================================================================
// Build configuration
// =============================================================================

/// What to do when a single file cannot be read, rendered or written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Stop the whole build at the first failing file
    #[default]
    Abort,
    /// Log the failure and continue with the next file
    Skip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Extension (without dot) of documents that get rendered
    #[serde(default = "default_source_extension")]
    pub source_extension: String,
    /// Extension (without dot) rendered documents are written with
    #[serde(default = "default_output_extension")]
    pub output_extension: String,
    #[serde(default)]
    pub on_error: ErrorPolicy,
}

fn default_source_extension() -> String {
    "md".to_string()
}

fn default_output_extension() -> String {
    "html".to_string()
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            source_extension: default_source_extension(),
            output_extension: default_output_extension(),
            on_error: ErrorPolicy::default(),
        }
    }
}

// =============================================================================
// Markdown configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkdownConfig {
    /// Extensions to enable for markdown processing
    #[serde(default = "default_markdown_extensions")]
    pub extensions: Vec<String>,
}

fn default_markdown_extensions() -> Vec<String> {
    vec![
        "footnotes".to_string(),
        "strikethrough".to_string(),
        "tables".to_string(),
        "tasklists".to_string(),
    ]
}

impl Default for MarkdownConfig {
    fn default() -> Self {
        Self {
            extensions: default_markdown_extensions(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: RootConfig = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config.site.input, PathBuf::from("files"));
        assert_eq!(config.site.output, PathBuf::from("output"));
        assert_eq!(config.site.templates, PathBuf::from("templates"));
        assert_eq!(config.site.scripts_folder, "scripts");
        assert_eq!(config.site.default_template, "default");
        assert_eq!(config.build.source_extension, "md");
        assert_eq!(config.build.output_extension, "html");
        assert_eq!(config.build.on_error, ErrorPolicy::Abort);
        assert!(config.markdown.extensions.contains(&"tables".to_string()));
    }

    #[test]
    fn test_partial_site_config() {
        let yaml = r#"
site:
  input: content
  output: public
build:
  on_error: skip
"#;
        let config: RootConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.site.input, PathBuf::from("content"));
        assert_eq!(config.site.output, PathBuf::from("public"));
        // Unset fields keep their defaults
        assert_eq!(config.site.templates, PathBuf::from("templates"));
        assert_eq!(config.build.on_error, ErrorPolicy::Skip);
        assert_eq!(config.build.source_extension, "md");
    }

    #[test]
    fn test_invalid_error_policy() {
        let result = serde_yaml::from_str::<RootConfig>("build:\n  on_error: retry\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_roundtrips_through_yaml() {
        let config = RootConfig::default();
        let text = serde_yaml::to_string(&config).unwrap();
        let parsed: RootConfig = serde_yaml::from_str(&text).unwrap();
        assert_eq!(parsed.site.output, config.site.output);
        assert_eq!(parsed.markdown.extensions, config.markdown.extensions);
    }
}
