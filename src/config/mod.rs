//! Optional KDL configuration for the evaluator.
//!
//! ```kdl
//! classifier {
//!     model "gpt-4.1-nano"
//!     max-tokens 256
//!     api-base "https://api.openai.com/v1"
//!     organization "org-123"
//!     timeout-ms 20000
//! }
//! always-allow "ExitPlanMode" "NotebookRead"
//! ```
//!
//! Every node is optional; an empty file yields [`Config::default`]. The API
//! key is never read from the file.

mod document;

use std::path::{Path, PathBuf};

use document::{ConfigDocument, ConfigSection, ParseNode};

pub const DEFAULT_MODEL: &str = "gpt-4.1-nano";
pub const DEFAULT_MAX_TOKENS: u32 = 256;
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Top-level configuration.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub classifier: ClassifierSettings,
    /// Tool names auto-allowed on top of the built-in always-safe set.
    pub always_allow: Vec<String>,
}

/// Connection and request settings for the classifier endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifierSettings {
    pub model: String,
    pub max_tokens: u32,
    pub api_base: String,
    pub api_key: Option<String>,
    pub organization: Option<String>,
    /// `None` leaves the HTTP client's default in place.
    pub timeout_ms: Option<u64>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            organization: None,
            timeout_ms: None,
        }
    }
}

/// Values supplied on the command line or through the environment.
/// Anything set here wins over the config file.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub model: Option<String>,
    pub api_base: Option<String>,
    pub api_key: Option<String>,
    pub organization: Option<String>,
}

/// Errors that can occur when loading or parsing a config file.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    #[diagnostic(code(config::not_found))]
    NotFound(PathBuf),
    #[error("failed to read config: {0}")]
    #[diagnostic(code(config::read))]
    ReadError(#[from] std::io::Error),
    #[error("invalid KDL syntax: {0}")]
    #[diagnostic(code(config::syntax))]
    ParseError(String),
    #[error("invalid config: {0}")]
    #[diagnostic(
        code(config::invalid),
        help("allowed nodes: `classifier {{ model, max-tokens, api-base, organization, timeout-ms }}` and `always-allow`")
    )]
    ValidationError(String),
}

impl Config {
    /// Load a config from a KDL file at the given path.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::load(path)?;
        Self::from_document(&doc)
    }

    /// Parse a KDL string into a Config.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let doc = ConfigDocument::parse(content)?;
        Self::from_document(&doc)
    }

    fn from_document(doc: &ConfigDocument) -> Result<Self, ConfigError> {
        let mut config = Config::default();
        for node in doc.root().nodes() {
            match node.name() {
                "classifier" => {
                    if node.entry_count() > 0 {
                        return Err(invalid(&node, "classifier takes no inline values"));
                    }
                    if let Some(children) = node.children() {
                        parse_classifier(&children, &mut config.classifier)?;
                    }
                }
                "always-allow" => {
                    let tools = node.string_values();
                    if tools.is_empty() || tools.len() != node.entry_count() {
                        return Err(invalid(
                            &node,
                            "always-allow requires one or more tool names as strings",
                        ));
                    }
                    for tool in tools {
                        if !config.always_allow.iter().any(|t| t == tool) {
                            config.always_allow.push(tool.to_string());
                        }
                    }
                }
                other => {
                    return Err(invalid(&node, &format!("unknown node `{other}`")));
                }
            }
        }
        Ok(config)
    }

    /// Apply CLI/environment overrides on top of file values.
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        let settings = &mut self.classifier;
        if let Some(model) = overrides.model {
            settings.model = model;
        }
        if let Some(api_base) = overrides.api_base {
            settings.api_base = api_base;
        }
        if let Some(api_key) = overrides.api_key {
            settings.api_key = Some(api_key);
        }
        if let Some(organization) = overrides.organization {
            settings.organization = Some(organization);
        }
    }
}

fn parse_classifier(
    section: &ConfigSection<'_>,
    settings: &mut ClassifierSettings,
) -> Result<(), ConfigError> {
    for node in section.nodes() {
        match node.name() {
            "model" => settings.model = required_string(&node)?,
            "api-base" => settings.api_base = required_string(&node)?,
            "organization" => settings.organization = Some(required_string(&node)?),
            "max-tokens" => {
                let value = positive_integer(&node)?;
                settings.max_tokens = u32::try_from(value)
                    .map_err(|_| invalid(&node, "max-tokens is out of range"))?;
            }
            "timeout-ms" => {
                let value = positive_integer(&node)?;
                settings.timeout_ms = Some(
                    u64::try_from(value)
                        .map_err(|_| invalid(&node, "timeout-ms is out of range"))?,
                );
            }
            "api-key" => {
                return Err(invalid(
                    &node,
                    "api-key is not read from the config file; set OPENAI_API_KEY",
                ));
            }
            other => {
                return Err(invalid(
                    &node,
                    &format!("unknown classifier setting `{other}`"),
                ));
            }
        }
    }
    Ok(())
}

fn required_string(node: &ParseNode<'_>) -> Result<String, ConfigError> {
    match node.single_string() {
        Some(value) if !value.trim().is_empty() => Ok(value.to_string()),
        _ => Err(invalid(
            node,
            &format!("{} requires a single non-empty string", node.name()),
        )),
    }
}

fn positive_integer(node: &ParseNode<'_>) -> Result<i128, ConfigError> {
    match node.single_integer() {
        Some(value) if value > 0 => Ok(value),
        _ => Err(invalid(
            node,
            &format!("{} requires a single positive integer", node.name()),
        )),
    }
}

fn invalid(node: &ParseNode<'_>, message: &str) -> ConfigError {
    ConfigError::ValidationError(format!("line {}: {message}", node.line()))
}
