use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::paths;
use crate::translation::{
    AuthScheme, DEFAULT_LANGUAGE, DEFAULT_SOURCE_TEXT, RequestPayload, SamplingParams,
    TranslateError, language_name,
};

/// Azure OpenAI gpt-4o deployment used when nothing else is configured.
pub const DEFAULT_ENDPOINT: &str = "https://tsunomuropenai.openai.azure.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-08-01-preview";

/// Environment variable holding the API key unless the config file names another one.
pub const DEFAULT_API_KEY_ENV: &str = "OPENAI_API_KEY";

/// Settings in the `[translate]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TranslateConfig {
    /// Full chat-completions URL, including any `api-version` query.
    pub endpoint: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
    /// Header scheme used to send the API key.
    pub auth: Option<AuthScheme>,
    /// Default target language (ISO 639-1 code).
    pub to: Option<String>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub max_tokens: Option<u32>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/aoai-translate/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub translate: TranslateConfig,
}

/// Resolved configuration after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub endpoint: String,
    pub api_key_env: String,
    pub auth: AuthScheme,
    /// The target language code.
    pub target_language: String,
    /// Human-readable name of `target_language`, as embedded in the prompt.
    pub language_name: &'static str,
    /// The text to translate.
    pub text: String,
    pub sampling: SamplingParams,
}

impl ResolvedConfig {
    /// Reads the API key from the configured environment variable.
    ///
    /// An empty value counts as unset.
    pub fn api_key(&self) -> Result<String, TranslateError> {
        std::env::var(&self.api_key_env)
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| TranslateError::MissingApiKey {
                env_var: self.api_key_env.clone(),
            })
    }

    pub fn payload(&self) -> RequestPayload {
        RequestPayload::translation(&self.text, self.language_name, &self.sampling)
    }
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Text override.
    pub text: Option<String>,
    /// Target language code override.
    pub to: Option<String>,
    /// Endpoint URL override.
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default.
///
/// # Errors
///
/// Returns an error if the target language is unsupported or a sampling
/// parameter is out of range.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let file = &config_file.translate;

    let target_language = options
        .to
        .as_ref()
        .or(file.to.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());
    let language_name = language_name(&target_language)?;

    let endpoint = options
        .endpoint
        .as_ref()
        .or(file.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    let text = options
        .text
        .clone()
        .unwrap_or_else(|| DEFAULT_SOURCE_TEXT.to_string());
    if text.trim().is_empty() {
        bail!("Input is empty");
    }

    let defaults = SamplingParams::default();
    let sampling = SamplingParams {
        temperature: file.temperature.unwrap_or(defaults.temperature),
        top_p: file.top_p.unwrap_or(defaults.top_p),
        max_tokens: file.max_tokens.unwrap_or(defaults.max_tokens),
    };
    validate_sampling(&sampling)?;

    Ok(ResolvedConfig {
        endpoint,
        api_key_env: file
            .api_key_env
            .clone()
            .unwrap_or_else(|| DEFAULT_API_KEY_ENV.to_string()),
        auth: file.auth.unwrap_or_default(),
        target_language,
        language_name,
        text,
        sampling,
    })
}

/// A failure while locating, reading, or resolving configuration.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ConfigError(#[from] anyhow::Error);

/// Loads the config file and resolves `options` against it.
pub fn load_config(options: &ResolveOptions) -> Result<ResolvedConfig, ConfigError> {
    let manager = ConfigManager::new()?;
    let file = manager.load_or_default()?;
    Ok(resolve_config(options, &file)?)
}

fn validate_sampling(sampling: &SamplingParams) -> Result<()> {
    if !(0.0..=2.0).contains(&sampling.temperature) {
        bail!(
            "Invalid configuration: 'temperature' must be between 0 and 2 (got {})",
            sampling.temperature
        );
    }
    if !(0.0..=1.0).contains(&sampling.top_p) {
        bail!(
            "Invalid configuration: 'top_p' must be between 0 and 1 (got {})",
            sampling.top_p
        );
    }
    if sampling.max_tokens == 0 {
        bail!("Invalid configuration: 'max_tokens' must be positive");
    }
    Ok(())
}

/// Locates and loads the optional configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/aoai-translate/config.toml`
    /// or `~/.config/aoai-translate/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
