mod manager;

pub use manager::{
    ConfigError, ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT, ResolveOptions,
    ResolvedConfig, TranslateConfig, load_config, resolve_config,
};
