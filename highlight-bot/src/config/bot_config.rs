//! BotConfig: BaseConfig + HighlightConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{BaseConfig, HighlightConfig};

/// Bot config. Use BotConfig::load() for env-based loading, then validate() before init.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub base: BaseConfig,
    pub highlight: HighlightConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let highlight = HighlightConfig::from_env()?;
        Ok(Self { base, highlight })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.highlight.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn highlight(&self) -> &HighlightConfig {
        &self.highlight
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn database_url(&self) -> &str {
        &self.base.database_url
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
}
