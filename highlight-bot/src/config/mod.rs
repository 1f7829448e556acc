//! Bot configuration: BaseConfig (Telegram + log + DB) + HighlightConfig (Omnivore, delivery, sync).

mod base;
mod bot_config;
mod highlight;


pub use base::BaseConfig;
pub use bot_config::BotConfig;
pub use highlight::HighlightConfig;
