use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct MatcherSettings {
    pub interval_secs: u64,
}

impl MatcherSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct StorageSettings {
    pub database_url: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TelegramSettings {
    pub token: String,
    /// Chat that receives fired reminders.
    pub notify_chat_id: Option<i64>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct AppSettings {
    pub matcher: MatcherSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    pub telegram: Option<TelegramSettings>,
}

impl AppSettings {
    /// Layers `appsettings`, `appsettings.local` and `APP__*` environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .set_default("matcher.interval_secs", 60)?
            .add_source(File::with_name("appsettings").required(false))
            .add_source(File::with_name("appsettings.local").required(false))
            .add_source(Environment::with_prefix("APP").separator("__"))
            .build()?;

        settings.try_deserialize()
    }
}
