use std::time::Duration;

#[derive(Debug, Clone)]
pub struct SourceSettings {
    pub base_url: String,
    pub locale: String,
    pub api_key: String,
    pub user_agent: &'static str,
    pub timeout_secs: u64,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.sportradar.com/tennis-t2".to_string(),
            locale: "fr".to_string(),
            api_key: String::new(),
            user_agent: "TennisPlayerSync/1.0",
            timeout_secs: 30,
        }
    }
}

impl SourceSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseSettings {
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "tennis_players.db".to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub source: SourceSettings,
    pub database: DatabaseSettings,
    pub server: ServerSettings,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `SPORTRADAR_*` and `DATABASE_PATH` from the environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(key) = lookup("SPORTRADAR_API_KEY") {
            config.source.api_key = key;
        }
        if let Some(locale) = lookup("SPORTRADAR_LOCALE") {
            config.source.locale = locale;
        }
        if let Some(url) = lookup("SPORTRADAR_BASE_URL") {
            config.source.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(path) = lookup("DATABASE_PATH") {
            config.database.path = path;
        }

        config
    }
}
