use anyhow::Result;
use log::{error, info};
use serde_json::Value;

use super::source::PlayerSource;
use crate::config::settings::SourceSettings;
use crate::domain::competitor_api_id;
use crate::errors::{IngestError, IngestResult};
use crate::http::JsonClient;

/// Sportradar tennis API client
pub struct SportradarClient {
    client: JsonClient,
    settings: SourceSettings,
}

impl SportradarClient {
    pub fn new(settings: &SourceSettings) -> Result<Self> {
        let client = JsonClient::new(settings.user_agent, settings.timeout())?;
        Ok(Self {
            client,
            settings: settings.clone(),
        })
    }

    fn build_profile_url(&self, api_id_int: u64) -> String {
        format!(
            "{}/{}/players/{}/profile.json?api_key={}",
            self.settings.base_url,
            self.settings.locale,
            competitor_api_id(api_id_int),
            self.settings.api_key
        )
    }
}

impl PlayerSource for SportradarClient {
    async fn fetch_profile(&self, api_id_int: u64) -> IngestResult<Value> {
        info!("Fetching profile for {}", competitor_api_id(api_id_int));

        let url = self.build_profile_url(api_id_int);
        self.client.get_json(&url).await.map_err(|e| {
            error!("Failed to fetch profile for {}: {:#}", api_id_int, e);
            IngestError::source_unavailable(format!("{:#}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SourceSettings {
        SourceSettings {
            api_key: "secret".to_string(),
            ..SourceSettings::default()
        }
    }

    #[test]
    fn test_profile_url() {
        let client = SportradarClient::new(&settings()).unwrap();

        assert_eq!(
            client.build_profile_url(14486),
            "https://api.sportradar.com/tennis-t2/fr/players/sr:competitor:14486/profile.json?api_key=secret"
        );
    }

    #[tokio::test]
    async fn test_unreachable_source_is_source_unavailable() {
        let client = SportradarClient::new(&SourceSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            timeout_secs: 2,
            ..settings()
        })
        .unwrap();

        let result = client.fetch_profile(14486).await;

        assert!(matches!(result, Err(IngestError::SourceUnavailable(_))));
    }
}
