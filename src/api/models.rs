use serde::Serialize;

use crate::domain::{PeriodStatistics, Player, Ranking};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerView {
    pub player: Player,
    pub slug: String,
    pub singles_ranking: Option<Ranking>,
    pub doubles_ranking: Option<Ranking>,
    pub statistics: Vec<PeriodStatistics>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSearchItem {
    pub name: String,
    pub slug: String,
    pub api_id_int: Option<u64>,
    pub location: Option<String>,
}

impl From<&Player> for PlayerSearchItem {
    fn from(player: &Player) -> Self {
        Self {
            name: player.name.clone(),
            slug: player.slug(),
            api_id_int: player.api_id_int(),
            location: player.view_path(),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncResponse {
    pub api_id: String,
    pub api_id_int: Option<u64>,
    pub name: String,
    pub slug: String,
    pub location: Option<String>,
}

impl From<&Player> for SyncResponse {
    fn from(player: &Player) -> Self {
        Self {
            api_id: player.api_id.clone(),
            api_id_int: player.api_id_int(),
            name: player.name.clone(),
            slug: player.slug(),
            location: player.view_path(),
        }
    }
}
