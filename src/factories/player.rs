use chrono::{NaiveDate, NaiveDateTime};

use crate::database::RecordStore;
use crate::domain::{Player, PlayerPayload};
use crate::errors::{IngestError, IngestResult};

/// Maps the `player` section onto a full replacement of the stored player
pub fn build_player<S>(store: &S, payload: &PlayerPayload, synced_at: NaiveDateTime) -> IngestResult<Player>
where
    S: RecordStore + ?Sized,
{
    let birth_date = parse_birth_date(&payload.date_of_birth)?;
    let highest_singles_ranking_date = parse_month_year(&payload.date_highest_singles_ranking)?;

    let existing = store.find_player(&payload.id)?;
    if existing.is_none() {
        log::debug!("No stored player for {}, creating one", payload.id);
    }

    Ok(Player {
        id: existing.and_then(|p| p.id),
        api_id: payload.id.clone(),
        name: normalize_name(&payload.name),
        nationality: payload.nationality.clone(),
        country_code: payload.country_code.clone(),
        abbreviation: payload.abbreviation.clone(),
        gender: payload.gender.clone(),
        birth_date,
        pro_year: payload.pro_year,
        handedness: payload.handedness.clone(),
        height: payload.height,
        weight: payload.weight,
        highest_singles_ranking: payload.highest_singles_ranking,
        highest_singles_ranking_date,
        updated_at: synced_at,
    })
}

/// Sportradar sends "Last, First"; the comma is dropped
pub fn normalize_name(name: &str) -> String {
    name.replace(',', "")
}

/// `YYYY-MM-DD`
pub fn parse_birth_date(value: &str) -> IngestResult<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|e| IngestError::malformed(format!("date_of_birth {:?}: {}", value, e)))
}

/// `MM.YYYY`, resolved to the first day of that month
pub fn parse_month_year(value: &str) -> IngestResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("01.{}", value), "%d.%m.%Y").map_err(|e| {
        IngestError::malformed(format!("date_highest_singles_ranking {:?}: {}", value, e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::memory::MemoryStore;
    use crate::database::CommitBatch;

    fn payload() -> PlayerPayload {
        PlayerPayload {
            id: "sr:competitor:14486".to_string(),
            name: "Nadal, Rafael".to_string(),
            nationality: "Spain".to_string(),
            country_code: "ESP".to_string(),
            abbreviation: "NAD".to_string(),
            gender: "male".to_string(),
            date_of_birth: "1986-06-03".to_string(),
            pro_year: Some(2001),
            handedness: Some("left".to_string()),
            height: Some(185),
            weight: Some(85),
            highest_singles_ranking: 1,
            date_highest_singles_ranking: "08.2008".to_string(),
        }
    }

    fn synced_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(12, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_normalize_name_drops_commas() {
        assert_eq!(normalize_name("Nadal, Rafael"), "Nadal Rafael");
        assert_eq!(normalize_name("Federer Roger"), "Federer Roger");
    }

    #[test]
    fn test_parse_birth_date() {
        assert_eq!(
            parse_birth_date("1986-06-03").unwrap(),
            NaiveDate::from_ymd_opt(1986, 6, 3).unwrap()
        );
        assert!(matches!(
            parse_birth_date("03/06/1986"),
            Err(IngestError::MalformedSourceData(_))
        ));
    }

    #[test]
    fn test_parse_month_year() {
        assert_eq!(
            parse_month_year("08.2008").unwrap(),
            NaiveDate::from_ymd_opt(2008, 8, 1).unwrap()
        );
        assert!(matches!(
            parse_month_year("2008-08"),
            Err(IngestError::MalformedSourceData(_))
        ));
        assert!(matches!(
            parse_month_year("13.2008"),
            Err(IngestError::MalformedSourceData(_))
        ));
    }

    #[test]
    fn test_build_new_player() {
        let store = MemoryStore::new();

        let player = build_player(&store, &payload(), synced_at()).unwrap();

        assert_eq!(player.id, None);
        assert_eq!(player.api_id, "sr:competitor:14486");
        assert_eq!(player.name, "Nadal Rafael");
        assert_eq!(player.birth_date, NaiveDate::from_ymd_opt(1986, 6, 3).unwrap());
        assert_eq!(
            player.highest_singles_ranking_date,
            NaiveDate::from_ymd_opt(2008, 8, 1).unwrap()
        );
        assert_eq!(player.updated_at, synced_at());
        assert_eq!(store.commit_count(), 0);
    }

    #[test]
    fn test_existing_player_keeps_id_and_is_overwritten() {
        let store = MemoryStore::new();
        let first = build_player(&store, &payload(), synced_at()).unwrap();
        let stored = store
            .commit(CommitBatch {
                player: first,
                singles: None,
                doubles: None,
                statistics: Vec::new(),
            })
            .unwrap();

        let mut changed = payload();
        changed.weight = None;
        changed.highest_singles_ranking = 2;
        let later = synced_at() + chrono::Duration::days(1);

        let player = build_player(&store, &changed, later).unwrap();

        assert_eq!(player.id, stored.id);
        assert_eq!(player.weight, None);
        assert_eq!(player.highest_singles_ranking, 2);
        assert_eq!(player.updated_at, later);
    }

    #[test]
    fn test_wrong_month_year_format_fails() {
        let store = MemoryStore::new();
        let mut bad = payload();
        bad.date_highest_singles_ranking = "2008-08".to_string();

        let result = build_player(&store, &bad, synced_at());

        assert!(matches!(result, Err(IngestError::MalformedSourceData(_))));
    }
}
