use std::sync::Arc;

use serde_json::json;

use super::entities::{HttpUrl, Team, TeamCreation, TeamPatch};
use crate::repository::team::{InMemoryRepository, Repository};

pub fn mock_team_creation() -> TeamCreation {
    TeamCreation {
        name: "River Plate".to_string(),
        abbrev: "RIV".to_string(),
        slug: "river-plate".to_string(),
        crest: None,
        colors: Some(vec![json!(243), json!(1), json!(1)]),
        espn_url: None,
        forza_url: HttpUrl::try_from(
            "https://forzafootball.com/es/team/river-plate-3182".to_string(),
        )
        .ok(),
    }
}

pub fn mock_other_team_creation() -> TeamCreation {
    TeamCreation {
        name: "Boca Juniors".to_string(),
        abbrev: "BOC".to_string(),
        slug: "boca-juniors".to_string(),
        crest: None,
        colors: Some(vec![json!(0), json!(51), json!(153)]),
        espn_url: None,
        forza_url: None,
    }
}

pub fn mock_team_patch() -> TeamPatch {
    TeamPatch {
        abbrev: Some("RP".to_string()),
        ..Default::default()
    }
}

pub async fn insert_mock_team(repo: Arc<InMemoryRepository>) -> Team {
    match repo.insert_team(mock_team_creation()).await {
        Ok(team) => team,
        _ => unreachable!("team must be created for this test"),
    }
}
