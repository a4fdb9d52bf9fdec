use std::sync::Arc;

use crate::domain::entities::Team;
use crate::repository::errors::FindAllError;
use crate::repository::team::Repository;

/// Upper bound of teams returned by a single listing.
pub const MAX_TEAMS: usize = 1000;

#[derive(Debug, PartialEq)]
pub enum Error {
    Unknown,
}

pub async fn execute(repo: Arc<dyn Repository>) -> Result<Vec<Team>, Error> {
    repo.find_all_teams(MAX_TEAMS).await.map_err(|err| match err {
        FindAllError::Unknown => Error::Unknown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks;
    use crate::repository::team::InMemoryRepository;

    #[tokio::test]
    async fn it_should_return_every_team_when_below_the_cap() {
        let repo = Arc::new(InMemoryRepository::new());
        let team = mocks::insert_mock_team(repo.clone()).await;

        let result = execute(repo).await;

        match result {
            Ok(teams) => assert_eq!(teams, vec![team]),
            _ => unreachable!(),
        }
    }

    #[tokio::test]
    async fn it_should_never_return_more_than_the_cap() {
        let repo = Arc::new(InMemoryRepository::new());
        for _ in 0..MAX_TEAMS + 5 {
            mocks::insert_mock_team(repo.clone()).await;
        }

        let result = execute(repo).await;

        match result {
            Ok(teams) => assert_eq!(teams.len(), MAX_TEAMS),
            _ => unreachable!(),
        }
    }
}
