use std::sync::Arc;

use crate::domain::entities::{Selector, Team};
use crate::repository::errors::FindError;
use crate::repository::team::Repository;

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    Unknown,
}

pub struct Request {
    pub selector: Selector,
}

pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Team, Error> {
    repo.find_team(&req.selector).await.map_err(|err| match err {
        FindError::NotFound => Error::NotFound,
        FindError::Unknown => Error::Unknown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks;
    use crate::repository::team::InMemoryRepository;

    #[tokio::test]
    async fn it_should_find_the_same_team_by_id_and_by_slug() {
        let repo = Arc::new(InMemoryRepository::new());
        let team = mocks::insert_mock_team(repo.clone()).await;

        let by_id = execute(
            repo.clone(),
            Request {
                selector: Selector::Id(team.id.clone()),
            },
        )
        .await;
        let by_slug = execute(
            repo,
            Request {
                selector: Selector::Slug(team.slug.clone()),
            },
        )
        .await;

        assert_eq!(by_id, Ok(team));
        assert_eq!(by_id, by_slug);
    }

    #[tokio::test]
    async fn it_should_return_not_found_when_team_does_not_exist() {
        let repo = Arc::new(InMemoryRepository::new());

        let result = execute(
            repo,
            Request {
                selector: Selector::Id("missing".to_string()),
            },
        )
        .await;

        assert_eq!(result, Err(Error::NotFound));
    }
}
