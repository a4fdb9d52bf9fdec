use std::sync::Arc;

use crate::domain::entities::Selector;
use crate::repository::errors::DeleteError;
use crate::repository::team::Repository;

#[derive(Debug, PartialEq)]
pub enum Error {
    NotFound,
    Unknown,
}

pub struct Request {
    pub selector: Selector,
}

pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<(), Error> {
    match repo.delete_team(&req.selector).await {
        Err(err) => match err {
            DeleteError::NotFound => Err(Error::NotFound),
            DeleteError::Unknown => Err(Error::Unknown),
        },
        Ok(()) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mocks;
    use crate::repository::errors::FindError;
    use crate::repository::team::InMemoryRepository;

    #[tokio::test]
    async fn it_should_remove_an_existing_team() {
        let repo = Arc::new(InMemoryRepository::new());
        let team = mocks::insert_mock_team(repo.clone()).await;
        let selector = Selector::Id(team.id);

        let result = execute(
            repo.clone(),
            Request {
                selector: selector.clone(),
            },
        )
        .await;

        assert_eq!(result, Ok(()));
        assert_eq!(repo.find_team(&selector).await, Err(FindError::NotFound));
    }

    #[tokio::test]
    async fn it_should_return_not_found_when_team_does_not_exist() {
        let repo = Arc::new(InMemoryRepository::new());

        let result = execute(
            repo,
            Request {
                selector: Selector::Slug("river-plate".to_string()),
            },
        )
        .await;

        assert_eq!(result, Err(Error::NotFound));
    }
}
