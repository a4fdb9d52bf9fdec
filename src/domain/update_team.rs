use std::sync::Arc;

use crate::domain::entities::{Selector, Team, TeamPatch};
use crate::repository::errors::{FindError, UpdateError};
use crate::repository::team::Repository;

pub struct Request {
    pub selector: Selector,
    pub patch: TeamPatch,
}

#[derive(PartialEq, Debug)]
pub enum Error {
    Conflict(String),
    NotFound,
    Unknown,
}

pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Team, Error> {
    let target = repo.find_team(&req.selector).await.map_err(|err| match err {
        FindError::NotFound => Error::NotFound,
        FindError::Unknown => Error::Unknown,
    })?;

    // A slug may only move onto a slug no other team holds.
    if let Some(slug) = req.patch.slug.clone().filter(|slug| *slug != target.slug) {
        match repo.find_team(&Selector::Slug(slug.clone())).await {
            Ok(holder) if holder.id != target.id => return Err(Error::Conflict(slug)),
            Err(FindError::Unknown) => return Err(Error::Unknown),
            _ => (),
        }
    }

    repo.update_team(&Selector::Id(target.id), req.patch)
        .await
        .map_err(|err| match err {
            UpdateError::NotFound => Error::NotFound,
            UpdateError::Unknown => Error::Unknown,
        })
}
