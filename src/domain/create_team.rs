use std::sync::Arc;

use crate::domain::entities::{Selector, Team, TeamCreation};
use crate::repository::errors::{FindError, InsertError};
use crate::repository::team::Repository;

pub type Request = TeamCreation;

#[derive(PartialEq, Debug)]
pub enum Error {
    Conflict(String),
    Unknown,
}

pub async fn execute(repo: Arc<dyn Repository>, req: Request) -> Result<Team, Error> {
    match repo.find_team(&Selector::Slug(req.slug.clone())).await {
        Ok(..) => return Err(Error::Conflict(req.slug)),
        Err(FindError::Unknown) => return Err(Error::Unknown),
        Err(FindError::NotFound) => (),
    };

    match repo.insert_team(req).await {
        Ok(team) => Ok(team),
        Err(err) => Err(match err {
            InsertError::Unknown => Error::Unknown,
        }),
    }
}
