use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use bson::{doc, oid::ObjectId, Document};
use futures::TryStreamExt;
use mongodb::options::{ClientOptions, FindOneAndUpdateOptions, FindOptions, ReturnDocument};

use crate::domain::entities::{Selector, Team, TeamCreation, TeamPatch};

use super::errors::{DeleteError, FindAllError, FindError, InsertError, UpdateError};

const COLLECTION: &str = "teams";

#[async_trait]
pub trait Repository: Send + Sync {
    async fn insert_team(&self, team: TeamCreation) -> Result<Team, InsertError>;
    async fn find_all_teams(&self, limit: usize) -> Result<Vec<Team>, FindAllError>;
    async fn find_team(&self, selector: &Selector) -> Result<Team, FindError>;
    /// Applies the patch to the first team matching the selector and returns
    /// it as stored afterwards. An empty patch is a plain read.
    async fn update_team(&self, selector: &Selector, patch: TeamPatch)
        -> Result<Team, UpdateError>;
    async fn delete_team(&self, selector: &Selector) -> Result<(), DeleteError>;
}

fn filter(selector: &Selector) -> Document {
    match selector {
        Selector::Id(id) => doc! { "_id": id.as_str() },
        Selector::Slug(slug) => doc! { "slug": slug.as_str() },
    }
}

pub struct MongoDbRepository {
    db: mongodb::Database,
}

impl MongoDbRepository {
    pub async fn new(
        uri: &str,
        database: &str,
        pool_size: u32,
    ) -> Result<MongoDbRepository, mongodb::error::Error> {
        // Parse a connection string into an options struct.
        let mut client_options = ClientOptions::parse(uri).await?;
        client_options.max_pool_size = Some(pool_size);

        let client = mongodb::Client::with_options(client_options)?;
        let db = client.database(database);

        db.run_command(doc! {"ping": 1}, None).await?;

        Ok(MongoDbRepository { db })
    }

    fn teams(&self) -> mongodb::Collection<Team> {
        self.db.collection::<Team>(COLLECTION)
    }
}

#[async_trait]
impl Repository for MongoDbRepository {
    async fn insert_team(&self, team: TeamCreation) -> Result<Team, InsertError> {
        let team = team.into_team(ObjectId::new().to_hex());
        let collection = self.teams();

        collection.insert_one(&team, None).await?;

        match collection.find_one(doc! { "_id": team.id.as_str() }, None).await? {
            Some(stored) => Ok(stored),
            None => {
                log::error!("team {} vanished right after being inserted", team.id);
                Err(InsertError::Unknown)
            }
        }
    }

    async fn find_all_teams(&self, limit: usize) -> Result<Vec<Team>, FindAllError> {
        // A zero limit means "no limit" to mongodb.
        if limit == 0 {
            return Ok(vec![]);
        }
        let options = FindOptions::builder().limit(limit as i64).build();
        let cursor = self.teams().find(None, options).await?;
        let teams: Vec<Team> = cursor.try_collect().await?;

        Ok(teams)
    }

    async fn find_team(&self, selector: &Selector) -> Result<Team, FindError> {
        match self.teams().find_one(filter(selector), None).await? {
            Some(team) => Ok(team),
            None => Err(FindError::NotFound),
        }
    }

    async fn update_team(
        &self,
        selector: &Selector,
        patch: TeamPatch,
    ) -> Result<Team, UpdateError> {
        if patch.is_empty() {
            return match self.teams().find_one(filter(selector), None).await? {
                Some(team) => Ok(team),
                None => Err(UpdateError::NotFound),
            };
        }

        let fields = bson::to_document(&patch)?;
        let update = doc! { "$set": fields };
        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let result = self
            .teams()
            .find_one_and_update(filter(selector), update, options)
            .await?;

        match result {
            Some(team) => Ok(team),
            None => Err(UpdateError::NotFound),
        }
    }

    async fn delete_team(&self, selector: &Selector) -> Result<(), DeleteError> {
        let result = self.teams().delete_one(filter(selector), None).await?;

        if result.deleted_count == 1 {
            return Ok(());
        }
        Err(DeleteError::NotFound)
    }
}

/// Keeps the teams in insertion order, which plays the role of the store order.
pub struct InMemoryRepository {
    teams: Mutex<Vec<Team>>,
}

impl InMemoryRepository {
    pub fn new() -> InMemoryRepository {
        InMemoryRepository {
            teams: Mutex::new(vec![]),
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, Vec<Team>>> {
        self.teams.lock().ok()
    }
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert_team(&self, team: TeamCreation) -> Result<Team, InsertError> {
        let mut lock = self.lock().ok_or(InsertError::Unknown)?;

        let team = team.into_team(ObjectId::new().to_hex());
        lock.push(team.clone());

        Ok(team)
    }

    async fn find_all_teams(&self, limit: usize) -> Result<Vec<Team>, FindAllError> {
        let lock = self.lock().ok_or(FindAllError::Unknown)?;

        Ok(lock.iter().take(limit).cloned().collect())
    }

    async fn find_team(&self, selector: &Selector) -> Result<Team, FindError> {
        let lock = self.lock().ok_or(FindError::Unknown)?;

        match lock.iter().find(|team| selector.matches(team)) {
            Some(team) => Ok(team.clone()),
            None => Err(FindError::NotFound),
        }
    }

    async fn update_team(
        &self,
        selector: &Selector,
        patch: TeamPatch,
    ) -> Result<Team, UpdateError> {
        let mut lock = self.lock().ok_or(UpdateError::Unknown)?;

        match lock.iter_mut().find(|team| selector.matches(team)) {
            Some(team) => {
                team.apply(patch);
                Ok(team.clone())
            }
            None => Err(UpdateError::NotFound),
        }
    }

    async fn delete_team(&self, selector: &Selector) -> Result<(), DeleteError> {
        let mut lock = self.lock().ok_or(DeleteError::Unknown)?;

        match lock.iter().position(|team| selector.matches(team)) {
            Some(idx) => {
                lock.remove(idx);
                Ok(())
            }
            None => Err(DeleteError::NotFound),
        }
    }
}
