//! Conference repository for database operations.

use std::ops::Deref;

use async_trait::async_trait;
use log::debug;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use crate::entities::conference;

use super::generic::Repository;
use super::RepoResult;

/// Hierarchy-aware queries for conferences.
#[async_trait]
pub trait ConferenceQueries {
    /// Conferences under a league.
    async fn get_by_league_id(&self, league_id: i32) -> RepoResult<Vec<conference::Model>>;
}

/// Repository for conference records. Generic CRUD is reachable through the
/// `Deref` to [`Repository`].
pub struct ConferenceRepository {
    repo: Repository<conference::Entity>,
}

impl ConferenceRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }
}

impl Deref for ConferenceRepository {
    type Target = Repository<conference::Entity>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}

#[async_trait]
impl ConferenceQueries for ConferenceRepository {
    async fn get_by_league_id(&self, league_id: i32) -> RepoResult<Vec<conference::Model>> {
        debug!("fetching conferences by league id {league_id}");
        self.repo
            .find(Condition::all().add(conference::Column::LeagueId.eq(league_id)))
            .await
    }
}
