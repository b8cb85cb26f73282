//! League repository for database operations.

use std::ops::Deref;

use async_trait::async_trait;
use log::debug;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection};

use crate::entities::league;

use super::generic::Repository;
use super::RepoResult;

/// Hierarchy-aware queries for leagues.
#[async_trait]
pub trait LeagueQueries {
    /// Leagues whose name contains the given fragment.
    async fn get_by_name(&self, name: &str) -> RepoResult<Vec<league::Model>>;
}

/// Repository for league records. Generic CRUD is reachable through the
/// `Deref` to [`Repository`].
pub struct LeagueRepository {
    repo: Repository<league::Entity>,
}

impl LeagueRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }
}

impl Deref for LeagueRepository {
    type Target = Repository<league::Entity>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}

#[async_trait]
impl LeagueQueries for LeagueRepository {
    async fn get_by_name(&self, name: &str) -> RepoResult<Vec<league::Model>> {
        debug!("fetching leagues by name: {name}");
        self.repo
            .find(Condition::all().add(league::Column::Name.contains(name)))
            .await
    }
}
