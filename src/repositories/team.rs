//! Team repository for database operations.

use std::ops::Deref;

use async_trait::async_trait;
use log::debug;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, RelationTrait};

use crate::entities::{conference, division, team};

use super::generic::{QueryOptions, Repository};
use super::RepoResult;

/// Hierarchy-aware queries for teams.
#[async_trait]
pub trait TeamQueries {
    /// Teams in a division.
    async fn get_by_division_id(&self, division_id: i32) -> RepoResult<Vec<team::Model>>;

    /// Teams anywhere under a league.
    async fn get_by_league_id(&self, league_id: i32) -> RepoResult<Vec<team::Model>>;

    /// Teams anywhere under a conference.
    async fn get_by_conference_id(&self, conference_id: i32) -> RepoResult<Vec<team::Model>>;
}

/// Repository for team records. Generic CRUD is reachable through the
/// `Deref` to [`Repository`].
pub struct TeamRepository {
    repo: Repository<team::Entity>,
}

impl TeamRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }
}

impl Deref for TeamRepository {
    type Target = Repository<team::Entity>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}

#[async_trait]
impl TeamQueries for TeamRepository {
    async fn get_by_division_id(&self, division_id: i32) -> RepoResult<Vec<team::Model>> {
        debug!("fetching teams by division id {division_id}");
        self.repo
            .find(Condition::all().add(team::Column::DivisionId.eq(division_id)))
            .await
    }

    async fn get_by_league_id(&self, league_id: i32) -> RepoResult<Vec<team::Model>> {
        debug!("fetching teams by league id {league_id}");
        self.repo
            .get_by_predicate(
                Condition::all().add(conference::Column::LeagueId.eq(league_id)),
                QueryOptions::default()
                    .join(team::Relation::Division.def())
                    .join(division::Relation::Conference.def()),
            )
            .await
    }

    async fn get_by_conference_id(&self, conference_id: i32) -> RepoResult<Vec<team::Model>> {
        debug!("fetching teams by conference id {conference_id}");
        self.repo
            .get_by_predicate(
                Condition::all().add(division::Column::ConferenceId.eq(conference_id)),
                QueryOptions::default().join(team::Relation::Division.def()),
            )
            .await
    }
}
