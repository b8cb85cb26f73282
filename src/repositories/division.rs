//! Division repository for database operations.

use std::ops::Deref;

use async_trait::async_trait;
use log::{debug, warn};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, RelationTrait,
};

use crate::entities::{conference, division, team};

use super::generic::{QueryOptions, Repository};
use super::{RepoError, RepoResult};

/// Hierarchy-aware queries for divisions.
#[async_trait]
pub trait DivisionQueries {
    /// Divisions under a league, across all of its conferences.
    async fn get_by_league_id(&self, league_id: i32) -> RepoResult<Vec<division::Model>>;

    /// Divisions under a conference.
    async fn get_by_conference_id(&self, conference_id: i32) -> RepoResult<Vec<division::Model>>;

    /// The single division owning a team. Fails with
    /// [`RepoError::NotFound`] when the team does not exist or its
    /// division record is absent.
    async fn get_by_team_id(&self, team_id: i32) -> RepoResult<division::Model>;
}

/// Repository for division records. Generic CRUD is reachable through the
/// `Deref` to [`Repository`].
pub struct DivisionRepository {
    repo: Repository<division::Entity>,
}

impl DivisionRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }
}

impl Deref for DivisionRepository {
    type Target = Repository<division::Entity>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}

#[async_trait]
impl DivisionQueries for DivisionRepository {
    async fn get_by_league_id(&self, league_id: i32) -> RepoResult<Vec<division::Model>> {
        debug!("fetching divisions by league id {league_id}");
        self.repo
            .get_by_predicate(
                Condition::all().add(conference::Column::LeagueId.eq(league_id)),
                QueryOptions::default().join(division::Relation::Conference.def()),
            )
            .await
    }

    async fn get_by_conference_id(&self, conference_id: i32) -> RepoResult<Vec<division::Model>> {
        debug!("fetching divisions by conference id {conference_id}");
        self.repo
            .find(Condition::all().add(division::Column::ConferenceId.eq(conference_id)))
            .await
    }

    async fn get_by_team_id(&self, team_id: i32) -> RepoResult<division::Model> {
        debug!("fetching division by team id {team_id}");

        // One round trip: the team anchor and its division side by side.
        let row = team::Entity::find_by_id(team_id)
            .filter(team::Column::IsDeleted.eq(false))
            .find_also_related(division::Entity)
            .one(self.repo.connection())
            .await?;

        let (_, division) = row.ok_or_else(|| {
            warn!("team with id {team_id} not found");
            RepoError::not_found("team", team_id)
        })?;

        division.ok_or_else(|| {
            warn!("division for team with id {team_id} not found");
            RepoError::not_found("division for team", team_id)
        })
    }
}
