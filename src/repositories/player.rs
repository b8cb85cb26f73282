//! Player repository for database operations.

use std::ops::Deref;

use async_trait::async_trait;
use log::debug;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, RelationTrait};

use crate::entities::{conference, division, player, team};

use super::generic::{QueryOptions, Repository};
use super::RepoResult;

/// Hierarchy-aware queries for players.
#[async_trait]
pub trait PlayerQueries {
    /// Players on a team's roster.
    async fn get_by_team_id(&self, team_id: i32) -> RepoResult<Vec<player::Model>>;

    /// Players anywhere under a division.
    async fn get_by_division_id(&self, division_id: i32) -> RepoResult<Vec<player::Model>>;

    /// Players anywhere under a conference.
    async fn get_by_conference_id(&self, conference_id: i32) -> RepoResult<Vec<player::Model>>;

    /// Players anywhere under a league.
    async fn get_by_league_id(&self, league_id: i32) -> RepoResult<Vec<player::Model>>;

    /// Players at an exact position (e.g. "QB").
    async fn get_by_position(&self, position: &str) -> RepoResult<Vec<player::Model>>;
}

/// Repository for player records. Generic CRUD is reachable through the
/// `Deref` to [`Repository`].
pub struct PlayerRepository {
    repo: Repository<player::Entity>,
}

impl PlayerRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            repo: Repository::new(conn),
        }
    }
}

impl Deref for PlayerRepository {
    type Target = Repository<player::Entity>;

    fn deref(&self) -> &Self::Target {
        &self.repo
    }
}

#[async_trait]
impl PlayerQueries for PlayerRepository {
    async fn get_by_team_id(&self, team_id: i32) -> RepoResult<Vec<player::Model>> {
        debug!("fetching players by team id {team_id}");
        self.repo
            .find(Condition::all().add(player::Column::TeamId.eq(team_id)))
            .await
    }

    async fn get_by_division_id(&self, division_id: i32) -> RepoResult<Vec<player::Model>> {
        debug!("fetching players by division id {division_id}");
        self.repo
            .get_by_predicate(
                Condition::all().add(team::Column::DivisionId.eq(division_id)),
                QueryOptions::default().join(player::Relation::Team.def()),
            )
            .await
    }

    async fn get_by_conference_id(&self, conference_id: i32) -> RepoResult<Vec<player::Model>> {
        debug!("fetching players by conference id {conference_id}");
        self.repo
            .get_by_predicate(
                Condition::all().add(division::Column::ConferenceId.eq(conference_id)),
                QueryOptions::default()
                    .join(player::Relation::Team.def())
                    .join(team::Relation::Division.def()),
            )
            .await
    }

    async fn get_by_league_id(&self, league_id: i32) -> RepoResult<Vec<player::Model>> {
        debug!("fetching players by league id {league_id}");
        self.repo
            .get_by_predicate(
                Condition::all().add(conference::Column::LeagueId.eq(league_id)),
                QueryOptions::default()
                    .join(player::Relation::Team.def())
                    .join(team::Relation::Division.def())
                    .join(division::Relation::Conference.def()),
            )
            .await
    }

    async fn get_by_position(&self, position: &str) -> RepoResult<Vec<player::Model>> {
        debug!("fetching players by position: {position}");
        self.repo
            .find(Condition::all().add(player::Column::Position.eq(position)))
            .await
    }
}
