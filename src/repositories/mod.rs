//! Repository layer for database operations.
//!
//! This module provides the generic repository engine and one hierarchy-aware
//! repository per entity type, following the Data Mapper pattern recommended
//! by SeaORM. Entities stay pure data models; all query composition and
//! soft-delete handling lives here.

pub mod conference;
pub mod division;
pub mod generic;
pub mod league;
pub mod player;
pub mod team;

pub use conference::{ConferenceQueries, ConferenceRepository};
pub use division::{DivisionQueries, DivisionRepository};
pub use generic::{QueryOptions, Repository};
pub use league::{LeagueQueries, LeagueRepository};
pub use player::{PlayerQueries, PlayerRepository};
pub use team::{TeamQueries, TeamRepository};

use async_trait::async_trait;
use sea_orm::{Condition, DbErr};
use thiserror::Error;

use crate::entities::StoreEntity;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepoError {
    /// A required record, or a required intermediate of a hierarchy
    /// traversal, does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: i32 },

    /// Store-level failure, propagated unchanged.
    #[error(transparent)]
    Db(#[from] DbErr),
}

impl RepoError {
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound { entity, id }
    }
}

pub type RepoResult<T> = Result<T, RepoError>;

/// Read-only view over a record store. Hand this out where a caller must
/// not mutate.
#[async_trait]
pub trait ReadRepository<E: StoreEntity> {
    /// All records; soft-deleted records are excluded.
    async fn get_all(&self) -> RepoResult<Vec<E::Model>>;

    /// Single record by id; `None` (not an error) when missing.
    async fn get_by_id(&self, id: i32) -> RepoResult<Option<E::Model>>;

    /// Records satisfying a composed predicate.
    async fn find(&self, filter: Condition) -> RepoResult<Vec<E::Model>>;

    /// Records satisfying a predicate under explicit [`QueryOptions`].
    async fn get_by_predicate(
        &self,
        filter: Condition,
        options: QueryOptions<E>,
    ) -> RepoResult<Vec<E::Model>>;
}

/// Mutating view over a record store.
#[async_trait]
pub trait WriteRepository<E: StoreEntity> {
    /// Persist a new record; commits immediately.
    async fn add(&self, entity: <E as StoreEntity>::ActiveModel) -> RepoResult<E::Model>;

    /// Whole-record replace; commits immediately.
    async fn update(&self, entity: E::Model) -> RepoResult<E::Model>;

    /// Remove a record, logically or physically per the entity's
    /// soft-delete capability.
    async fn delete(&self, entity: E::Model) -> RepoResult<()>;

    /// Remove a record by id; a logged no-op when the id does not exist.
    async fn delete_by_id(&self, id: i32) -> RepoResult<()>;
}
