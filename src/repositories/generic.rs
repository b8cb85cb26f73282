//! Generic repository engine.
//!
//! [`Repository`] provides capability-uniform CRUD and query composition for
//! any entity implementing [`StoreEntity`], without per-type code. Whether a
//! delete is logical or physical is decided by the entity's compile-time
//! soft-delete policy, never by inspecting the record at runtime.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info, warn};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, EntityTrait, IntoActiveModel,
    JoinType, Order, PrimaryKeyTrait, QueryFilter, QueryOrder, QuerySelect, RelationDef,
};

use crate::entities::StoreEntity;

use super::{ReadRepository, RepoResult, WriteRepository};

/// Options for [`Repository::get_by_predicate`]: a single configuration
/// value with named, defaulted fields covering the later stages of the
/// query pipeline.
///
/// Stages always compose in a fixed order (base set, soft-delete policy,
/// eager-load joins, caller filter, ordering, pagination) so skip/take
/// indexes stay stable no matter which fields are set.
pub struct QueryOptions<E: EntityTrait> {
    /// Include records whose logical-delete flag is set.
    pub include_deleted: bool,
    /// Relation chains joined into the query, making ancestor columns
    /// addressable by the filter in a single round trip.
    pub join: Vec<RelationDef>,
    /// Ordering, applied after filtering and before pagination.
    pub order_by: Vec<(E::Column, Order)>,
    /// Rows to skip past in the ordered, filtered result.
    pub skip: Option<u64>,
    /// Maximum rows to return.
    pub take: Option<u64>,
}

impl<E: EntityTrait> Default for QueryOptions<E> {
    fn default() -> Self {
        Self {
            include_deleted: false,
            join: Vec::new(),
            order_by: Vec::new(),
            skip: None,
            take: None,
        }
    }
}

impl<E: EntityTrait> QueryOptions<E> {
    #[must_use]
    pub fn include_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    #[must_use]
    pub fn join(mut self, relation: RelationDef) -> Self {
        self.join.push(relation);
        self
    }

    #[must_use]
    pub fn order_by(mut self, column: E::Column, order: Order) -> Self {
        self.order_by.push((column, order));
        self
    }

    #[must_use]
    pub fn skip(mut self, rows: u64) -> Self {
        self.skip = Some(rows);
        self
    }

    #[must_use]
    pub fn take(mut self, rows: u64) -> Self {
        self.take = Some(rows);
        self
    }
}

/// Generic repository implementation that provides common data access
/// operations for any entity type.
///
/// Holds a cheap clone of the process-wide [`DatabaseConnection`]; pooling
/// and disposal belong to the storage layer.
pub struct Repository<E> {
    conn: DatabaseConnection,
    entity: PhantomData<E>,
}

impl<E> Repository<E>
where
    E: StoreEntity,
    E::Model: IntoActiveModel<<E as StoreEntity>::ActiveModel> + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    pub fn new(conn: DatabaseConnection) -> Self {
        Self {
            conn,
            entity: PhantomData,
        }
    }

    /// Shared connection handle, for specialized queries built outside the
    /// generic pipeline.
    pub fn connection(&self) -> &DatabaseConnection {
        &self.conn
    }

    /// All records of this type; soft-deleted records are excluded.
    pub async fn get_all(&self) -> RepoResult<Vec<E::Model>> {
        info!("fetching all {} records", E::NAME);
        self.get_by_predicate(Condition::all(), QueryOptions::default())
            .await
    }

    /// Single record by id; `None` (not an error) when missing or
    /// soft-deleted.
    pub async fn get_by_id(&self, id: i32) -> RepoResult<Option<E::Model>> {
        info!("fetching {} record with id {id}", E::NAME);
        let mut query = E::find_by_id(id);
        if let Some(policy) = E::soft_delete() {
            query = query.filter(policy.flag.eq(false));
        }
        Ok(query.one(&self.conn).await?)
    }

    /// Records satisfying a composed predicate; soft-deleted records are
    /// excluded.
    pub async fn find(&self, filter: Condition) -> RepoResult<Vec<E::Model>> {
        info!("fetching {} records matching a filter", E::NAME);
        self.get_by_predicate(filter, QueryOptions::default()).await
    }

    /// Persist a new record; the insert is its own unit of work.
    pub async fn add(&self, entity: <E as StoreEntity>::ActiveModel) -> RepoResult<E::Model> {
        info!("adding a new {} record", E::NAME);
        Ok(entity.insert(&self.conn).await?)
    }

    /// Whole-record replace; the update is its own unit of work.
    pub async fn update(&self, entity: E::Model) -> RepoResult<E::Model> {
        info!("updating a {} record", E::NAME);
        let active = entity.into_active_model().reset_all();
        Ok(active.update(&self.conn).await?)
    }

    /// Remove a record: logically when the type carries the soft-delete
    /// capability, physically otherwise. Same method body for any type.
    pub async fn delete(&self, entity: E::Model) -> RepoResult<()> {
        match E::soft_delete() {
            Some(policy) => {
                debug!("soft deleting a {} record", E::NAME);
                (policy.mark)(entity, Utc::now()).update(&self.conn).await?;
            }
            None => {
                debug!("hard deleting a {} record", E::NAME);
                entity.into_active_model().delete(&self.conn).await?;
            }
        }
        Ok(())
    }

    /// Remove a record by id. Missing ids are a logged no-op, not an
    /// error; nothing distinguishes "deleted" from "was never there".
    pub async fn delete_by_id(&self, id: i32) -> RepoResult<()> {
        info!("deleting {} record with id {id}", E::NAME);
        match self.get_by_id(id).await? {
            Some(entity) => self.delete(entity).await,
            None => {
                warn!("{} record with id {id} not found for deletion", E::NAME);
                Ok(())
            }
        }
    }

    /// Records matching `filter` under explicit [`QueryOptions`].
    ///
    /// The pipeline runs in a fixed order: base set, soft-delete policy,
    /// eager-load joins, filter, ordering, pagination. Pagination always
    /// applies last, so skip/take indexes are stable across call shapes.
    pub async fn get_by_predicate(
        &self,
        filter: Condition,
        options: QueryOptions<E>,
    ) -> RepoResult<Vec<E::Model>> {
        debug!(
            "fetching {} records with predicate, include_deleted: {}",
            E::NAME,
            options.include_deleted
        );

        let mut query = E::find();

        if !options.include_deleted {
            if let Some(policy) = E::soft_delete() {
                query = query.filter(policy.flag.eq(false));
            }
        }

        for relation in options.join {
            query = query.join(JoinType::InnerJoin, relation);
        }

        query = query.filter(filter);

        for (column, order) in options.order_by {
            query = query.order_by(column, order);
        }

        if let Some(skip) = options.skip {
            query = query.offset(skip);
        }
        if let Some(take) = options.take {
            query = query.limit(take);
        }

        Ok(query.all(&self.conn).await?)
    }
}

#[async_trait]
impl<E> ReadRepository<E> for Repository<E>
where
    E: StoreEntity,
    E::Model: IntoActiveModel<<E as StoreEntity>::ActiveModel> + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    async fn get_all(&self) -> RepoResult<Vec<E::Model>> {
        Repository::get_all(self).await
    }

    async fn get_by_id(&self, id: i32) -> RepoResult<Option<E::Model>> {
        Repository::get_by_id(self, id).await
    }

    async fn find(&self, filter: Condition) -> RepoResult<Vec<E::Model>> {
        Repository::find(self, filter).await
    }

    async fn get_by_predicate(
        &self,
        filter: Condition,
        options: QueryOptions<E>,
    ) -> RepoResult<Vec<E::Model>> {
        Repository::get_by_predicate(self, filter, options).await
    }
}

#[async_trait]
impl<E> WriteRepository<E> for Repository<E>
where
    E: StoreEntity,
    E::Model: IntoActiveModel<<E as StoreEntity>::ActiveModel> + Send + Sync,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<i32>,
{
    async fn add(&self, entity: <E as StoreEntity>::ActiveModel) -> RepoResult<E::Model> {
        Repository::add(self, entity).await
    }

    async fn update(&self, entity: E::Model) -> RepoResult<E::Model> {
        Repository::update(self, entity).await
    }

    async fn delete(&self, entity: E::Model) -> RepoResult<()> {
        Repository::delete(self, entity).await
    }

    async fn delete_by_id(&self, id: i32) -> RepoResult<()> {
        Repository::delete_by_id(self, id).await
    }
}
