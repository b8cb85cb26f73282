use anyhow::{Context, Result};
use log::info;
use sea_orm::sea_query::Index;
use sea_orm::{
    ConnectOptions, ConnectionTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Schema,
};

use crate::constants::{DEFAULT_DATABASE_URL, IN_MEMORY_URL_PREFIX};
use crate::entities::{conference, division, league, player, team};

/// Process-wide database handle. Created once at startup; repositories
/// work on cheap clones of the underlying connection.
pub struct Database {
    conn: DatabaseConnection,
}

impl Database {
    /// Connect to the store and make sure the schema exists.
    pub async fn connect(url: &str) -> Result<Self> {
        let mut options = ConnectOptions::new(url.to_owned());
        options.sqlx_logging(false);
        if url.starts_with(IN_MEMORY_URL_PREFIX) {
            // An in-memory SQLite database lives and dies with its
            // connection; pin the pool to one that never rotates.
            options.min_connections(1).max_connections(1);
        }

        let conn = sea_orm::Database::connect(options)
            .await
            .with_context(|| format!("Failed to connect to database at {url}"))?;

        let db = Self { conn };
        db.init_schema().await?;
        Ok(db)
    }

    /// Connect to a fresh private in-memory database.
    pub async fn connect_in_memory() -> Result<Self> {
        Self::connect(DEFAULT_DATABASE_URL).await
    }

    /// Clone of the shared connection, for handing to repositories.
    pub fn conn(&self) -> DatabaseConnection {
        self.conn.clone()
    }

    /// Create tables and foreign-key indexes from the entity definitions.
    async fn init_schema(&self) -> Result<()> {
        info!("initializing database schema");
        let backend = self.conn.get_database_backend();
        let schema = Schema::new(backend);

        let tables = [
            schema.create_table_from_entity(league::Entity),
            schema.create_table_from_entity(conference::Entity),
            schema.create_table_from_entity(division::Entity),
            schema.create_table_from_entity(team::Entity),
            schema.create_table_from_entity(player::Entity),
        ];
        for mut table in tables {
            table.if_not_exists();
            self.conn
                .execute(backend.build(&table))
                .await
                .context("Failed to create table")?;
        }

        let indexes = [
            Index::create()
                .name("idx_conferences_league_id")
                .table(conference::Entity)
                .col(conference::Column::LeagueId)
                .to_owned(),
            Index::create()
                .name("idx_divisions_conference_id")
                .table(division::Entity)
                .col(division::Column::ConferenceId)
                .to_owned(),
            Index::create()
                .name("idx_teams_division_id")
                .table(team::Entity)
                .col(team::Column::DivisionId)
                .to_owned(),
            Index::create()
                .name("idx_players_team_id")
                .table(player::Entity)
                .col(player::Column::TeamId)
                .to_owned(),
        ];
        for mut index in indexes {
            index.if_not_exists();
            self.conn
                .execute(backend.build(&index))
                .await
                .context("Failed to create index")?;
        }

        Ok(())
    }

    /// Check if the database holds any data.
    pub async fn has_data(&self) -> Result<bool> {
        let count = league::Entity::find().count(&self.conn).await?;
        Ok(count > 0)
    }

    /// Clear all data, children first so foreign keys stay satisfied.
    pub async fn clear_all(&self) -> Result<()> {
        player::Entity::delete_many().exec(&self.conn).await?;
        team::Entity::delete_many().exec(&self.conn).await?;
        division::Entity::delete_many().exec(&self.conn).await?;
        conference::Entity::delete_many().exec(&self.conn).await?;
        league::Entity::delete_many().exec(&self.conn).await?;
        Ok(())
    }
}
