//! league-data - Data-access layer for a hierarchical sports-organization model
//!
//! This library provides repository-based access to a League → Conference →
//! Division → Team → Player hierarchy stored in a relational database through
//! SeaORM. It includes a generic CRUD/query engine, hierarchy-aware
//! repositories for traversing the tree in both directions, and transparent
//! soft-delete semantics for the record types that carry the capability.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Application configuration management
//! * [`entities`] - SeaORM entity models for database tables
//! * [`logger`] - Logging setup for the data layer
//! * [`repositories`] - Generic and hierarchy-aware repository layer
//! * [`storage`] - Database bootstrap and shared connection handling

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// SeaORM entity models for database tables
pub mod entities;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Repository layer for database operations
pub mod repositories;

/// Database bootstrap and shared connection handling
pub mod storage;

// Re-export entity models for convenient access
pub use entities::{conference, division, league, player, team};

pub use repositories::{
    ConferenceQueries, ConferenceRepository, DivisionQueries, DivisionRepository, LeagueQueries,
    LeagueRepository, PlayerQueries, PlayerRepository, QueryOptions, ReadRepository, RepoError,
    RepoResult, Repository, TeamQueries, TeamRepository, WriteRepository,
};
pub use storage::Database;
