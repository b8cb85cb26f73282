//! Database bootstrap and shared connection handling.
//!
//! The connection is created once at process start and shared by every
//! repository instance; pooling and disposal live here, not in the
//! repository layer.

pub mod db;

pub use db::Database;
