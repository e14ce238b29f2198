//! Per-line authorship ("blame") for files in a Subversion working copy.
//!
//! The Subversion side is delegated to the `svn` command-line client; this
//! crate runs its merge-aware annotate, reads the XML it prints and hands
//! each file's lines to a reporting sink as (revision, author, date) records.
//!
//! - `svn`: the `SvnClient` seam and its `svn` CLI implementation
//! - `blame`: `BlameCommand`, inputs and output sinks
//! - `routes`: HTTP surface
//! - `models`: serializable records
//! - `config`: client settings

pub mod blame;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod svn;

pub use error::{AppError, Result};
