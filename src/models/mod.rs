//! Data transfer objects.
//!
//! - `blame`: BlameLine per-line attribution, BlameResponse for the HTTP
//!   surface, FileReport for JSON-lines batch output
//! - `repository`: RepositoryInfo from `svn info`

pub mod blame;
pub mod repository;

pub use blame::*;
pub use repository::*;
