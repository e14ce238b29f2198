//! Blame data transfer objects.
//!
//! Per-line author attribution for a file in a Subversion working copy, as
//! handed to the reporting sinks and serialized for the HTTP surface.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Blame information for a single line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlameLine {
    /// Revision that last modified this line
    pub revision: String,
    /// Author of that revision
    pub author: String,
    /// Commit date of that revision
    pub date: DateTime<Utc>,
}

impl BlameLine {
    pub fn new(revision: impl Into<String>, author: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            revision: revision.into(),
            author: author.into(),
            date,
        }
    }
}

/// Response for a blame request on a single file.
#[derive(Debug, Serialize, Deserialize)]
pub struct BlameResponse {
    /// Path of the file, relative to the working-copy root
    pub path: String,
    /// Per-line blame information, in file line order
    pub lines: Vec<BlameLine>,
}

/// One record of the JSON-lines batch output: either lines or an error.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FileReport {
    Blamed { path: String, lines: Vec<BlameLine> },
    Failed { path: String, error: String },
}
