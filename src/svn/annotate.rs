//! Parsing of `svn blame --xml` output.
//!
//! The document has one `<target>` per blamed path, holding one `<entry>` per
//! line. An entry carries the `<commit>` that last changed the line in the
//! target's own history and, when merge history was requested and the line
//! arrived through a merge, a `<merged path>` element with the commit on the
//! merge source. Lines with local modifications have no commit at all.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommitInfo {
    #[serde(rename = "@revision")]
    pub revision: u64,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MergedCommit {
    /// Repository path of the merge source
    #[serde(rename = "@path")]
    pub path: String,
    pub commit: CommitInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AnnotatedLine {
    #[serde(rename = "@line-number")]
    pub line_number: usize,
    #[serde(default)]
    pub commit: Option<CommitInfo>,
    #[serde(default)]
    pub merged: Option<MergedCommit>,
}

impl AnnotatedLine {
    /// The commit that authored the line: the merge source when the line came
    /// in through a merge, the line's own commit otherwise.
    pub fn effective_commit(&self) -> Option<&CommitInfo> {
        self.merged
            .as_ref()
            .map(|m| &m.commit)
            .or(self.commit.as_ref())
    }
}

#[derive(Debug, Deserialize)]
struct BlameDocument {
    #[serde(rename = "target", default)]
    targets: Vec<BlameTarget>,
}

#[derive(Debug, Deserialize)]
struct BlameTarget {
    #[serde(rename = "@path")]
    path: String,
    #[serde(rename = "entry", default)]
    entries: Vec<AnnotatedLine>,
}

/// Parse the annotate output for a single path.
pub fn parse_annotate(xml: &str) -> Result<Vec<AnnotatedLine>> {
    let document: BlameDocument = quick_xml::de::from_str(xml)?;

    let mut targets = document.targets.into_iter();
    let target = targets
        .next()
        .ok_or_else(|| AppError::Parse("blame output has no target".to_string()))?;

    if targets.next().is_some() {
        tracing::debug!("Ignoring extra blame targets after {}", target.path);
    }

    Ok(target.entries)
}
