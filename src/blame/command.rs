use std::time::Instant;

use crate::blame::input::{BlameInput, InputFile};
use crate::blame::output::BlameOutput;
use crate::error::{AppError, Result};
use crate::models::BlameLine;
use crate::svn::{AnnotatedLine, SvnClient};

/// Counts of a finished blame run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlameSummary {
    pub blamed: usize,
    pub failed: usize,
}

/// Blames working-copy files one after another through an `SvnClient`.
pub struct BlameCommand<C> {
    client: C,
}

impl<C: SvnClient> BlameCommand<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Blame every file of `input`, delivering each result or failure to
    /// `output`. A failing file never stops the run; only a failing sink does.
    pub fn blame(&self, input: &BlameInput, output: &mut dyn BlameOutput) -> Result<BlameSummary> {
        let start = Instant::now();
        let mut summary = BlameSummary::default();

        tracing::info!(
            "Blaming {} file(s) in {}",
            input.files.len(),
            input.base_dir.display()
        );

        for file in &input.files {
            match self.blame_file(file) {
                Ok(lines) => {
                    summary.blamed += 1;
                    output.blame_result(file, lines)?;
                }
                Err(e) => {
                    tracing::warn!("Blame failed for {}: {}", file.relative_path(), e);
                    summary.failed += 1;
                    output.blame_failed(file, &e)?;
                }
            }
        }

        tracing::info!(
            "Blame finished: {} blamed, {} failed in {:?}",
            summary.blamed,
            summary.failed,
            start.elapsed()
        );

        Ok(summary)
    }

    /// Blame a single file.
    pub fn blame_file(&self, file: &InputFile) -> Result<Vec<BlameLine>> {
        tracing::debug!("Blame {}", file.relative_path());
        let annotated = self.client.annotate(file.path())?;
        to_blame_lines(file, annotated)
    }
}

/// Map annotate entries to blame lines, line by line.
///
/// Entries without a commit are local modifications and are dropped. svn does
/// not annotate the empty line after a final newline, so a result exactly one
/// short of the caller's count gets its last line repeated.
fn to_blame_lines(file: &InputFile, annotated: Vec<AnnotatedLine>) -> Result<Vec<BlameLine>> {
    let mut lines = Vec::with_capacity(file.lines());

    for entry in &annotated {
        let Some(commit) = entry.effective_commit() else {
            tracing::debug!(
                "Skipping uncommitted line {} of {}",
                entry.line_number,
                file.relative_path()
            );
            continue;
        };

        let date = commit.date.ok_or_else(|| {
            AppError::Parse(format!(
                "revision {} of {} has no date",
                commit.revision,
                file.relative_path()
            ))
        })?;

        lines.push(BlameLine {
            revision: commit.revision.to_string(),
            author: commit.author.clone().unwrap_or_default(),
            date,
        });
    }

    if lines.len() + 1 == file.lines() {
        if let Some(last) = lines.last().cloned() {
            lines.push(last);
        }
    } else if lines.len() != file.lines() {
        tracing::debug!(
            "{}: {} blamed line(s) for {} line(s) in file",
            file.relative_path(),
            lines.len(),
            file.lines()
        );
    }

    Ok(lines)
}
