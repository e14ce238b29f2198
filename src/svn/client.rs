use std::ffi::{OsStr, OsString};
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::SvnConfiguration;
use crate::error::{AppError, Result};
use crate::models::RepositoryInfo;
use crate::svn::annotate::{parse_annotate, AnnotatedLine};
use crate::svn::info::parse_info;

/// The operations the blame retriever needs from a Subversion client.
pub trait SvnClient {
    /// Annotate a working-copy file from revision 1 up to its BASE revision,
    /// resolving merge history.
    fn annotate(&self, path: &Path) -> Result<Vec<AnnotatedLine>>;

    /// Check out `url` at HEAD into `dest`, recursively.
    fn checkout(&self, url: &str, dest: &Path) -> Result<()>;

    /// Resolve the repository URLs of a working-copy path.
    fn info(&self, path: &Path) -> Result<RepositoryInfo>;
}

/// `SvnClient` backed by the `svn` command-line client.
///
/// Every call spawns its own process, so no repository handle outlives a
/// single operation.
#[derive(Debug, Clone)]
pub struct SvnCli {
    config: SvnConfiguration,
}

impl SvnCli {
    pub fn new(config: SvnConfiguration) -> Self {
        Self { config }
    }

    /// Run `svn <subcommand> <args>` and return its stdout.
    fn run<I, S>(&self, subcommand: &str, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.config.binary);
        command
            .arg(subcommand)
            .args(self.config.global_args())
            .args(args)
            .env("LC_MESSAGES", "C")
            .stdin(if self.config.password.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        tracing::trace!("Running {} {}", self.config.binary, subcommand);

        let mut child = command.spawn().map_err(|source| AppError::SvnUnavailable {
            binary: self.config.binary.clone(),
            source,
        })?;

        if let (Some(password), Some(mut stdin)) = (&self.config.password, child.stdin.take()) {
            // svn may exit before reading; its stderr says why
            if let Err(e) = writeln!(stdin, "{}", password) {
                tracing::debug!("Unable to pass password to svn {}: {}", subcommand, e);
            }
        }

        let output = child.wait_with_output()?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(classify_failure(subcommand, stderr));
        }

        String::from_utf8(output.stdout)
            .map_err(|e| AppError::Parse(format!("svn {} output is not UTF-8: {}", subcommand, e)))
    }
}

/// svn reads everything after the last `@` of a target as a peg revision.
/// A trailing `@` gives an empty peg and leaves `icon@2x.png` intact.
fn peg_target(target: impl AsRef<OsStr>) -> OsString {
    let mut escaped = target.as_ref().to_os_string();
    escaped.push("@");
    escaped
}

impl SvnClient for SvnCli {
    fn annotate(&self, path: &Path) -> Result<Vec<AnnotatedLine>> {
        let target = peg_target(path);
        let xml = self.run(
            "blame",
            [
                OsStr::new("--xml"),
                OsStr::new("--use-merge-history"),
                OsStr::new("--force"),
                OsStr::new("--revision"),
                OsStr::new("1:BASE"),
                target.as_os_str(),
            ],
        )?;
        parse_annotate(&xml)
    }

    fn checkout(&self, url: &str, dest: &Path) -> Result<()> {
        let url = peg_target(url);
        let dest = peg_target(dest);
        self.run(
            "checkout",
            [
                OsStr::new("--revision"),
                OsStr::new("HEAD"),
                OsStr::new("--depth"),
                OsStr::new("infinity"),
                url.as_os_str(),
                dest.as_os_str(),
            ],
        )?;
        Ok(())
    }

    fn info(&self, path: &Path) -> Result<RepositoryInfo> {
        let target = peg_target(path);
        let xml = self.run("info", [OsStr::new("--xml"), target.as_os_str()])?;
        parse_info(&xml)
    }
}

// svn reports "not a working copy" and "not under version control" through
// these error codes; everything else is a generic client failure.
const NOT_VERSIONED_CODES: &[&str] = &[
    "E155007", "W155007", "E155010", "W155010", "E200005", "E195002",
];

fn classify_failure(subcommand: &str, stderr: String) -> AppError {
    if NOT_VERSIONED_CODES.iter().any(|code| stderr.contains(code)) {
        AppError::NotVersioned(stderr)
    } else {
        AppError::Svn {
            command: subcommand.to_string(),
            message: stderr,
        }
    }
}
