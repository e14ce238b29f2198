#![allow(dead_code)]

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use svn_blame::config::SvnConfiguration;
use svn_blame::svn::{SvnCli, SvnClient};
use tempfile::TempDir;

pub const DUMMY_JAVA: &str = "src/main/java/org/dummy/Dummy.java";

/// 26 lines plus the final newline: 27 lines as the host counts them.
pub fn dummy_source() -> String {
    let mut source = String::from("package org.dummy;\n\npublic class Dummy {\n");
    for i in 0..21 {
        source.push_str(&format!("  // line {}\n", i + 4));
    }
    source.push_str("  void run() {}\n}\n");
    source
}

/// A `file://` repository with a trunk holding `Dummy.java` committed by
/// dgageot in revision 2, checked out into a working copy.
pub struct SvnFixture {
    pub dir: TempDir,
    pub repo_url: String,
    pub trunk_wc: PathBuf,
    pub config_dir: PathBuf,
}

impl SvnFixture {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("temp dir");
        let repo = dir.path().join("repo-svn");
        let config_dir = dir.path().join("config");
        fs::create_dir_all(&config_dir).expect("config dir");

        run("svnadmin", &[OsStr::new("create"), repo.as_os_str()], dir.path());
        let repo_url = format!("file://{}", repo.display());

        let fixture = Self {
            trunk_wc: dir.path().join("wc-trunk"),
            dir,
            repo_url,
            config_dir,
        };

        // r1
        fixture.svn(
            "dgageot",
            &[
                "mkdir",
                "-m",
                "layout",
                &fixture.url("trunk"),
                &fixture.url("branches"),
            ],
            fixture.dir.path(),
        );

        fixture
            .client()
            .checkout(&fixture.url("trunk"), &fixture.trunk_wc)
            .expect("checkout trunk");

        let file = fixture.trunk_wc.join(DUMMY_JAVA);
        fs::create_dir_all(file.parent().expect("parent")).expect("source dirs");
        fs::write(&file, dummy_source()).expect("write Dummy.java");

        // r2
        fixture.svn("dgageot", &["add", "src"], &fixture.trunk_wc);
        fixture.svn("dgageot", &["commit", "-m", "Dummy"], &fixture.trunk_wc);

        fixture
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.repo_url, path)
    }

    pub fn config(&self) -> SvnConfiguration {
        SvnConfiguration {
            config_dir: Some(self.config_dir.clone()),
            ..SvnConfiguration::new("svn")
        }
    }

    pub fn client(&self) -> SvnCli {
        SvnCli::new(self.config())
    }

    /// Run an svn subcommand as `author`.
    pub fn svn(&self, author: &str, args: &[&str], cwd: &Path) {
        let mut full: Vec<&OsStr> = vec![
            OsStr::new("--non-interactive"),
            OsStr::new("--config-dir"),
            self.config_dir.as_os_str(),
            OsStr::new("--username"),
            OsStr::new(author),
        ];
        full.extend(args.iter().map(OsStr::new));
        run("svn", &full, cwd);
    }
}

fn run(program: &str, args: &[&OsStr], cwd: &Path) {
    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap_or_else(|e| panic!("able to run {}: {}", program, e));

    assert!(
        output.status.success(),
        "{} {:?} failed: {}",
        program,
        args,
        String::from_utf8_lossy(&output.stderr)
    );
}
