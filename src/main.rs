//! svn-blame - per-line authorship for Subversion working copies
//!
//! # Usage
//! ```bash
//! svn-blame blame --base-dir /path/to/wc src/Main.java   # JSON lines on stdout
//! svn-blame serve /path/to/wc --port 3001                # HTTP surface
//! svn-blame checkout file:///repos/project /path/to/wc
//! svn-blame info /path/to/wc
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use axum::Router;
use clap::{Parser, Subcommand};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use svn_blame::blame::{BlameCommand, BlameInput, InputFile, JsonLinesOutput};
use svn_blame::config::SvnConfiguration;
use svn_blame::routes::{self, BlameState};
use svn_blame::svn::{SvnCli, SvnClient};

/// Per-line authorship for files in a Subversion working copy
#[derive(Parser)]
#[command(name = "svn-blame")]
#[command(about = "Blame files of a Subversion working copy", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    svn: SvnConfiguration,
}

#[derive(Subcommand)]
enum Commands {
    /// Blame files and print one JSON object per file
    Blame {
        /// Working-copy root the file paths are relative to
        #[arg(long, default_value = ".")]
        base_dir: PathBuf,

        /// Files to blame, relative to the working-copy root
        #[arg(required = true)]
        files: Vec<String>,
    },
    /// Serve blame over HTTP
    Serve {
        /// Working-copy root
        #[arg(value_name = "BASE_DIR")]
        base_dir: PathBuf,

        /// Port to run the server on
        #[arg(short, long, default_value = "3001")]
        port: u16,
    },
    /// Check out a working copy at HEAD
    Checkout {
        url: String,
        dest: PathBuf,
    },
    /// Print the repository URLs of a working-copy path
    Info {
        #[arg(default_value = ".")]
        path: PathBuf,
    },
}

fn handle_blame(client: SvnCli, base_dir: PathBuf, paths: Vec<String>) -> anyhow::Result<bool> {
    let stdout = std::io::stdout();
    let mut output = JsonLinesOutput::new(stdout.lock());

    let mut files = Vec::with_capacity(paths.len());
    let mut unreadable = 0;
    for path in &paths {
        match InputFile::from_disk(&base_dir, path) {
            Ok(file) => files.push(file),
            Err(e) => {
                tracing::warn!("Skipping {}: {}", path, e);
                unreadable += 1;
                output.path_failed(path, &e)?;
            }
        }
    }

    let command = BlameCommand::new(client);
    let summary = command.blame(&BlameInput::new(base_dir, files), &mut output)?;

    Ok(summary.failed == 0 && unreadable == 0)
}

async fn handle_serve(client: SvnCli, base_dir: PathBuf, port: u16) -> anyhow::Result<()> {
    let base_dir = std::fs::canonicalize(&base_dir)
        .with_context(|| format!("Working copy not found: {}", base_dir.display()))?;

    let info = client
        .info(&base_dir)
        .with_context(|| format!("Not a working copy: {}", base_dir.display()))?;

    let state = Arc::new(BlameState::new(base_dir.clone(), BlameCommand::new(client)));

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .merge(routes::create_router(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to port {}", port))?;

    eprintln!();
    eprintln!("  Working copy: {}", base_dir.display());
    eprintln!("  Repository:   {}", info.url);
    eprintln!("  Server:       http://{}", addr);
    eprintln!();
    eprintln!("  Press Ctrl+C to stop");

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
        eprintln!("\n  Shutting down...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // stdout carries the blame records, so logs go to stderr
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::debug!("Using {:?}", cli.svn);
    let client = SvnCli::new(cli.svn);

    match cli.command {
        Commands::Blame { base_dir, files } => {
            let all_blamed =
                tokio::task::spawn_blocking(move || handle_blame(client, base_dir, files)).await??;
            if !all_blamed {
                std::process::exit(1);
            }
        }
        Commands::Serve { base_dir, port } => {
            handle_serve(client, base_dir, port).await?;
        }
        Commands::Checkout { url, dest } => {
            client
                .checkout(&url, &dest)
                .with_context(|| format!("Checkout of {} failed", url))?;
            println!("Checked out {} to {}", url, dest.display());
        }
        Commands::Info { path } => {
            let info = client.info(&path)?;
            println!("URL:             {}", info.url);
            println!("Repository root: {}", info.root_url);
            if let Some(uuid) = info.uuid {
                println!("Repository UUID: {}", uuid);
            }
            if let Some(revision) = info.revision {
                println!("Revision:        {}", revision);
            }
        }
    }

    Ok(())
}
