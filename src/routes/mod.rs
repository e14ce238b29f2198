//! API route handlers.
//!
//! - `blame`: per-line authorship of a working-copy file

pub mod blame;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;

use crate::blame::BlameCommand;
use crate::svn::SvnClient;

/// What the handlers share: the working-copy root and the retriever.
pub struct BlameState<C> {
    pub base_dir: PathBuf,
    pub command: BlameCommand<C>,
}

impl<C> BlameState<C> {
    pub fn new(base_dir: impl Into<PathBuf>, command: BlameCommand<C>) -> Self {
        Self {
            base_dir: base_dir.into(),
            command,
        }
    }
}

pub fn create_router<C>(state: Arc<BlameState<C>>) -> Router
where
    C: SvnClient + Send + Sync + 'static,
{
    Router::new().merge(blame::routes(state))
}
