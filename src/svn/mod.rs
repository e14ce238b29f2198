pub mod annotate;
pub mod client;
pub mod info;

pub use annotate::{AnnotatedLine, CommitInfo, MergedCommit};
pub use client::{SvnCli, SvnClient};
