//! The blame retriever.
//!
//! - `input`: InputFile / BlameInput describing what to blame
//! - `command`: BlameCommand driving an `SvnClient` file by file
//! - `output`: BlameOutput sinks (JSON lines, in-memory)

pub mod command;
pub mod input;
pub mod output;

pub use command::{BlameCommand, BlameSummary};
pub use input::{BlameInput, InputFile};
pub use output::{BlameOutput, CollectingOutput, JsonLinesOutput};
