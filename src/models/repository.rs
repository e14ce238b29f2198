use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryInfo {
    /// URL of the node itself
    pub url: String,
    /// URL of the repository root
    pub root_url: String,
    pub uuid: Option<String>,
    /// Revision of the working-copy node
    pub revision: Option<u64>,
}
