//! Parsing of `svn info --xml` output, used to resolve repository URLs.

use serde::Deserialize;

use crate::error::{AppError, Result};
use crate::models::RepositoryInfo;

#[derive(Debug, Deserialize)]
struct InfoDocument {
    #[serde(rename = "entry", default)]
    entries: Vec<InfoEntry>,
}

#[derive(Debug, Deserialize)]
struct InfoEntry {
    #[serde(rename = "@revision", default)]
    revision: Option<u64>,
    url: String,
    repository: RepositoryXml,
}

#[derive(Debug, Deserialize)]
struct RepositoryXml {
    root: String,
    #[serde(default)]
    uuid: Option<String>,
}

pub fn parse_info(xml: &str) -> Result<RepositoryInfo> {
    let document: InfoDocument = quick_xml::de::from_str(xml)?;
    let entry = document
        .entries
        .into_iter()
        .next()
        .ok_or_else(|| AppError::Parse("info output has no entry".to_string()))?;

    Ok(RepositoryInfo {
        url: entry.url,
        root_url: entry.repository.root,
        uuid: entry.repository.uuid,
        revision: entry.revision,
    })
}
