//! Core types shared by the config loader, the API client and the form.
use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Numeric identifier of a tag or scene on the Stash server.
pub type TagId = u64;

/// Tag IDs currently applied to a scene.
pub type SceneTags = BTreeSet<TagId>;

/// A resolved template: tag ID to tag name.
pub type Template = BTreeMap<TagId, String>;

/// Stash serializes IDs as strings; parse them into [`TagId`].
pub fn parse_id(value: &str) -> Result<TagId> {
    value.trim().parse::<TagId>().map_err(|_| Error::InvalidId {
        value: value.to_string(),
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub id: String,
    pub name: String,
}

/// Result set of a `findTags` query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSearch {
    pub count: u64,
    pub tags: Vec<Tag>,
}
