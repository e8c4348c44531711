//! GraphQL documents and response shapes for the three Stash operations the form uses.
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::{Error, Result};
use crate::types::{TagId, TagSearch};

pub const FIND_TAGS: &str = "query FindTags($q: String!) {
  findTags(filter: {q: $q, per_page: -1}) {
    count
    tags { id name }
  }
}";

pub const FIND_SCENE_TAGS: &str = "query FindSceneTags($id: ID!) {
  findScene(id: $id) {
    tags { id }
  }
}";

pub const UPDATE_SCENE_TAGS: &str = "mutation UpdateSceneTags($id: ID!, $tag_ids: [ID!]) {
  sceneUpdate(input: {id: $id, tag_ids: $tag_ids}) {
    id
  }
}";

/// POST body: `{"query": ..., "variables": {...}}`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

impl<'a> GraphQlRequest<'a> {
    pub fn find_tags(name: &str) -> Self {
        Self {
            query: FIND_TAGS,
            variables: json!({ "q": name }),
        }
    }

    pub fn find_scene_tags(scene_id: TagId) -> Self {
        Self {
            query: FIND_SCENE_TAGS,
            variables: json!({ "id": scene_id.to_string() }),
        }
    }

    pub fn update_scene_tags(scene_id: TagId, tag_ids: &[TagId]) -> Self {
        let tag_ids: Vec<String> = tag_ids.iter().map(|id| id.to_string()).collect();
        Self {
            query: UPDATE_SCENE_TAGS,
            variables: json!({ "id": scene_id.to_string(), "tag_ids": tag_ids }),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

impl<T> GraphQlResponse<T> {
    /// Errors win over data; a response with neither is an error too.
    pub fn into_data(self) -> Result<T> {
        if !self.errors.is_empty() {
            return Err(Error::GraphQl(
                self.errors.into_iter().map(|e| e.message).collect(),
            ));
        }
        self.data
            .ok_or_else(|| Error::GraphQl(vec!["response carried no data".to_string()]))
    }
}

#[derive(Debug, Deserialize)]
pub struct FindTagsData {
    #[serde(rename = "findTags")]
    pub find_tags: TagSearch,
}

#[derive(Debug, Deserialize)]
pub struct IdNode {
    pub id: String,
}

#[derive(Debug, Deserialize)]
pub struct SceneTagsNode {
    pub tags: Vec<IdNode>,
}

#[derive(Debug, Deserialize)]
pub struct FindSceneData {
    #[serde(rename = "findScene")]
    pub find_scene: Option<SceneTagsNode>,
}

#[derive(Debug, Deserialize)]
pub struct SceneUpdateData {
    #[serde(rename = "sceneUpdate")]
    pub scene_update: Option<IdNode>,
}
