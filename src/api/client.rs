use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::{debug, trace, warn};

use super::StashApi;
use super::queries::{
    FindSceneData, FindTagsData, GraphQlRequest, GraphQlResponse, SceneUpdateData,
};
use crate::error::{Error, Result};
use crate::types::{SceneTags, TagId, TagSearch, parse_id};

/// Blocking GraphQL client for a Stash server.
///
/// Every call is a single POST to the configured endpoint carrying the `ApiKey`
/// header. There is no retry and no timeout beyond reqwest's defaults.
pub struct StashClient {
    http: Client,
    url: String,
}

impl StashClient {
    pub fn new(url: &str, api_key: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if !api_key.is_empty() {
            let mut value = HeaderValue::from_str(api_key).map_err(|_| Error::InvalidApiKey)?;
            value.set_sensitive(true);
            headers.insert(HeaderName::from_static("apikey"), value);
        }

        let http = Client::builder().default_headers(headers).build()?;
        debug!("Stash client ready for {}", url);
        Ok(Self {
            http,
            url: url.to_string(),
        })
    }

    fn query<T: DeserializeOwned>(&self, request: &GraphQlRequest<'_>) -> Result<T> {
        trace!("POST {} variables={}", self.url, request.variables);
        let response = self
            .http
            .post(&self.url)
            .json(request)
            .send()?
            .error_for_status()?;
        let body: GraphQlResponse<T> = response.json()?;
        body.into_data()
    }
}

impl StashApi for StashClient {
    fn find_tags(&self, name: &str) -> Result<TagSearch> {
        let data: FindTagsData = self.query(&GraphQlRequest::find_tags(name))?;
        debug!("findTags {:?} -> {} result(s)", name, data.find_tags.count);
        Ok(data.find_tags)
    }

    fn find_scene_tags(&self, scene_id: TagId) -> Result<SceneTags> {
        let data: FindSceneData = self.query(&GraphQlRequest::find_scene_tags(scene_id))?;
        let scene = data.find_scene.ok_or(Error::SceneNotFound { id: scene_id })?;
        scene.tags.iter().map(|tag| parse_id(&tag.id)).collect()
    }

    fn update_scene_tags(&self, scene_id: TagId, tag_ids: &[TagId]) -> Result<bool> {
        let request = GraphQlRequest::update_scene_tags(scene_id, tag_ids);
        let response = self.http.post(&self.url).json(&request).send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            warn!("sceneUpdate for scene {} failed: HTTP {}: {}", scene_id, status, body);
            return Ok(false);
        }

        let body: GraphQlResponse<SceneUpdateData> = response.json()?;
        match body.into_data() {
            Ok(data) => Ok(data.scene_update.is_some()),
            Err(e) => {
                warn!("sceneUpdate for scene {} rejected: {}", scene_id, e);
                Ok(false)
            }
        }
    }
}
