//! Stash GraphQL access: the [`StashApi`] seam used by the config loader and the
//! scene form, the blocking HTTP implementation, and the tag-name lookup policy.
pub mod client;
pub mod queries;

use tracing::debug;

use crate::error::{Error, Result};
use crate::types::{SceneTags, TagId, TagSearch, parse_id};

pub use client::StashClient;

/// The three requests the tool makes against a Stash server.
pub trait StashApi {
    /// Search tags by name substring.
    fn find_tags(&self, name: &str) -> Result<TagSearch>;

    /// Tag IDs currently applied to a scene.
    fn find_scene_tags(&self, scene_id: TagId) -> Result<SceneTags>;

    /// Replace the scene's tag set. `Ok(false)` means the server refused the update.
    fn update_scene_tags(&self, scene_id: TagId, tag_ids: &[TagId]) -> Result<bool>;
}

/// Pick the tag ID for `name` out of a search result.
///
/// A result with a count of exactly one is accepted as-is, even when the name
/// differs. Otherwise only an exact, case-sensitive name match is taken.
pub fn pick_tag_id(name: &str, search: &TagSearch) -> Option<String> {
    if search.count == 1 {
        return search.tags.first().map(|tag| tag.id.clone());
    }
    search
        .tags
        .iter()
        .find(|tag| tag.name == name)
        .map(|tag| tag.id.clone())
}

/// Resolve a tag name to its ID through the API.
pub fn lookup_tag_id(api: &dyn StashApi, name: &str) -> Result<TagId> {
    let search = api.find_tags(name)?;
    let id = pick_tag_id(name, &search).ok_or_else(|| Error::UnresolvedTag {
        name: name.to_string(),
    })?;
    debug!("Resolved tag {:?} to id {}", name, id);
    parse_id(&id)
}
