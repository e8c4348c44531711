#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use stash_qmt::{Error, Result, SceneTags, StashApi, Tag, TagId, TagSearch};

/// In-memory Stash: a tag catalog, scenes with tag sets, and a request log.
#[derive(Debug, Default)]
pub struct FakeStash {
    pub tags: Vec<(TagId, String)>,
    pub scenes: RefCell<BTreeMap<TagId, SceneTags>>,
    pub tag_searches: RefCell<Vec<String>>,
    pub updates: RefCell<Vec<(TagId, Vec<TagId>)>>,
    pub reject_updates: bool,
}

impl FakeStash {
    pub fn with_tags(tags: &[(TagId, &str)]) -> Self {
        Self {
            tags: tags.iter().map(|(id, n)| (*id, n.to_string())).collect(),
            ..Self::default()
        }
    }

    pub fn add_scene(&self, id: TagId, tags: &[TagId]) {
        self.scenes
            .borrow_mut()
            .insert(id, tags.iter().copied().collect());
    }
}

impl StashApi for FakeStash {
    fn find_tags(&self, name: &str) -> Result<TagSearch> {
        self.tag_searches.borrow_mut().push(name.to_string());
        let tags: Vec<Tag> = self
            .tags
            .iter()
            .filter(|(_, tag)| tag.to_lowercase().contains(&name.to_lowercase()))
            .map(|(id, tag)| Tag {
                id: id.to_string(),
                name: tag.clone(),
            })
            .collect();
        Ok(TagSearch {
            count: tags.len() as u64,
            tags,
        })
    }

    fn find_scene_tags(&self, scene_id: TagId) -> Result<SceneTags> {
        self.scenes
            .borrow()
            .get(&scene_id)
            .cloned()
            .ok_or(Error::SceneNotFound { id: scene_id })
    }

    fn update_scene_tags(&self, scene_id: TagId, tag_ids: &[TagId]) -> Result<bool> {
        self.updates.borrow_mut().push((scene_id, tag_ids.to_vec()));
        if self.reject_updates {
            return Ok(false);
        }
        self.add_scene(scene_id, tag_ids);
        Ok(true)
    }
}
