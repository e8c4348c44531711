//! View model behind the tagging window.
//!
//! The GUI renders a [`SceneForm`] every frame and calls [`SceneForm::load_scene`]
//! and [`SceneForm::submit`] from its buttons. Everything here is plain data so it
//! can be driven in tests without a window.
use std::cmp::Reverse;

use tracing::{debug, error, info, warn};

use crate::api::StashApi;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{SceneTags, TagId, Template};

pub const SUCCESS_MESSAGE: &str = "Tags added successfully!";

/// One checkbox in the tag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagCheck {
    pub id: TagId,
    pub name: String,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Success(String),
    Warning(String),
    Error(String),
}

impl Status {
    pub fn message(&self) -> &str {
        match self {
            Status::Success(m) | Status::Warning(m) | Status::Error(m) => m,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Idle,
    SceneLoaded,
    TagsSubmitted,
}

/// A scene as fetched for the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedScene {
    pub id: TagId,
    pub tags: SceneTags,
}

/// Template tags not yet on the scene, by name descending.
pub fn build_checklist(template: &Template, current: &SceneTags) -> Vec<TagCheck> {
    let mut checklist: Vec<TagCheck> = template
        .iter()
        .filter(|(id, _)| !current.contains(id))
        .map(|(id, name)| TagCheck {
            id: *id,
            name: name.clone(),
            checked: false,
        })
        .collect();
    checklist.sort_by(|a, b| b.name.cmp(&a.name).then(a.id.cmp(&b.id)));
    checklist
}

/// Parse the user's scene ID entry.
pub fn parse_scene_id(input: &str) -> Result<TagId> {
    input
        .trim()
        .parse::<TagId>()
        .map_err(|_| Error::InvalidSceneId {
            input: input.to_string(),
        })
}

#[derive(Debug, Clone, Default)]
pub struct SceneForm {
    pub template: Option<String>,
    pub scene_id_input: String,
    pub scene: Option<LoadedScene>,
    pub checklist: Vec<TagCheck>,
    pub status: Option<Status>,
}

impl SceneForm {
    /// Start with the first template of `config` selected.
    pub fn new(config: &Config) -> Self {
        Self {
            template: config.template_names().next().map(str::to_string),
            ..Self::default()
        }
    }

    pub fn phase(&self) -> FormPhase {
        match (&self.scene, &self.status) {
            (None, _) => FormPhase::Idle,
            (Some(_), Some(Status::Success(_))) => FormPhase::TagsSubmitted,
            (Some(_), _) => FormPhase::SceneLoaded,
        }
    }

    fn selected_template<'c>(&self, config: &'c Config) -> Result<&'c Template> {
        let name = self.template.as_deref().unwrap_or_default();
        config.template(name).ok_or_else(|| Error::UnknownTemplate {
            name: name.to_string(),
        })
    }

    /// Replace the checklist for the loaded scene and drop any status line.
    pub fn rebuild_checklist(&mut self, config: &Config) -> Result<()> {
        self.status = None;
        self.checklist.clear();
        let Some(scene) = &self.scene else {
            return Ok(());
        };
        let template = self.selected_template(config)?;
        self.checklist = build_checklist(template, &scene.tags);
        debug!(
            "Checklist rebuilt for scene {}: {} candidate tag(s)",
            scene.id,
            self.checklist.len()
        );
        Ok(())
    }

    /// Fetch the scene named in the ID field and rebuild the checklist.
    ///
    /// Failures end up in the status line and the log; the previous scene is
    /// dropped either way.
    pub fn load_scene(&mut self, api: &dyn StashApi, config: &Config) {
        self.scene = None;
        self.checklist.clear();
        self.status = None;

        let result = parse_scene_id(&self.scene_id_input).and_then(|id| {
            let tags = api.find_scene_tags(id)?;
            Ok(LoadedScene { id, tags })
        });

        match result {
            Ok(scene) => {
                info!("Scene {} has {} tag(s)", scene.id, scene.tags.len());
                self.scene = Some(scene);
                if let Err(e) = self.rebuild_checklist(config) {
                    warn!("{}", e);
                    self.status = Some(Status::Warning(e.to_string()));
                }
            }
            Err(e) => {
                error!("Failed to fetch scene {:?}: {}", self.scene_id_input, e);
                self.status = Some(Status::Error(e.to_string()));
            }
        }
    }

    /// Original scene tags plus every checked tag, sorted and deduplicated.
    pub fn tags_to_send(&self) -> Vec<TagId> {
        let mut tags: SceneTags = self
            .scene
            .as_ref()
            .map(|scene| scene.tags.clone())
            .unwrap_or_default();
        tags.extend(self.checklist.iter().filter(|c| c.checked).map(|c| c.id));
        tags.into_iter().collect()
    }

    /// Send the merged tag set to the loaded scene.
    pub fn submit(&mut self, api: &dyn StashApi) {
        let Some(scene) = &self.scene else {
            warn!("Set tags pressed with no scene loaded");
            self.status = Some(Status::Warning(Error::NoSceneLoaded.to_string()));
            return;
        };
        let scene_id = scene.id;
        let tags = self.tags_to_send();
        info!("Updating scene {} with {} tag(s)", scene_id, tags.len());

        self.status = Some(match api.update_scene_tags(scene_id, &tags) {
            Ok(true) => Status::Success(SUCCESS_MESSAGE.to_string()),
            Ok(false) => {
                error!("Stash rejected the update for scene {}", scene_id);
                Status::Error(format!("Stash rejected the update for scene {scene_id}"))
            }
            Err(e) => {
                error!("Failed to update scene {}: {}", scene_id, e);
                Status::Error(e.to_string())
            }
        });
    }

    pub fn checked_count(&self) -> usize {
        self.checklist.iter().filter(|c| c.checked).count()
    }

    /// Names of the tags the checklist hides because the scene already has them.
    pub fn applied_names<'c>(&self, config: &'c Config) -> Vec<&'c str> {
        let (Some(scene), Ok(template)) = (&self.scene, self.selected_template(config)) else {
            return Vec::new();
        };
        let mut names: Vec<&str> = template
            .iter()
            .filter(|(id, _)| scene.tags.contains(id))
            .map(|(_, name)| name.as_str())
            .collect();
        names.sort_by_key(|name| Reverse(*name));
        names
    }
}
