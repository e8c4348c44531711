//! YAML configuration: credentials, endpoint and tag templates.
//!
//! Templates may be written by hand as a list of tag names. On load those lists
//! are resolved to `id: name` mappings through the Stash API and the file is
//! rewritten, so the lookup happens once per template. Already-resolved
//! mappings are taken as they are.
use std::fs;
use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::{debug, info, warn};

use crate::api::{StashApi, lookup_tag_id};
use crate::error::{Error, Result};
use crate::types::{TagId, Template, parse_id};

pub const KEY_API_KEY: &str = "API Key";
pub const KEY_STASH_URL: &str = "Stash URL";
pub const KEY_TEMPLATES: &str = "Templates";

const HEADER: &str = "# stash-qmt configuration. Template tag lists are resolved to IDs on first run.\n";

/// `config.yaml` next to the executable, or in the working directory when the
/// executable path is unavailable.
pub fn default_config_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("config.yaml")))
        .unwrap_or_else(|| PathBuf::from("config.yaml"))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub stash_url: String,
}

/// Loaded configuration. Templates keep the file's order.
#[derive(Debug, Clone)]
pub struct Config {
    pub credentials: Credentials,
    pub templates: Vec<(String, Template)>,
    /// The `Templates` section as it will be written back, including entries
    /// that were skipped.
    document: Mapping,
}

impl Config {
    /// Read `path`, or write a stub there and fail with [`Error::ConfigCreated`].
    ///
    /// `connect` builds the API client from the file's credentials; the client is
    /// used to resolve name lists and is handed back alongside the config.
    pub fn load_or_init<A, F>(path: &Path, connect: F) -> Result<(Config, A)>
    where
        A: StashApi,
        F: FnOnce(&Credentials) -> Result<A>,
    {
        if !path.exists() {
            write_stub(path)?;
            return Err(Error::ConfigCreated {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        let mut root = match serde_yaml::from_str::<Value>(&content)? {
            Value::Mapping(map) => map,
            Value::Null => Mapping::new(),
            _ => {
                return Err(Error::ConfigNotMapping {
                    keys: "API Key, Stash URL and Templates",
                });
            }
        };

        let credentials = Credentials {
            api_key: string_entry(&root, KEY_API_KEY)?,
            stash_url: string_entry(&root, KEY_STASH_URL)?,
        };
        if credentials.stash_url.trim().is_empty() {
            return Err(Error::EmptyConfigValue { key: KEY_STASH_URL });
        }

        let api = connect(&credentials)?;

        let mut document = match root.remove(KEY_TEMPLATES) {
            Some(Value::Mapping(map)) => map,
            Some(Value::Null) => Mapping::new(),
            Some(_) => {
                warn!("{} is not a mapping, ignoring it", KEY_TEMPLATES);
                Mapping::new()
            }
            None => return Err(Error::MissingConfigKey { key: KEY_TEMPLATES }),
        };
        let templates = resolve_templates(&mut document, &api)?;

        let config = Config {
            credentials,
            templates,
            document,
        };
        config.save(path)?;
        info!(
            "Loaded {} template(s) from {}",
            config.templates.len(),
            path.display()
        );
        Ok((config, api))
    }

    pub fn template(&self, name: &str) -> Option<&Template> {
        self.templates
            .iter()
            .find(|(template_name, _)| template_name == name)
            .map(|(_, template)| template)
    }

    pub fn template_names(&self) -> impl Iterator<Item = &str> {
        self.templates.iter().map(|(name, _)| name.as_str())
    }

    /// Write the canonical form of the file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let mut root = Mapping::new();
        root.insert(
            Value::from(KEY_API_KEY),
            Value::from(self.credentials.api_key.as_str()),
        );
        root.insert(
            Value::from(KEY_STASH_URL),
            Value::from(self.credentials.stash_url.as_str()),
        );
        root.insert(
            Value::from(KEY_TEMPLATES),
            Value::Mapping(self.document.clone()),
        );

        let body = serde_yaml::to_string(&Value::Mapping(root))?;
        fs::write(path, format!("{HEADER}{body}"))?;
        debug!("Config written to {}", path.display());
        Ok(())
    }
}

fn write_stub(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(
        path,
        format!("{HEADER}{KEY_API_KEY}:\n{KEY_STASH_URL}:\n{KEY_TEMPLATES}:\n"),
    )?;
    warn!("Created config stub at {}", path.display());
    Ok(())
}

fn string_entry(root: &Mapping, key: &'static str) -> Result<String> {
    match root.get(key) {
        None => Err(Error::MissingConfigKey { key }),
        Some(Value::Null) => Ok(String::new()),
        Some(value) => scalar_string(value).ok_or(Error::MissingConfigKey { key }),
    }
}

fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn mapping_key_id(key: &Value) -> Option<TagId> {
    match key {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => parse_id(s).ok(),
        _ => None,
    }
}

/// Shape of one entry under `Templates`.
enum TemplateEntry {
    Resolved(Template),
    Names(Vec<String>),
    Unrecognized,
}

fn classify(value: &Value) -> TemplateEntry {
    match value {
        Value::Mapping(map) => {
            let mut template = Template::new();
            for (key, name) in map {
                match (mapping_key_id(key), scalar_string(name)) {
                    (Some(id), Some(name)) => {
                        template.insert(id, name);
                    }
                    _ => return TemplateEntry::Unrecognized,
                }
            }
            TemplateEntry::Resolved(template)
        }
        Value::Sequence(items) => items
            .iter()
            .map(scalar_string)
            .collect::<Option<Vec<_>>>()
            .map_or(TemplateEntry::Unrecognized, TemplateEntry::Names),
        _ => TemplateEntry::Unrecognized,
    }
}

fn template_to_value(template: &Template) -> Value {
    let mut map = Mapping::new();
    for (id, name) in template {
        map.insert(Value::from(*id), Value::from(name.as_str()));
    }
    Value::Mapping(map)
}

/// Resolve every name-list template in `document` in place and return the
/// usable templates in file order.
///
/// Mappings are taken as already resolved and cost no requests. Entries of any
/// other shape are left untouched in `document` and skipped with a warning.
pub fn resolve_templates(
    document: &mut Mapping,
    api: &dyn StashApi,
) -> Result<Vec<(String, Template)>> {
    let mut templates = Vec::new();

    for (key, value) in document.iter_mut() {
        let Some(name) = scalar_string(key) else {
            warn!("Template name {:?} is not a string, skipping...", key);
            continue;
        };

        match classify(value) {
            TemplateEntry::Resolved(template) => {
                debug!("Template {:?} already resolved ({} tags)", name, template.len());
                templates.push((name, template));
            }
            TemplateEntry::Names(names) => {
                info!("Resolving {} tag name(s) for template {:?}", names.len(), name);
                let mut template = Template::new();
                for tag_name in names {
                    let id = lookup_tag_id(api, &tag_name)?;
                    template.insert(id, tag_name);
                }
                *value = template_to_value(&template);
                templates.push((name, template));
            }
            TemplateEntry::Unrecognized => {
                warn!("Template format not recognized for {}, skipping...", name);
            }
        }
    }

    Ok(templates)
}
