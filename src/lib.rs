#![doc = r#"
stash-qmt: quick mass tagging for Stash scenes.

Keeps named tag templates in a YAML file, resolves their tag names to IDs through
a Stash server's GraphQL API, and offers a small form that adds any template tags
a scene is missing. The library half holds everything except the window, so the
same logic can be scripted or tested without a display.

Config file
-----------
```yaml
API Key: eyJhbGciOi...
Stash URL: http://localhost:9999/graphql
Templates:
  Outdoor shoot:
    - Outdoors
    - Daylight
  Studio:
    12: Studio
    40: Softbox
```

Name lists such as `Outdoor shoot` are looked up once and rewritten as
`id: name` mappings like `Studio`.

Load config and tag a scene
---------------------------
```rust,no_run
use std::path::Path;
use stash_qmt::{Config, SceneForm, StashClient};

fn main() -> stash_qmt::Result<()> {
    let (config, client) = Config::load_or_init(Path::new("config.yaml"), |creds| {
        StashClient::new(&creds.stash_url, &creds.api_key)
    })?;

    let mut form = SceneForm::new(&config);
    form.scene_id_input = "1234".to_string();
    form.load_scene(&client, &config);
    for check in form.checklist.iter_mut() {
        check.checked = true;
    }
    form.submit(&client);
    println!("{:?}", form.status);
    Ok(())
}
```

Error handling
--------------
All fallible functions return `stash_qmt::Result<T>`; match on `stash_qmt::Error`
to tell configuration problems from API failures.

Feature flags
-------------
- `gui`: builds the eframe window (`gui` module). On by default.
- `full`: everything.

Useful modules
--------------
- [`config`] — config file loading, stub creation and template resolution.
- [`api`] — the `StashApi` seam, the blocking client, tag lookup policy.
- [`form`] — checklist construction and submission state.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod config;
pub mod error;
pub mod form;
pub mod types;

#[cfg(feature = "gui")]
pub mod gui;

pub use api::{StashApi, StashClient, lookup_tag_id, pick_tag_id};
pub use config::{Config, Credentials, default_config_path, resolve_templates};
pub use error::{Error, Result};
pub use form::{FormPhase, LoadedScene, SceneForm, Status, TagCheck, build_checklist};
pub use types::{SceneTags, Tag, TagId, TagSearch, Template};
