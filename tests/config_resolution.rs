mod common;

use std::fs;

use common::FakeStash;
use stash_qmt::{Config, Error};
use tempfile::TempDir;

const NAME_LIST_CONFIG: &str = "\
API Key: secret
Stash URL: http://localhost:9999/graphql
Templates:
  Outdoor:
    - Beach
    - Sunset
  Studio:
    12: Softbox
";

fn connect(api: FakeStash) -> impl FnOnce(&stash_qmt::Credentials) -> stash_qmt::Result<FakeStash> {
    move |_| Ok(api)
}

#[test]
fn missing_file_creates_stub_and_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");

    let err = Config::load_or_init(&path, connect(FakeStash::default())).unwrap_err();

    assert!(matches!(err, Error::ConfigCreated { .. }));
    assert!(err.to_string().contains("Fill it in"));
    let stub = fs::read_to_string(&path).unwrap();
    assert!(stub.contains("API Key:"));
    assert!(stub.contains("Stash URL:"));
    assert!(stub.contains("Templates:"));
}

#[test]
fn untouched_stub_is_rejected_for_empty_url() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    let _ = Config::load_or_init(&path, connect(FakeStash::default()));

    let err = Config::load_or_init(&path, connect(FakeStash::default())).unwrap_err();

    assert!(matches!(err, Error::EmptyConfigValue { key: "Stash URL" }));
}

#[test]
fn malformed_yaml_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "API Key: [unclosed\nStash URL: x\n").unwrap();

    let err = Config::load_or_init(&path, connect(FakeStash::default())).unwrap_err();

    assert!(matches!(err, Error::Yaml(_)));
}

#[test]
fn non_mapping_root_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "- API Key\n- Stash URL\n").unwrap();

    let err = Config::load_or_init(&path, connect(FakeStash::default())).unwrap_err();

    assert!(matches!(err, Error::ConfigNotMapping { .. }));
    assert!(err.to_string().contains("must be a mapping"));
}

#[test]
fn missing_templates_key_is_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, "API Key: k\nStash URL: http://stash\n").unwrap();

    let err = Config::load_or_init(&path, connect(FakeStash::default())).unwrap_err();

    assert!(matches!(err, Error::MissingConfigKey { key: "Templates" }));
}

#[test]
fn name_lists_are_resolved_and_persisted_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, NAME_LIST_CONFIG).unwrap();

    let api = FakeStash::with_tags(&[(3, "Beach"), (4, "Sunset"), (12, "Softbox")]);
    let (config, api) = Config::load_or_init(&path, connect(api)).unwrap();

    assert_eq!(config.credentials.api_key, "secret");
    assert_eq!(config.template("Outdoor").unwrap()[&3], "Beach");
    assert_eq!(config.template("Outdoor").unwrap()[&4], "Sunset");
    assert_eq!(*api.tag_searches.borrow(), vec!["Beach", "Sunset"]);

    let written = fs::read_to_string(&path).unwrap();
    assert!(written.starts_with('#'));
    let first_pass = written.clone();

    // Second run: everything is ID-keyed, so no lookups and no change on disk.
    let (again, api) = Config::load_or_init(&path, connect(FakeStash::default())).unwrap();
    assert!(api.tag_searches.borrow().is_empty());
    assert_eq!(again.templates, config.templates);
    assert_eq!(fs::read_to_string(&path).unwrap(), first_pass);
}

#[test]
fn template_order_survives_rewrite() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(&path, NAME_LIST_CONFIG).unwrap();

    let api = FakeStash::with_tags(&[(3, "Beach"), (4, "Sunset")]);
    let (config, _) = Config::load_or_init(&path, connect(api)).unwrap();

    let names: Vec<&str> = config.template_names().collect();
    assert_eq!(names, vec!["Outdoor", "Studio"]);
}

#[test]
fn unrecognized_template_is_skipped_but_kept_on_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "API Key: k\nStash URL: http://stash\nTemplates:\n  Odd: 5\n  Good:\n    1: a\n",
    )
    .unwrap();

    let (config, _) = Config::load_or_init(&path, connect(FakeStash::default())).unwrap();

    assert!(config.template("Odd").is_none());
    assert!(config.template("Good").is_some());
    let written = fs::read_to_string(&path).unwrap();
    assert!(written.contains("Odd: 5"));
}

#[test]
fn unresolvable_tag_stops_startup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "API Key: k\nStash URL: http://stash\nTemplates:\n  Hair:\n    - Blonde\n",
    )
    .unwrap();

    let api = FakeStash::with_tags(&[(1, "Blonde Hair"), (2, "Blonde Wig")]);
    let err = Config::load_or_init(&path, connect(api)).unwrap_err();

    assert!(matches!(err, Error::UnresolvedTag { ref name } if name == "Blonde"));
    // Nothing is persisted on failure.
    assert!(fs::read_to_string(&path).unwrap().contains("- Blonde"));
}
