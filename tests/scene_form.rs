mod common;

use std::fs;

use common::FakeStash;
use stash_qmt::form::SUCCESS_MESSAGE;
use stash_qmt::{Config, FormPhase, SceneForm, Status};
use tempfile::TempDir;

fn load_config(dir: &TempDir) -> Config {
    let path = dir.path().join("config.yaml");
    fs::write(
        &path,
        "API Key: k\nStash URL: http://stash\nTemplates:\n  Basic:\n    1: a\n    2: b\n    3: c\n  Other:\n    2: b\n    9: z\n",
    )
    .unwrap();
    let (config, _) = Config::load_or_init(&path, |_| Ok(FakeStash::default())).unwrap();
    config
}

#[test]
fn checklist_hides_tags_already_on_scene() {
    let dir = TempDir::new().unwrap();
    let config = load_config(&dir);
    let api = FakeStash::default();
    api.add_scene(50, &[1, 2]);

    let mut form = SceneForm::new(&config);
    form.scene_id_input = "50".to_string();
    form.load_scene(&api, &config);

    let ids: Vec<u64> = form.checklist.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![3]);
    assert_eq!(form.checklist[0].name, "c");
    assert_eq!(form.phase(), FormPhase::SceneLoaded);
}

#[test]
fn submit_sends_union_and_reports_success() {
    let dir = TempDir::new().unwrap();
    let config = load_config(&dir);
    let api = FakeStash::default();
    api.add_scene(50, &[1, 2]);

    let mut form = SceneForm::new(&config);
    form.scene_id_input = "50".to_string();
    form.load_scene(&api, &config);
    form.checklist[0].checked = true;
    form.submit(&api);

    assert_eq!(*api.updates.borrow(), vec![(50, vec![1, 2, 3])]);
    assert_eq!(form.status, Some(Status::Success(SUCCESS_MESSAGE.to_string())));
    assert_eq!(form.phase(), FormPhase::TagsSubmitted);
}

#[test]
fn refetch_replaces_checklist_and_clears_success() {
    let dir = TempDir::new().unwrap();
    let config = load_config(&dir);
    let api = FakeStash::default();
    api.add_scene(50, &[]);

    let mut form = SceneForm::new(&config);
    form.scene_id_input = "50".to_string();
    form.load_scene(&api, &config);
    assert_eq!(form.checklist.len(), 3);
    form.submit(&api);
    assert!(matches!(form.status, Some(Status::Success(_))));

    form.load_scene(&api, &config);
    form.load_scene(&api, &config);

    assert_eq!(form.checklist.len(), 3);
    assert!(form.status.is_none());
}

#[test]
fn rejected_update_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = load_config(&dir);
    let api = FakeStash {
        reject_updates: true,
        ..FakeStash::default()
    };
    api.add_scene(8, &[1]);

    let mut form = SceneForm::new(&config);
    form.scene_id_input = "8".to_string();
    form.load_scene(&api, &config);
    form.submit(&api);

    assert!(matches!(form.status, Some(Status::Error(_))));
    assert_eq!(form.phase(), FormPhase::SceneLoaded);
}

#[test]
fn bad_scene_id_never_reaches_the_server() {
    let dir = TempDir::new().unwrap();
    let config = load_config(&dir);
    let api = FakeStash::default();

    let mut form = SceneForm::new(&config);
    form.scene_id_input = "12; drop".to_string();
    form.load_scene(&api, &config);

    assert!(matches!(form.status, Some(Status::Error(_))));
    assert!(form.scene.is_none());
    assert!(form.checklist.is_empty());
}

#[test]
fn unknown_scene_is_reported() {
    let dir = TempDir::new().unwrap();
    let config = load_config(&dir);
    let api = FakeStash::default();

    let mut form = SceneForm::new(&config);
    form.scene_id_input = "404".to_string();
    form.load_scene(&api, &config);

    match &form.status {
        Some(Status::Error(message)) => assert!(message.contains("404")),
        other => panic!("unexpected status: {other:?}"),
    }
    assert_eq!(form.phase(), FormPhase::Idle);
}

#[test]
fn switching_template_rebuilds_from_fetched_tags() {
    let dir = TempDir::new().unwrap();
    let config = load_config(&dir);
    let api = FakeStash::default();
    api.add_scene(50, &[2]);

    let mut form = SceneForm::new(&config);
    assert_eq!(form.template.as_deref(), Some("Basic"));
    form.scene_id_input = "50".to_string();
    form.load_scene(&api, &config);

    form.template = Some("Other".to_string());
    form.rebuild_checklist(&config).unwrap();

    let names: Vec<&str> = form.checklist.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["z"]);
    assert_eq!(form.applied_names(&config), vec!["b"]);
}

#[test]
fn submit_without_scene_only_warns() {
    let dir = TempDir::new().unwrap();
    let config = load_config(&dir);
    let api = FakeStash::default();

    let mut form = SceneForm::new(&config);
    form.submit(&api);

    assert!(matches!(form.status, Some(Status::Warning(_))));
    assert!(api.updates.borrow().is_empty());
}
