//! Persistence round-trips through a real storage directory

use codestudio_common::Sources;
use codestudio_store::{DirectoryStorage, KeyValueStorage, ProjectStore, PROJECTS_KEY};
use pretty_assertions::assert_eq;

fn open(dir: &std::path::Path) -> ProjectStore<DirectoryStorage> {
    let mut store = ProjectStore::new(DirectoryStorage::open(dir).unwrap());
    store.load().unwrap();
    store
}

#[test]
fn test_save_then_reload_returns_new_content() {
    let dir = tempfile::tempdir().unwrap();

    let id = {
        let mut store = open(dir.path());
        let project = store.create("Portfolio").unwrap();
        let sources = Sources::new("<p>x</p>", "p{color:red}", "console.log(1)");
        assert!(store.update_sources(&project.id, &sources).unwrap());
        project.id
    };

    let store = open(dir.path());
    let reloaded = store.get(&id).expect("project survives reload");
    assert_eq!(reloaded.name, "Portfolio");
    assert_eq!(
        reloaded.sources(),
        Sources::new("<p>x</p>", "p{color:red}", "console.log(1)")
    );
}

#[test]
fn test_reload_preserves_newest_first_order() {
    let dir = tempfile::tempdir().unwrap();

    let expected: Vec<String> = {
        let mut store = open(dir.path());
        store.create("one").unwrap();
        store.create("two").unwrap();
        store.create("three").unwrap();
        store.projects().iter().map(|p| p.name.clone()).collect()
    };

    assert_eq!(expected, vec!["three", "two", "one", "My First Project"]);

    let store = open(dir.path());
    let names: Vec<String> = store.projects().iter().map(|p| p.name.clone()).collect();
    assert_eq!(names, expected);
}

#[test]
fn test_deleting_everything_persists_empty_list() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut store = open(dir.path());
        let ids: Vec<String> = store.projects().iter().map(|p| p.id.clone()).collect();
        for id in ids {
            store.delete(&id).unwrap();
        }
        assert!(store.is_empty());
    }

    // An empty stored list is not "absent": no default project is reseeded
    let store = open(dir.path());
    assert!(store.is_empty());
    assert_eq!(
        store.storage().get(PROJECTS_KEY).unwrap().as_deref(),
        Some("[]")
    );
}

#[test]
fn test_blank_create_leaves_file_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(dir.path());
    let before = std::fs::read_to_string(dir.path().join("codestudio.projects.json")).unwrap();

    assert!(store.create("   ").is_err());

    let after = std::fs::read_to_string(dir.path().join("codestudio.projects.json")).unwrap();
    assert_eq!(before, after);
}
