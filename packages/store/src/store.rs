//! # Project Store
//!
//! In-memory project list mirrored to a single storage key.
//!
//! ## Lifecycle
//!
//! ```text
//! load ──► absent?  ──► seed default project, persist
//!     └──► parsed   ──► list as stored (newest first)
//!     └──► corrupt  ──► CorruptBlobPolicy decides
//! ```
//!
//! Mutations (`create`, `update_sources`, `delete`) change the list, then
//! rewrite the whole blob. When the write fails the in-memory list is rolled
//! back so it never drifts from what storage holds.

use crate::project::Project;
use crate::storage::{KeyValueStorage, StorageError};
use chrono::Utc;
use codestudio_common::Sources;
use std::collections::HashSet;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Storage key holding the JSON array of projects
pub const PROJECTS_KEY: &str = "codestudio.projects";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Project name cannot be empty")]
    EmptyName,

    #[error("Stored projects under '{key}' are unreadable: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize projects: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// What `load` does when the blob exists but is not a valid project list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CorruptBlobPolicy {
    /// Copy the raw blob to `<key>.corrupt` and start from an empty list.
    /// The original key is left untouched until the next mutation.
    #[default]
    Recover,
    /// Return `StoreError::Corrupt`
    Fail,
}

/// Repository over the persisted project list
#[derive(Debug)]
pub struct ProjectStore<S> {
    storage: S,
    key: String,
    policy: CorruptBlobPolicy,
    projects: Vec<Project>,
}

impl<S: KeyValueStorage> ProjectStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            key: PROJECTS_KEY.to_string(),
            policy: CorruptBlobPolicy::default(),
            projects: Vec::new(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn with_policy(mut self, policy: CorruptBlobPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Read the blob into memory, seeding the default project when absent
    #[instrument(skip(self), fields(key = %self.key))]
    pub fn load(&mut self) -> Result<&[Project], StoreError> {
        let Some(blob) = self.storage.get(&self.key)? else {
            info!("No stored projects, seeding default project");
            let previous = std::mem::replace(
                &mut self.projects,
                vec![Project::default_project(Utc::now())],
            );
            if let Err(e) = self.persist() {
                self.projects = previous;
                return Err(e);
            }
            return Ok(&self.projects);
        };

        match serde_json::from_str::<Vec<Project>>(&blob) {
            Ok(projects) => {
                self.projects = dedupe_ids(projects);
                info!(count = self.projects.len(), "Loaded projects");
            }
            Err(source) => match self.policy {
                CorruptBlobPolicy::Fail => {
                    return Err(StoreError::Corrupt {
                        key: self.key.clone(),
                        source,
                    });
                }
                CorruptBlobPolicy::Recover => {
                    let backup_key = format!("{}.corrupt", self.key);
                    warn!(error = %source, backup = %backup_key, "Stored projects unreadable, starting empty");
                    self.storage.set(&backup_key, &blob)?;
                    self.projects.clear();
                }
            },
        }

        Ok(&self.projects)
    }

    /// Projects, most recently created first
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn first(&self) -> Option<&Project> {
        self.projects.first()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Prepend a new template project. Blank names are rejected untouched.
    pub fn create(&mut self, name: &str) -> Result<Project, StoreError> {
        if name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }

        let now = Utc::now();
        let id = self.unique_id(now.timestamp_millis());
        let project = Project::new(id, name, now);

        self.projects.insert(0, project.clone());
        if let Err(e) = self.persist() {
            self.projects.remove(0);
            return Err(e);
        }

        info!(id = %project.id, name = %project.name, "Created project");
        Ok(project)
    }

    /// Overwrite the content of the project with `id`.
    ///
    /// Returns `false` without touching storage when no such project exists.
    pub fn update_sources(&mut self, id: &str, sources: &Sources) -> Result<bool, StoreError> {
        let Some(index) = self.index_of(id) else {
            debug!(id, "Update skipped, project not found");
            return Ok(false);
        };

        let previous = self.projects[index].sources();
        self.projects[index].set_sources(sources);
        if let Err(e) = self.persist() {
            self.projects[index].set_sources(&previous);
            return Err(e);
        }

        debug!(id, "Saved project content");
        Ok(true)
    }

    /// Remove the project with `id`, returning it if it existed
    pub fn delete(&mut self, id: &str) -> Result<Option<Project>, StoreError> {
        let Some(index) = self.index_of(id) else {
            return Ok(None);
        };

        let removed = self.projects.remove(index);
        if let Err(e) = self.persist() {
            self.projects.insert(index, removed);
            return Err(e);
        }

        info!(id, remaining = self.projects.len(), "Deleted project");
        Ok(Some(removed))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id == id)
    }

    /// Millisecond timestamp, bumped past any id already in use
    fn unique_id(&self, mut candidate: i64) -> String {
        while self.get(&candidate.to_string()).is_some() {
            candidate += 1;
        }
        candidate.to_string()
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let blob = serde_json::to_string(&self.projects).map_err(StoreError::Serialize)?;
        self.storage.set(&self.key, &blob)?;
        Ok(())
    }
}

fn dedupe_ids(projects: Vec<Project>) -> Vec<Project> {
    let mut seen = HashSet::new();
    let total = projects.len();
    let unique: Vec<Project> = projects
        .into_iter()
        .filter(|p| seen.insert(p.id.clone()))
        .collect();

    if unique.len() != total {
        warn!(dropped = total - unique.len(), "Dropped projects with duplicate ids");
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::project::{DEFAULT_PROJECT_ID, DEFAULT_PROJECT_NAME};
    use crate::storage::MemoryStorage;

    fn loaded_store() -> ProjectStore<MemoryStorage> {
        let mut store = ProjectStore::new(MemoryStorage::new());
        store.load().unwrap();
        store
    }

    /// Storage whose writes can be switched off
    #[derive(Default)]
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_writes: bool,
    }

    impl KeyValueStorage for FlakyStorage {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
            if self.fail_writes {
                return Err(StorageError::Io {
                    path: key.into(),
                    source: std::io::Error::new(std::io::ErrorKind::Other, "disk full"),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> Result<(), StorageError> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn test_load_seeds_default_project() {
        let store = loaded_store();

        assert_eq!(store.len(), 1);
        let project = store.first().unwrap();
        assert_eq!(project.id, DEFAULT_PROJECT_ID);
        assert_eq!(project.name, DEFAULT_PROJECT_NAME);
        assert_eq!(project.sources(), Sources::template());

        // Seeding is persisted immediately
        let blob = store.storage().get(PROJECTS_KEY).unwrap().unwrap();
        assert!(blob.contains("\"id\":\"default\""));
    }

    #[test]
    fn test_create_prepends_template_project() {
        let mut store = loaded_store();
        let before = store.len();

        let created = store.create("Landing page").unwrap();

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.first().unwrap().id, created.id);
        assert_eq!(store.first().unwrap().name, "Landing page");
        assert_eq!(store.first().unwrap().sources(), Sources::template());
    }

    #[test]
    fn test_create_keeps_name_as_supplied() {
        let mut store = loaded_store();
        let created = store.create("  Padded  ").unwrap();
        assert_eq!(created.name, "  Padded  ");
    }

    #[test]
    fn test_create_rejects_blank_names_without_writing() {
        let mut store = loaded_store();
        let blob_before = store.storage().get(PROJECTS_KEY).unwrap();

        for name in ["", "   ", "\t\n"] {
            assert!(matches!(store.create(name), Err(StoreError::EmptyName)));
        }

        assert_eq!(store.len(), 1);
        assert_eq!(store.storage().get(PROJECTS_KEY).unwrap(), blob_before);
    }

    #[test]
    fn test_rapid_creates_get_unique_ids() {
        let mut store = loaded_store();
        let ids: Vec<String> = (0..20)
            .map(|i| store.create(&format!("p{}", i)).unwrap().id)
            .collect();

        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = loaded_store();
        let updated = store
            .update_sources("missing", &Sources::new("x", "y", "z"))
            .unwrap();
        assert!(!updated);
        assert_eq!(store.first().unwrap().sources(), Sources::template());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut store = loaded_store();
        assert!(store.delete("missing").unwrap().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_corrupt_blob_recovers_to_empty_and_backs_up() {
        let storage = MemoryStorage::with_entry(PROJECTS_KEY, "{not json");
        let mut store = ProjectStore::new(storage);

        assert!(store.load().unwrap().is_empty());

        let backup = store.storage().get("codestudio.projects.corrupt").unwrap();
        assert_eq!(backup.as_deref(), Some("{not json"));
        // Original left alone until the next mutation
        assert_eq!(
            store.storage().get(PROJECTS_KEY).unwrap().as_deref(),
            Some("{not json")
        );
    }

    #[test]
    fn test_corrupt_blob_fails_under_strict_policy() {
        let storage = MemoryStorage::with_entry(PROJECTS_KEY, "[{\"id\": 1}]");
        let mut store = ProjectStore::new(storage).with_policy(CorruptBlobPolicy::Fail);

        assert!(matches!(store.load(), Err(StoreError::Corrupt { .. })));
    }

    #[test]
    fn test_load_drops_duplicate_ids() {
        let a = Project::new("1", "first", Utc::now());
        let b = Project::new("1", "second", Utc::now());
        let blob = serde_json::to_string(&vec![a, b]).unwrap();
        let mut store = ProjectStore::new(MemoryStorage::with_entry(PROJECTS_KEY, blob));

        let projects = store.load().unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "first");
    }

    #[test]
    fn test_failed_write_rolls_back_create() {
        let mut store = ProjectStore::new(FlakyStorage::default());
        store.load().unwrap();

        store.storage_mut().fail_writes = true;
        assert!(matches!(store.create("Doomed"), Err(StoreError::Storage(_))));
        assert_eq!(store.len(), 1);
        assert_eq!(store.first().unwrap().id, DEFAULT_PROJECT_ID);
    }

    #[test]
    fn test_failed_seed_leaves_list_empty() {
        let mut store = ProjectStore::new(FlakyStorage {
            fail_writes: true,
            ..Default::default()
        });

        assert!(matches!(store.load(), Err(StoreError::Storage(_))));
        assert!(store.is_empty());
        assert_eq!(store.storage().get(PROJECTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_failed_write_rolls_back_update_and_delete() {
        let mut store = ProjectStore::new(FlakyStorage::default());
        store.load().unwrap();
        store.storage_mut().fail_writes = true;

        assert!(store
            .update_sources(DEFAULT_PROJECT_ID, &Sources::new("a", "b", "c"))
            .is_err());
        assert_eq!(store.first().unwrap().sources(), Sources::template());

        assert!(store.delete(DEFAULT_PROJECT_ID).is_err());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_custom_key() {
        let mut store = ProjectStore::new(MemoryStorage::new()).with_key("other.key");
        store.load().unwrap();

        assert!(store.storage().get("other.key").unwrap().is_some());
        assert!(store.storage().get(PROJECTS_KEY).unwrap().is_none());
    }
}
