//! Browser bindings.
//!
//! The JS host owns `localStorage` and the clipboard. It passes the stored
//! blob in when constructing a [`Playground`], writes [`Playground::storage_blob`]
//! back after every mutating call, and copies the URL returned by `publish`.
//!
//! An unreadable stored blob opens as an empty list. Its raw text is kept
//! under [`Playground::corrupt_backup_key`]; the host must write
//! [`Playground::corrupt_backup`] there before persisting `storageBlob`,
//! or the original text is lost.

use codestudio_common::BufferKind;
use codestudio_editor::{MemoryClipboard, Playground as Session, PublishOptions};
use codestudio_preview::{compose, srcdoc_frame};
use codestudio_store::{KeyValueStorage, MemoryStorage, ProjectStore, PROJECTS_KEY};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

fn to_js(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn parse_kind(kind: &str) -> Result<BufferKind, JsValue> {
    kind.parse::<BufferKind>().map_err(|e| JsValue::from_str(&e))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectSummary<'a> {
    id: &'a str,
    name: &'a str,
    created_at: String,
    active: bool,
}

#[wasm_bindgen]
pub struct ExportResult {
    file_name: String,
    bytes: Vec<u8>,
}

#[wasm_bindgen]
impl ExportResult {
    #[wasm_bindgen(getter, js_name = fileName)]
    pub fn file_name(&self) -> String {
        self.file_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }
}

/// Playground session backed by an in-memory copy of the stored blob
#[wasm_bindgen]
pub struct Playground {
    inner: Session<MemoryStorage>,
    publish_options: PublishOptions,
}

#[wasm_bindgen]
impl Playground {
    /// `stored` is the current value of the projects key, if any
    #[wasm_bindgen(constructor)]
    pub fn new(stored: Option<String>) -> Result<Playground, JsValue> {
        let storage = match stored {
            Some(blob) => MemoryStorage::with_entry(PROJECTS_KEY, blob),
            None => MemoryStorage::new(),
        };
        let inner = Session::open(ProjectStore::new(storage)).map_err(to_js)?;

        Ok(Playground {
            inner,
            publish_options: PublishOptions::default(),
        })
    }

    /// Storage key the host should read and write
    #[wasm_bindgen(js_name = storageKey)]
    pub fn storage_key() -> String {
        PROJECTS_KEY.to_string()
    }

    /// Current projects blob for the host to persist
    #[wasm_bindgen(js_name = storageBlob)]
    pub fn storage_blob(&self) -> Option<String> {
        self.inner
            .store()
            .storage()
            .get(PROJECTS_KEY)
            .ok()
            .flatten()
    }

    /// Storage key for the copy of an unreadable blob
    #[wasm_bindgen(js_name = corruptBackupKey)]
    pub fn corrupt_backup_key() -> String {
        format!("{}.corrupt", PROJECTS_KEY)
    }

    /// Raw text of the blob that failed to parse on open, if any
    #[wasm_bindgen(js_name = corruptBackup)]
    pub fn corrupt_backup(&self) -> Option<String> {
        self.inner
            .store()
            .storage()
            .get(&Self::corrupt_backup_key())
            .ok()
            .flatten()
    }

    /// Project list as JSON: `[{ id, name, createdAt, active }]`
    #[wasm_bindgen(js_name = projectsJson)]
    pub fn projects_json(&self) -> Result<String, JsValue> {
        let active = self.inner.active_id();
        let summaries: Vec<ProjectSummary> = self
            .inner
            .projects()
            .iter()
            .map(|p| ProjectSummary {
                id: &p.id,
                name: &p.name,
                created_at: p.created_at.to_rfc3339(),
                active: active == Some(p.id.as_str()),
            })
            .collect();
        serde_json::to_string(&summaries).map_err(to_js)
    }

    #[wasm_bindgen(js_name = activeId)]
    pub fn active_id(&self) -> Option<String> {
        self.inner.active_id().map(str::to_string)
    }

    pub fn activate(&mut self, id: &str) -> Result<(), JsValue> {
        self.inner.activate(id).map_err(to_js)
    }

    /// Create a project; blank names raise an error notification and return
    /// `undefined`
    pub fn create(&mut self, name: &str) -> Option<String> {
        let result = self.inner.create(name).map(|p| p.id.clone());
        self.inner.report(result)
    }

    pub fn save(&mut self) -> bool {
        let result = self.inner.save();
        self.inner.report(result).unwrap_or(false)
    }

    pub fn delete(&mut self, id: &str) -> bool {
        let result = self.inner.delete(id);
        matches!(self.inner.report(result), Some(Some(_)))
    }

    pub fn buffer(&self, kind: &str) -> Result<String, JsValue> {
        Ok(self.inner.buffer(parse_kind(kind)?).to_string())
    }

    #[wasm_bindgen(js_name = setBuffer)]
    pub fn set_buffer(&mut self, kind: &str, text: String) -> Result<(), JsValue> {
        self.inner.set_buffer(parse_kind(kind)?, text);
        Ok(())
    }

    /// Replace a buffer with text the host read from a picked file
    #[wasm_bindgen(js_name = importText)]
    pub fn import_text(&mut self, kind: &str, text: String) -> Result<(), JsValue> {
        self.set_buffer(kind, text)
    }

    #[wasm_bindgen(js_name = isDirty)]
    pub fn is_dirty(&self) -> bool {
        self.inner.is_dirty()
    }

    /// Composed document for the preview frame's `srcdoc`
    pub fn compose(&self) -> String {
        compose(self.inner.buffers())
    }

    /// Complete sandboxed `<iframe>` markup for the current buffers
    #[wasm_bindgen(js_name = previewFrame)]
    pub fn preview_frame(&self) -> String {
        srcdoc_frame(&self.compose())
    }

    /// Archive bytes plus download name; errors become notifications
    #[wasm_bindgen(js_name = exportArchive)]
    pub fn export_archive(&mut self) -> Option<ExportResult> {
        let result = self.inner.export_archive();
        self.inner.report(result).map(|archive| ExportResult {
            file_name: archive.file_name,
            bytes: archive.bytes,
        })
    }

    /// Simulated publish. Returns the URL; the host copies it.
    pub fn publish(&mut self) -> String {
        let mut clipboard = MemoryClipboard::default();
        let receipt = self.inner.publish(
            &mut clipboard,
            &mut rand::thread_rng(),
            &self.publish_options,
        );
        receipt.url
    }

    /// Queued notifications as JSON, clearing the queue
    #[wasm_bindgen(js_name = takeNotifications)]
    pub fn take_notifications(&mut self) -> Result<String, JsValue> {
        serde_json::to_string(&self.inner.take_notifications()).map_err(to_js)
    }
}

/// Compose three buffers without a session
#[wasm_bindgen(js_name = composeDocument)]
pub fn compose_document(markup: &str, style: &str, script: &str) -> String {
    compose(&codestudio_common::Sources::new(markup, style, script))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_seeds_default_project() {
        let pg = Playground::new(None).unwrap();

        assert_eq!(pg.active_id().as_deref(), Some("default"));
        let blob = pg.storage_blob().unwrap();
        assert!(blob.contains("\"name\":\"My First Project\""));
    }

    #[test]
    fn test_create_save_and_persist_blob() {
        let mut pg = Playground::new(Some("[]".to_string())).unwrap();
        assert!(pg.active_id().is_none());

        let id = pg.create("From browser").unwrap();
        pg.set_buffer("html", "<p>wasm</p>".to_string()).unwrap();
        assert!(pg.is_dirty());
        assert!(pg.save());

        let reopened = Playground::new(pg.storage_blob()).unwrap();
        assert_eq!(reopened.active_id(), Some(id));
        assert_eq!(reopened.buffer("markup").unwrap(), "<p>wasm</p>");
    }

    #[test]
    fn test_unreadable_blob_is_kept_for_the_host() {
        let mut pg = Playground::new(Some("{not json".to_string())).unwrap();
        assert!(pg.active_id().is_none());
        assert_eq!(pg.corrupt_backup().as_deref(), Some("{not json"));

        pg.create("fresh").unwrap();

        assert!(pg.storage_blob().unwrap().contains("\"name\":\"fresh\""));
        assert_eq!(pg.corrupt_backup().as_deref(), Some("{not json"));
        assert_eq!(Playground::corrupt_backup_key(), "codestudio.projects.corrupt");
    }

    #[test]
    fn test_readable_blob_has_no_backup() {
        let pg = Playground::new(None).unwrap();
        assert!(pg.corrupt_backup().is_none());
    }

    #[test]
    fn test_blank_create_queues_error() {
        let mut pg = Playground::new(None).unwrap();
        assert!(pg.create("   ").is_none());

        let json = pg.take_notifications().unwrap();
        assert!(json.contains("\"kind\":\"error\""));
    }

    #[test]
    fn test_export_and_publish() {
        let mut pg = Playground::new(None).unwrap();

        let archive = pg.export_archive().unwrap();
        assert_eq!(archive.file_name(), "My First Project.zip");

        let url = pg.publish();
        assert!(url.starts_with("https://yoursite-"));
        assert!(url.ends_with(".poehali.dev"));
    }

    #[test]
    fn test_compose_document_contains_buffers() {
        let doc = compose_document("<b>m</b>", "b{}", "s()");
        assert!(doc.contains("<b>m</b>"));
        assert!(doc.contains("<style>b{}</style>"));
        assert!(doc.contains("<script>s()</script>"));
    }

    #[test]
    fn test_preview_frame_is_sandboxed() {
        let pg = Playground::new(None).unwrap();
        assert!(pg.preview_frame().contains("sandbox=\"allow-scripts\""));
    }
}
