use std::sync::{Mutex, MutexGuard};

use serde::Serialize;

use crate::data::repository;
use crate::error::AppError;
use crate::models::entry::{display_timestamp, EntryKind, RemoteEntry};
use crate::models::sort::{sort_entries, SortColumn, SortDirection};
use crate::remote_path;
use crate::services::api_client::ApiClient;

pub const BACKEND_URL_KEY: &str = "backend_url";
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug)]
pub struct BrowserState {
    pub path: String,
    pub active_folder: String,
    pub entries: Vec<RemoteEntry>,
    pub sort: Option<(SortColumn, SortDirection)>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            path: remote_path::ROOT.to_string(),
            active_folder: String::new(),
            entries: Vec::new(),
            sort: None,
        }
    }
}

impl BrowserState {
    // Single entry point for listing updates: entries always mirror the most
    // recent successful fetch for `path`, and sort state never survives one.
    pub fn apply_listing(&mut self, path: &str, entries: Vec<RemoteEntry>) {
        self.path = path.to_string();
        self.entries = entries;
        self.sort = None;
    }

    pub fn reset_sort(&mut self) {
        self.sort = None;
    }

    // Same column twice flips the direction; a new column starts ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) -> SortDirection {
        let direction = match self.sort {
            Some((current, direction)) if current == column => direction.flipped(),
            _ => SortDirection::Asc,
        };
        self.sort = Some((column, direction));
        sort_entries(&mut self.entries, column, direction);
        direction
    }

    pub fn entry_by_name(&self, name: &str) -> Option<&RemoteEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    pub fn snapshot(&self) -> BrowserSnapshot {
        BrowserSnapshot {
            path: self.path.clone(),
            active_folder: self.active_folder.clone(),
            sort_column: self.sort.map(|(column, _)| column),
            sort_direction: self.sort.map(|(_, direction)| direction),
            entries: self.entries.iter().map(ListingRow::from_entry).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EditorMode {
    Idle,
    Editing { original_name: String },
}

#[derive(Debug)]
pub struct EditorDraft {
    pub name: String,
    pub content: String,
    pub mode: EditorMode,
}

impl Default for EditorDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            content: String::new(),
            mode: EditorMode::Idle,
        }
    }
}

impl EditorDraft {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, EditorMode::Editing { .. })
    }

    pub fn begin_edit(&mut self, name: String, content: String) {
        self.mode = EditorMode::Editing {
            original_name: name.clone(),
        };
        self.name = name;
        self.content = content;
    }

    pub fn clear(&mut self) {
        self.name.clear();
        self.content.clear();
        self.mode = EditorMode::Idle;
    }

    pub fn snapshot(&self) -> EditorSnapshot {
        EditorSnapshot {
            name: self.name.clone(),
            content: self.content.clone(),
            editing: self.is_editing(),
        }
    }
}

// Projections handed back to the webview after every command. Timestamps are
// pre-formatted so the page renders them as-is.
#[derive(Debug, Serialize)]
pub struct ListingRow {
    pub name: String,
    pub kind: EntryKind,
    pub path: String,
    pub created_at: String,
    pub modified_at: String,
    pub size: Option<u64>,
}

impl ListingRow {
    fn from_entry(entry: &RemoteEntry) -> Self {
        Self {
            name: entry.name.clone(),
            kind: entry.kind,
            path: entry.path.clone(),
            created_at: display_timestamp(&entry.created_at),
            modified_at: display_timestamp(&entry.modified_at),
            size: entry.size,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BrowserSnapshot {
    pub path: String,
    pub active_folder: String,
    pub sort_column: Option<SortColumn>,
    pub sort_direction: Option<SortDirection>,
    pub entries: Vec<ListingRow>,
}

#[derive(Debug, Serialize)]
pub struct EditorSnapshot {
    pub name: String,
    pub content: String,
    pub editing: bool,
}

#[derive(Debug, Serialize)]
pub struct AppSnapshot {
    pub browser: BrowserSnapshot,
    pub editor: EditorSnapshot,
}

pub struct AppState {
    pub db: Mutex<rusqlite::Connection>,
    pub browser: Mutex<BrowserState>,
    pub editor: Mutex<EditorDraft>,
}

impl AppState {
    pub fn browser(&self) -> MutexGuard<'_, BrowserState> {
        self.browser
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn editor(&self) -> MutexGuard<'_, EditorDraft> {
        self.editor
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn backend_url(&self) -> Result<String, AppError> {
        let conn = self
            .db
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        let configured = repository::get_setting(&conn, BACKEND_URL_KEY)?;
        Ok(configured.unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string()))
    }

    // Rebuilt per command; a changed backend_url setting applies on the next call.
    pub fn api_client(&self) -> Result<ApiClient, AppError> {
        ApiClient::new(&self.backend_url()?)
    }

    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            browser: self.browser().snapshot(),
            editor: self.editor().snapshot(),
        }
    }
}
