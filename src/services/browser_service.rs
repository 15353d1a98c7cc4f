use crate::error::AppError;
use crate::remote_path;
use crate::services::api_client::ApiClient;
use crate::services::editor_service;
use crate::services::vfs_service;
use crate::state::{BrowserState, EditorDraft};

// On failure the listing state is left untouched; entries only ever change
// through a successful fetch.
pub fn load_directory(
    client: &ApiClient,
    browser: &mut BrowserState,
    path: &str,
) -> Result<(), AppError> {
    let files = vfs_service::list_folder(client, path)?;
    browser.apply_listing(path, files);
    Ok(())
}

pub fn reload_current(client: &ApiClient, browser: &mut BrowserState) -> Result<(), AppError> {
    let path = browser.path.clone();
    load_directory(client, browser, &path)
}

pub fn navigate_into(
    client: &ApiClient,
    browser: &mut BrowserState,
    editor: &mut EditorDraft,
    name: &str,
) -> Result<(), AppError> {
    let entry = browser
        .entry_by_name(name)
        .ok_or_else(|| AppError::General(format!("no entry named {name} in {}", browser.path)))?
        .clone();

    if entry.is_folder() {
        let target = remote_path::join(&browser.path, &entry.name);
        browser.active_folder = entry.name.clone();
        load_directory(client, browser, &target)
    } else {
        editor_service::open_for_edit(client, editor, &entry.name, &entry.path)
    }
}

pub fn navigate_to_root(client: &ApiClient, browser: &mut BrowserState) -> Result<(), AppError> {
    browser.active_folder.clear();
    load_directory(client, browser, remote_path::ROOT)
}
