use crate::error::AppError;
use crate::services::api_client::ApiClient;
use crate::services::browser_service;
use crate::services::vfs_service;
use crate::state::{BrowserState, EditorDraft, EditorMode};

pub fn create_file(
    client: &ApiClient,
    browser: &mut BrowserState,
    editor: &mut EditorDraft,
    name: &str,
    content: &str,
) -> Result<(), AppError> {
    if editor.is_editing() {
        return Err(AppError::General(
            "cannot create a file while another is open for editing".to_string(),
        ));
    }
    if name.trim().is_empty() {
        return Err(AppError::General("file name must not be empty".to_string()));
    }

    let result = vfs_service::create_file(client, name, &browser.path, content);
    // Draft and sort state reset whether or not the backend accepted the
    // file; only a successful create triggers the reload.
    editor.clear();
    browser.reset_sort();
    result?;
    browser_service::reload_current(client, browser)
}

pub fn create_folder(
    client: &ApiClient,
    browser: &mut BrowserState,
    name: &str,
) -> Result<(), AppError> {
    if name.trim().is_empty() {
        return Err(AppError::General(
            "folder name must not be empty".to_string(),
        ));
    }

    let result = vfs_service::create_folder(client, name, &browser.path);
    browser.reset_sort();
    result?;
    browser_service::reload_current(client, browser)
}

pub fn open_for_edit(
    client: &ApiClient,
    editor: &mut EditorDraft,
    name: &str,
    path: &str,
) -> Result<(), AppError> {
    let document = vfs_service::read_file(client, name, path)?;
    editor.begin_edit(document.name, document.content);
    Ok(())
}

// A failed update keeps the editing session and skips the reload.
pub fn update_file(
    client: &ApiClient,
    browser: &mut BrowserState,
    editor: &mut EditorDraft,
    content: &str,
) -> Result<(), AppError> {
    let EditorMode::Editing { original_name } = editor.mode.clone() else {
        return Err(AppError::General(
            "no file is open for editing".to_string(),
        ));
    };

    editor.content = content.to_string();
    vfs_service::update_file(client, &original_name, &browser.path, content)?;
    editor.clear();
    browser.reset_sort();
    browser_service::reload_current(client, browser)
}

pub fn delete_file(
    client: &ApiClient,
    browser: &mut BrowserState,
    editor: &mut EditorDraft,
) -> Result<(), AppError> {
    let EditorMode::Editing { original_name } = editor.mode.clone() else {
        return Err(AppError::General(
            "no file is open for editing".to_string(),
        ));
    };

    vfs_service::delete_file(client, &browser.path, &original_name)?;
    editor.clear();
    browser.reset_sort();
    browser_service::reload_current(client, browser)
}

pub fn cancel(editor: &mut EditorDraft) {
    editor.clear();
}
