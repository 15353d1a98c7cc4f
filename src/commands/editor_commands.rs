use tauri::{command, State};
use tracing::warn;

use crate::error::AppError;
use crate::services::editor_service;
use crate::state::{AppSnapshot, AppState};

#[command]
pub fn create_file(
    name: String,
    content: String,
    state: State<'_, AppState>,
) -> Result<AppSnapshot, AppError> {
    let client = state.api_client()?;
    {
        let mut browser = state.browser();
        let mut editor = state.editor();
        editor_service::create_file(&client, &mut browser, &mut editor, &name, &content).map_err(
            |err| {
                warn!("creating file {name} failed: {err}");
                err
            },
        )?;
    }
    Ok(state.snapshot())
}

#[command]
pub fn create_folder(name: String, state: State<'_, AppState>) -> Result<AppSnapshot, AppError> {
    let client = state.api_client()?;
    {
        let mut browser = state.browser();
        editor_service::create_folder(&client, &mut browser, &name).map_err(|err| {
            warn!("creating folder {name} failed: {err}");
            err
        })?;
    }
    Ok(state.snapshot())
}

#[command]
pub fn open_for_edit(
    name: String,
    path: String,
    state: State<'_, AppState>,
) -> Result<AppSnapshot, AppError> {
    let client = state.api_client()?;
    {
        let mut editor = state.editor();
        editor_service::open_for_edit(&client, &mut editor, &name, &path).map_err(|err| {
            warn!("opening {name} for edit failed: {err}");
            err
        })?;
    }
    Ok(state.snapshot())
}

#[command]
pub fn update_file(content: String, state: State<'_, AppState>) -> Result<AppSnapshot, AppError> {
    let client = state.api_client()?;
    {
        let mut browser = state.browser();
        let mut editor = state.editor();
        editor_service::update_file(&client, &mut browser, &mut editor, &content).map_err(
            |err| {
                warn!("updating file failed: {err}");
                err
            },
        )?;
    }
    Ok(state.snapshot())
}

#[command]
pub fn delete_file(state: State<'_, AppState>) -> Result<AppSnapshot, AppError> {
    let client = state.api_client()?;
    {
        let mut browser = state.browser();
        let mut editor = state.editor();
        editor_service::delete_file(&client, &mut browser, &mut editor).map_err(|err| {
            warn!("deleting file failed: {err}");
            err
        })?;
    }
    Ok(state.snapshot())
}

#[command]
pub fn cancel_edit(state: State<'_, AppState>) -> AppSnapshot {
    editor_service::cancel(&mut state.editor());
    state.snapshot()
}
