use tauri::{command, State};
use tracing::warn;

use crate::error::AppError;
use crate::models::sort::SortColumn;
use crate::services::browser_service;
use crate::state::{AppSnapshot, AppState};

#[command]
pub fn get_state(state: State<'_, AppState>) -> AppSnapshot {
    state.snapshot()
}

#[command]
pub fn load_directory(path: String, state: State<'_, AppState>) -> Result<AppSnapshot, AppError> {
    let client = state.api_client()?;
    {
        let mut browser = state.browser();
        browser_service::load_directory(&client, &mut browser, &path).map_err(|err| {
            warn!("loading directory {path} failed: {err}");
            err
        })?;
    }
    Ok(state.snapshot())
}

#[command]
pub fn navigate_into(name: String, state: State<'_, AppState>) -> Result<AppSnapshot, AppError> {
    let client = state.api_client()?;
    {
        let mut browser = state.browser();
        let mut editor = state.editor();
        browser_service::navigate_into(&client, &mut browser, &mut editor, &name).map_err(
            |err| {
                warn!("opening {name} failed: {err}");
                err
            },
        )?;
    }
    Ok(state.snapshot())
}

#[command]
pub fn navigate_to_root(state: State<'_, AppState>) -> Result<AppSnapshot, AppError> {
    let client = state.api_client()?;
    {
        let mut browser = state.browser();
        browser_service::navigate_to_root(&client, &mut browser)?;
    }
    Ok(state.snapshot())
}

#[command]
pub fn sort_by(column: SortColumn, state: State<'_, AppState>) -> AppSnapshot {
    state.browser().toggle_sort(column);
    state.snapshot()
}
