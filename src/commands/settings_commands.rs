use tauri::{command, State};

use crate::data::repository;
use crate::error::AppError;
use crate::state::AppState;

#[command]
pub fn get_setting(key: String, state: State<'_, AppState>) -> Result<Option<String>, AppError> {
    let conn = state
        .db
        .lock()
        .map_err(|e| AppError::General(e.to_string()))?;
    repository::get_setting(&conn, &key)
}

#[command]
pub fn set_setting(key: String, value: String, state: State<'_, AppState>) -> Result<(), AppError> {
    let conn = state
        .db
        .lock()
        .map_err(|e| AppError::General(e.to_string()))?;
    repository::set_setting(&conn, &key, &value)
}
