use serde::Serialize;

use crate::error::AppError;
use crate::models::entry::{DirectoryListing, FileDocument, RemoteEntry};
use crate::services::api_client::ApiClient;

#[derive(Serialize)]
struct FolderBody<'a> {
    name: &'a str,
    path: &'a str,
}

#[derive(Serialize)]
struct FileBody<'a> {
    name: &'a str,
    path: &'a str,
    content: &'a str,
}

pub fn list_folder(client: &ApiClient, path: &str) -> Result<Vec<RemoteEntry>, AppError> {
    let url = client.endpoint(&["api", "folder", path])?;
    let listing: DirectoryListing = client.get_json(&url)?;
    Ok(listing.files)
}

pub fn create_folder(client: &ApiClient, name: &str, path: &str) -> Result<(), AppError> {
    let url = client.endpoint(&["api", "folder", "create"])?;
    client.post_json(&url, &FolderBody { name, path })
}

pub fn create_file(
    client: &ApiClient,
    name: &str,
    path: &str,
    content: &str,
) -> Result<(), AppError> {
    let url = client.endpoint(&["api", "file", "create"])?;
    client.post_json(&url, &FileBody {
        name,
        path,
        content,
    })
}

pub fn read_file(client: &ApiClient, name: &str, path: &str) -> Result<FileDocument, AppError> {
    let mut url = client.endpoint(&["api", "file", "read"])?;
    url.query_pairs_mut()
        .append_pair("file_path", path)
        .append_pair("file_name", name);
    client.get_json(&url)
}

pub fn update_file(
    client: &ApiClient,
    name: &str,
    path: &str,
    content: &str,
) -> Result<(), AppError> {
    let url = client.endpoint(&["api", "file", "update"])?;
    client.put_json(&url, &FileBody {
        name,
        path,
        content,
    })
}

// The delete response carries a body but nothing in it is used.
pub fn delete_file(client: &ApiClient, path: &str, name: &str) -> Result<(), AppError> {
    let mut url = client.endpoint(&["api", "file", "delete"])?;
    url.query_pairs_mut()
        .append_pair("file_path", path)
        .append_pair("file_name", name);
    client.delete(&url)
}
