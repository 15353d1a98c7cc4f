pub mod api_client;
pub mod browser_service;
pub mod editor_service;
pub mod vfs_service;
