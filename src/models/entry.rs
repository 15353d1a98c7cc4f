use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntryKind {
    #[serde(rename = "FILE")]
    File,
    #[serde(rename = "FOLDER")]
    Folder,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub path: String,
    pub created_at: String,
    pub modified_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

impl RemoteEntry {
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

#[derive(Debug, Deserialize)]
pub struct DirectoryListing {
    pub files: Vec<RemoteEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileDocument {
    pub name: String,
    pub content: String,
}

// Backend timestamps arrive as ISO-8601; the table shows them truncated to
// second precision in UTC. Values that fail to parse are shown verbatim.
pub fn display_timestamp(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| {
            dt.with_timezone(&chrono::Utc)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_file_entry() {
        let json = r#"{
            "name": "notes.txt",
            "type": "FILE",
            "path": "root/docs",
            "created_at": "2024-03-01T09:30:00Z",
            "modified_at": "2024-03-02T10:00:00Z",
            "size": 42
        }"#;

        let entry: RemoteEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "notes.txt");
        assert_eq!(entry.kind, EntryKind::File);
        assert_eq!(entry.size, Some(42));
        assert!(!entry.is_folder());
    }

    #[test]
    fn test_deserialize_folder_entry_without_size() {
        let json = r#"{
            "name": "docs",
            "type": "FOLDER",
            "path": "root",
            "created_at": "2024-03-01T09:30:00Z",
            "modified_at": "2024-03-01T09:30:00Z"
        }"#;

        let entry: RemoteEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.kind, EntryKind::Folder);
        assert_eq!(entry.size, None);
        assert!(entry.is_folder());
    }

    #[test]
    fn test_deserialize_listing() {
        let json = r#"{"files": [
            {"name": "a", "type": "FOLDER", "path": "root",
             "created_at": "2024-01-01T00:00:00Z", "modified_at": "2024-01-01T00:00:00Z"}
        ]}"#;

        let listing: DirectoryListing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.files.len(), 1);
        assert_eq!(listing.files[0].name, "a");
    }

    #[test]
    fn test_display_timestamp_truncates_to_seconds() {
        assert_eq!(
            display_timestamp("2024-03-01T09:30:15.123456Z"),
            "2024-03-01 09:30:15"
        );
    }

    #[test]
    fn test_display_timestamp_converts_offset_to_utc() {
        assert_eq!(
            display_timestamp("2024-03-01T09:30:15+02:00"),
            "2024-03-01 07:30:15"
        );
    }

    #[test]
    fn test_display_timestamp_passes_through_unparseable() {
        assert_eq!(display_timestamp("not a date"), "not a date");
    }
}
