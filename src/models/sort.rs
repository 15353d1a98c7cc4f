use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::entry::RemoteEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    Name,
    Size,
    CreatedAt,
    ModifiedAt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

// Stable re-order of the loaded entries; never refetches. Folders carry no
// size and sort as zero. Unparseable timestamps sort before parseable ones.
pub fn sort_entries(entries: &mut [RemoteEntry], column: SortColumn, direction: SortDirection) {
    entries.sort_by(|a, b| {
        let ordering = match column {
            SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortColumn::Size => a.size.unwrap_or(0).cmp(&b.size.unwrap_or(0)),
            SortColumn::CreatedAt => timestamp_key(&a.created_at).cmp(&timestamp_key(&b.created_at)),
            SortColumn::ModifiedAt => {
                timestamp_key(&a.modified_at).cmp(&timestamp_key(&b.modified_at))
            }
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn timestamp_key(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .ok()
}
