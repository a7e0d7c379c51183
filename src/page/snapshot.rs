use super::reader::PageReader;
use serde::{Deserialize, Serialize};

/// A `<th>`/`<td>` pair from one of the page's info tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoRow {
    pub label: String,
    pub value: String,
}

/// Serialized export of the rendered attendance page.
///
/// `attendance` is `None` when the page had no attendance table (e.g. the
/// snapshot was taken mid-navigation).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSnapshot {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub info: Vec<InfoRow>,
    #[serde(default)]
    pub attendance: Option<Vec<Vec<String>>>,
    #[serde(default)]
    pub containers: Vec<String>,
}

impl PageReader for PageSnapshot {
    type Row = Vec<String>;

    fn info_value(&self, label: &str) -> Option<&str> {
        self.info
            .iter()
            .find(|r| r.label.trim() == label)
            .map(|r| r.value.trim())
    }

    fn attendance_rows(&self) -> Option<&[Vec<String>]> {
        self.attendance.as_deref()
    }

    fn has_container(&self, id: &str) -> bool {
        self.containers.iter().any(|c| c == id)
    }
}
