use crate::page::PageReader;
use serde::Serialize;

/// Where the summary panel goes on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum Placement {
    /// Appended as the last child of the container with this id.
    AppendTo(String),
    /// Inserted right before the attendance table.
    BeforeAttendanceTable,
}

impl Placement {
    pub fn for_page<P: PageReader>(page: &P, container_id: &str) -> Self {
        if page.has_container(container_id) {
            Placement::AppendTo(container_id.to_string())
        } else {
            Placement::BeforeAttendanceTable
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Placement::AppendTo(id) => format!("append to #{id}"),
            Placement::BeforeAttendanceTable => "before the attendance table".to_string(),
        }
    }
}
