//! Narrow read-only view over the attendance page.

/// Indexed text cells of one attendance-table row.
pub trait RowReader {
    fn cell_count(&self) -> usize;

    /// Text of cell `idx`, if the row has that many cells.
    fn cell(&self, idx: usize) -> Option<&str>;

    /// Trimmed cell text, empty when the cell is missing.
    fn text(&self, idx: usize) -> &str {
        self.cell(idx).map(str::trim).unwrap_or("")
    }
}

impl<S: AsRef<str>> RowReader for [S] {
    fn cell_count(&self) -> usize {
        self.len()
    }

    fn cell(&self, idx: usize) -> Option<&str> {
        self.get(idx).map(|s| s.as_ref())
    }
}

impl<S: AsRef<str>> RowReader for Vec<S> {
    fn cell_count(&self) -> usize {
        self.len()
    }

    fn cell(&self, idx: usize) -> Option<&str> {
        self.get(idx).map(|s| s.as_ref())
    }
}

/// Everything the calculator needs from the page.
pub trait PageReader {
    type Row: RowReader;

    /// Value cell of the info row whose header equals `label`.
    fn info_value(&self, label: &str) -> Option<&str>;

    /// Rows of the attendance table, or None when the table is not rendered.
    fn attendance_rows(&self) -> Option<&[Self::Row]>;

    /// Whether an element with the given id exists on the page.
    fn has_container(&self, id: &str) -> bool;
}
