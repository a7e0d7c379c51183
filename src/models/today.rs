use serde::Serialize;

/// The (month, day) a run is evaluated against.
/// There is no year: attendance books never span more than one month view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Today {
    pub month: u32,
    pub day: u32,
}

impl Today {
    pub fn new(month: u32, day: u32) -> Self {
        Self { month, day }
    }

    /// Month-then-day comparison, same year assumed.
    pub fn is_after(&self, month: u32, day: u32) -> bool {
        month < self.month || (month == self.month && day < self.day)
    }
}
