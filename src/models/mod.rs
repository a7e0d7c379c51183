pub mod daily_record;
pub mod placement;
pub mod policy;
pub mod summary;
pub mod today;
