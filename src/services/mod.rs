pub mod calculation;
pub mod entry;
pub mod report;
