use crate::domain::model::{ReportFormat, PASS_INFO_ID};
use crate::utils::error::Result;
use chrono::NaiveDate;

/// Source of "today". Only binaries should reach for the system clock.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// The element a rendered pass is written into.
pub trait PassTarget {
    /// Replaces whatever the target currently shows.
    fn replace_contents(&mut self, markup: &str) -> Result<()>;

    fn element_id(&self) -> &str {
        PASS_INFO_ID
    }
}

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait BatchSettings {
    fn input(&self) -> &str;
    fn output_file(&self) -> String;
    fn report_format(&self) -> ReportFormat;
    fn strict(&self) -> bool;
}
