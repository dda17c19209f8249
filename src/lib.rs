pub mod fetch;
pub mod grading;
pub mod output;
pub mod records;
pub mod report;
