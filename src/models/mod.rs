pub mod report_request;
pub mod time_entry;

pub use report_request::ReportRequest;
pub use time_entry::TimeEntry;
