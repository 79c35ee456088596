pub mod date;
pub mod formatting;
pub mod path;

pub use date::parse_work_date;
pub use formatting::format_hours;
