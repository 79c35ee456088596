//! Project × date pivot of time entries.
//!
//! Rows are projects (first-seen order) plus a trailing `total` row,
//! columns are the distinct work dates in calendar order.

mod aggregate;
mod axis;
mod table;

pub use aggregate::pivot;
pub use axis::DateAxis;
pub use table::{PROJECT_ESCAPE, PivotTable, ProjectRow, RowKey, TOTAL_LABEL};
