pub mod download;
pub mod export;

pub use download::DownloadLogic;
pub use export::{EntrySource, ExportLogic};
