pub mod messages;
pub mod preview;
