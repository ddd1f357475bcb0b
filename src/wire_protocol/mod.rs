//! Legacy wire protocol framing for write messages.
pub mod flags;
pub mod header;
pub mod operations;
