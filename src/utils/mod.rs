//! Shared helpers: text encoding and filesystem locations

pub mod encoding;
pub mod path;
