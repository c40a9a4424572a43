//! Output module - Where the combined document goes
//!
//! Provides:
//! - writer: writes the document to a fixed file in the temp directory
//! - launcher: opens that file with the host's default handler

pub mod launcher;
pub mod writer;
