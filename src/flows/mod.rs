//! Flows module - End-to-end operations
//!
//! Provides:
//! - concat: resolve patterns, read files, write the combined document and open it

pub mod concat;
