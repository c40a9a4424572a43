//! Core module - Building blocks of the concatenation pipeline
//!
//! This module provides:
//! - Invocation options (`-exclude=`, `-max=`)
//! - Path utilities and pattern resolution
//! - The exclusion filter
//! - Bounded line reading
//! - Document rendering
//! - The error taxonomy shared by all phases

pub mod error;
pub mod file_reader;
pub mod filter;
pub mod options;
pub mod paths;
pub mod render;
pub mod resolve;
