//! hdrmerge_core - Backend plumbing for an HDR exposure merging tool
//!
//! This crate contains the configuration contract between a front end
//! (CLI or GUI) and the merge pipeline, with zero UI dependencies:
//! job-level load/save options, batch grouping, persisted preferences,
//! and logging.

pub mod config;
pub mod jobs;
pub mod logging;
pub mod options;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
