//! Per-job load and save options.
//!
//! These are the two value bundles the front end fills in and hands to the
//! merge pipeline: `LoadOptions` describes how a bracketed exposure sequence
//! is ingested, `SaveOptions` describes how the merged result is written out.
//!
//! Both are plain aggregates. Default construction always succeeds and yields
//! the documented defaults; no field combination is rejected here. Validation
//! of a populated bundle belongs to the consumer side (see `crate::jobs`).

mod load;
mod save;

pub use load::LoadOptions;
pub use save::SaveOptions;
