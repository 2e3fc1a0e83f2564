//! Consumer-side handling of option bundles.
//!
//! The options types in `crate::options` are deliberately dumb; this module
//! is where the pipeline-facing rules live:
//! - `validate_load` / `validate_save`: reject bundles the data model can
//!   represent but the pipeline must not accept
//! - `group_exposures`: split a timestamped exposure sequence into per-job
//!   bundles when batch mode is on

mod batching;
mod validation;

pub use batching::{group_exposures, ExposureFile};
pub use validation::{validate_load, validate_save, OptionsError};
