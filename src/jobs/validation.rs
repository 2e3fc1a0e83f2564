//! Validation of option bundles before a job is submitted.
//!
//! The data types themselves accept anything; these checks are the
//! pipeline's gate. A front end should run them after gathering input and
//! report the error to the user instead of submitting the job.

use thiserror::Error;

use crate::options::{LoadOptions, SaveOptions};

/// Errors for option bundles the pipeline must not accept.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionsError {
    #[error("No input files were given")]
    NoInputFiles,

    #[error("Batch gap must be a positive number, got {0}")]
    InvalidBatchGap(f64),

    #[error("Output bit depth must be positive, got {0}")]
    InvalidBitDepth(i32),

    #[error("Preview size must not be negative, got {0}")]
    NegativePreviewSize(i32),

    #[error("Feather radius must not be negative, got {0}")]
    NegativeFeatherRadius(i32),

    #[error("No output file was given")]
    NoOutputFile,

    #[error("Mask output was requested but no mask file was given")]
    NoMaskFile,
}

/// Check a load bundle for a job submission.
///
/// Requires at least one input file, and a positive finite `batch_gap` when
/// batch mode is on. `batch_gap` is not inspected outside batch mode.
pub fn validate_load(opts: &LoadOptions) -> Result<(), OptionsError> {
    if opts.file_names.is_empty() {
        return Err(OptionsError::NoInputFiles);
    }
    // The comparison is written to also reject NaN.
    if opts.batch && !(opts.batch_gap > 0.0 && opts.batch_gap.is_finite()) {
        return Err(OptionsError::InvalidBatchGap(opts.batch_gap));
    }
    Ok(())
}

/// Check a save bundle for a job submission.
///
/// Requires a destination path, positive bit depth, non-negative preview
/// size and feather radius, and a mask path when mask output is on.
/// `mask_file_name` is not inspected when `save_mask` is off.
pub fn validate_save(opts: &SaveOptions) -> Result<(), OptionsError> {
    if opts.file_name.as_os_str().is_empty() {
        return Err(OptionsError::NoOutputFile);
    }
    if opts.bps <= 0 {
        return Err(OptionsError::InvalidBitDepth(opts.bps));
    }
    if opts.preview_size < 0 {
        return Err(OptionsError::NegativePreviewSize(opts.preview_size));
    }
    if opts.feather_radius < 0 {
        return Err(OptionsError::NegativeFeatherRadius(opts.feather_radius));
    }
    if opts.save_mask && opts.mask_file_name.as_os_str().is_empty() {
        return Err(OptionsError::NoMaskFile);
    }
    Ok(())
}
