//! Options for loading a bracketed exposure sequence.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How a batch of input exposure files should be ingested for merging.
///
/// `file_names` carries the exposures in the order the pipeline should
/// consider them; the order may be significant for EV ordering. Once a bundle
/// is handed to the pipeline it is treated as read-only input for that job,
/// so clone one per job before mutating.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Paths to the bracketed exposure files, in consideration order.
    #[serde(default)]
    pub file_names: Vec<PathBuf>,

    /// Geometrically align exposures before merging.
    #[serde(default = "default_true")]
    pub align: bool,

    /// Crop the merged result to the common overlapping region.
    #[serde(default = "default_true")]
    pub crop: bool,

    /// Treat the input as multiple independent merge jobs.
    #[serde(default)]
    pub batch: bool,

    /// Maximum gap between consecutive files grouped into the same job.
    ///
    /// Opaque threshold, compared against whatever per-file metric the
    /// grouping consumer uses (capture time in seconds, typically). Only
    /// meaningful when `batch` is true; consumers ignore it otherwise.
    #[serde(default = "default_batch_gap")]
    pub batch_gap: f64,
}

fn default_true() -> bool {
    true
}

fn default_batch_gap() -> f64 {
    2.0
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            file_names: Vec::new(),
            align: true,
            crop: true,
            batch: false,
            batch_gap: default_batch_gap(),
        }
    }
}

impl LoadOptions {
    /// Create default options for the given input files.
    pub fn for_files(file_names: Vec<PathBuf>) -> Self {
        Self {
            file_names,
            ..Self::default()
        }
    }

    /// Set alignment.
    pub fn with_align(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    /// Set cropping.
    pub fn with_crop(mut self, crop: bool) -> Self {
        self.crop = crop;
        self
    }

    /// Enable batch mode with the given grouping gap.
    pub fn with_batch_gap(mut self, batch_gap: f64) -> Self {
        self.batch = true;
        self.batch_gap = batch_gap;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let opts = LoadOptions::default();
        assert!(opts.file_names.is_empty());
        assert!(opts.align);
        assert!(opts.crop);
        assert!(!opts.batch);
        assert_eq!(opts.batch_gap, 2.0);
    }

    #[test]
    fn file_names_preserve_insertion_order() {
        let mut opts = LoadOptions::default();
        opts.file_names.push("a.dng".into());
        opts.file_names.push("b.dng".into());
        opts.file_names.push("c.dng".into());
        assert_eq!(opts.file_names.len(), 3);
        assert_eq!(opts.file_names[0], PathBuf::from("a.dng"));
        assert_eq!(opts.file_names[2], PathBuf::from("c.dng"));
    }

    #[test]
    fn fields_are_plain_values() {
        let mut opts = LoadOptions::default();
        opts.align = false;
        opts.batch = true;
        opts.batch_gap = 0.5;
        assert!(!opts.align);
        assert!(opts.batch);
        assert_eq!(opts.batch_gap, 0.5);

        let copy = opts.clone();
        assert_eq!(copy, opts);
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let opts: LoadOptions = toml::from_str("batch = true").unwrap();
        assert!(opts.batch);
        assert!(opts.align);
        assert!(opts.crop);
        assert_eq!(opts.batch_gap, 2.0);
        assert!(opts.file_names.is_empty());
    }

    #[test]
    fn builder_for_files_keeps_defaults() {
        let opts = LoadOptions::for_files(vec!["x.dng".into()]).with_align(false);
        assert_eq!(opts.file_names.len(), 1);
        assert!(!opts.align);
        assert!(opts.crop);
    }
}
