//! Batch grouping of exposure sequences.
//!
//! In batch mode one run covers several independent merge jobs: the input
//! sequence is split wherever the gap between consecutive files exceeds
//! `batch_gap`. The gap is measured on a caller-supplied per-file metric,
//! typically the capture timestamp in seconds; this module never reads file
//! metadata itself.

use std::path::PathBuf;

use crate::options::LoadOptions;

/// One input exposure with the metric used for grouping.
#[derive(Debug, Clone, PartialEq)]
pub struct ExposureFile {
    /// Path to the exposure file.
    pub path: PathBuf,
    /// Grouping metric, e.g. capture time in seconds.
    pub timestamp: f64,
}

impl ExposureFile {
    /// Create an exposure entry.
    pub fn new(path: impl Into<PathBuf>, timestamp: f64) -> Self {
        Self {
            path: path.into(),
            timestamp,
        }
    }
}

/// Split exposures into per-job load bundles.
///
/// Outside batch mode this yields a single job with every file, in input
/// order, and `batch_gap` plays no part. In batch mode the files are sorted
/// by timestamp and split wherever consecutive timestamps differ by more
/// than `batch_gap`.
///
/// Each returned bundle derives `align` and `crop` from `opts` and describes
/// exactly one merge job, so `batch` is false on all of them.
pub fn group_exposures(opts: &LoadOptions, files: &[ExposureFile]) -> Vec<LoadOptions> {
    if files.is_empty() {
        return Vec::new();
    }

    let job_for = |paths: Vec<PathBuf>| LoadOptions {
        file_names: paths,
        align: opts.align,
        crop: opts.crop,
        batch: false,
        batch_gap: opts.batch_gap,
    };

    if !opts.batch {
        return vec![job_for(files.iter().map(|f| f.path.clone()).collect())];
    }

    let mut sorted: Vec<&ExposureFile> = files.iter().collect();
    sorted.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));

    let mut jobs = Vec::new();
    let mut current: Vec<PathBuf> = Vec::new();
    let mut last_timestamp = f64::NEG_INFINITY;

    for file in sorted {
        if !current.is_empty() && file.timestamp - last_timestamp > opts.batch_gap {
            jobs.push(job_for(std::mem::take(&mut current)));
        }
        current.push(file.path.clone());
        last_timestamp = file.timestamp;
    }
    jobs.push(job_for(current));

    tracing::info!(
        "Grouped {} exposures into {} jobs (gap {})",
        files.len(),
        jobs.len(),
        opts.batch_gap
    );

    jobs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn files() -> Vec<ExposureFile> {
        vec![
            ExposureFile::new("a0.dng", 0.0),
            ExposureFile::new("a1.dng", 1.0),
            ExposureFile::new("a2.dng", 2.0),
            ExposureFile::new("b0.dng", 10.0),
            ExposureFile::new("b1.dng", 11.0),
        ]
    }

    #[test]
    fn non_batch_yields_one_job_regardless_of_gap() {
        for gap in [-5.0, 0.0, 0.001, 1e9] {
            let mut opts = LoadOptions::default();
            opts.batch_gap = gap;
            let jobs = group_exposures(&opts, &files());
            assert_eq!(jobs.len(), 1);
            assert_eq!(jobs[0].file_names.len(), 5);
        }
    }

    #[test]
    fn batch_splits_on_gap() {
        let opts = LoadOptions::default().with_batch_gap(2.0);
        let jobs = group_exposures(&opts, &files());
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].file_names.len(), 3);
        assert_eq!(jobs[1].file_names.len(), 2);
        assert_eq!(jobs[1].file_names[0], PathBuf::from("b0.dng"));
    }

    #[test]
    fn derived_jobs_inherit_align_and_crop() {
        let opts = LoadOptions::default()
            .with_align(false)
            .with_crop(false)
            .with_batch_gap(2.0);
        let jobs = group_exposures(&opts, &files());
        assert!(jobs.iter().all(|j| !j.align && !j.crop && !j.batch));
    }

    #[test]
    fn batch_sorts_by_timestamp_before_splitting() {
        let shuffled = vec![
            ExposureFile::new("b0.dng", 10.0),
            ExposureFile::new("a1.dng", 1.0),
            ExposureFile::new("a0.dng", 0.0),
        ];
        let opts = LoadOptions::default().with_batch_gap(2.0);
        let jobs = group_exposures(&opts, &shuffled);
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].file_names, vec![PathBuf::from("a0.dng"), "a1.dng".into()]);
        assert_eq!(jobs[1].file_names, vec![PathBuf::from("b0.dng")]);
    }

    #[test]
    fn gap_exactly_at_threshold_stays_grouped() {
        let pair = vec![
            ExposureFile::new("x.dng", 0.0),
            ExposureFile::new("y.dng", 2.0),
        ];
        let opts = LoadOptions::default().with_batch_gap(2.0);
        let jobs = group_exposures(&opts, &pair);
        assert_eq!(jobs.len(), 1);
    }

    #[test]
    fn empty_input_yields_no_jobs() {
        let opts = LoadOptions::default();
        assert!(group_exposures(&opts, &[]).is_empty());
    }
}
