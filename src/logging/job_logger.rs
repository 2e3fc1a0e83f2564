//! Per-job file logger.
//!
//! Each merge job writes to its own log file under the configured logs
//! folder. In compact mode progress lines are collapsed to one per
//! `progress_step` percent.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use parking_lot::Mutex;

use super::types::{LogConfig, LogLevel};

/// Per-job logger writing to a dedicated file.
pub struct JobLogger {
    /// Job name, used in the log filename.
    job_name: String,
    /// Path to the log file.
    log_path: PathBuf,
    /// Buffered file writer.
    writer: Mutex<BufWriter<File>>,
    /// Logging configuration.
    config: LogConfig,
    /// Last progress bucket written (compact mode).
    last_progress_bucket: Mutex<Option<u32>>,
}

impl JobLogger {
    /// Create a logger for `job_name`, writing under `log_dir`.
    ///
    /// The directory is created if missing; an existing log file for the
    /// same job name is truncated.
    pub fn new(
        job_name: impl Into<String>,
        log_dir: impl AsRef<Path>,
        config: LogConfig,
    ) -> io::Result<Self> {
        let job_name = job_name.into();
        let log_dir = log_dir.as_ref();
        fs::create_dir_all(log_dir)?;

        let log_path = log_dir.join(format!("{}.log", sanitize_filename(&job_name)));
        let file = File::create(&log_path)?;

        Ok(Self {
            job_name,
            log_path,
            writer: Mutex::new(BufWriter::new(file)),
            config,
            last_progress_bucket: Mutex::new(None),
        })
    }

    /// Get the job name.
    pub fn job_name(&self) -> &str {
        &self.job_name
    }

    /// Get the log file path.
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }

    /// Log a message at the specified level.
    pub fn log(&self, level: LogLevel, message: &str) {
        if level < self.config.level {
            return;
        }
        self.write_line(message);
    }

    /// Log an info message.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Log a debug message.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Log a warning.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, &format!("[WARNING] {}", message));
    }

    /// Log an error.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, &format!("[ERROR] {}", message));
    }

    /// Mark the start of a pipeline phase (load, align, merge, save).
    pub fn phase(&self, name: &str) {
        self.log(LogLevel::Info, &format!("=== {} ===", name));
    }

    /// Log job completion.
    pub fn success(&self, message: &str) {
        self.log(LogLevel::Info, &format!("[SUCCESS] {}", message));
    }

    /// Log a progress percentage.
    ///
    /// In compact mode only one line per `progress_step` bucket is written;
    /// 100% is always written.
    pub fn progress(&self, percent: u32) {
        if self.config.compact {
            let step = self.config.progress_step.max(1);
            let bucket = percent / step;
            let mut last = self.last_progress_bucket.lock();
            if *last == Some(bucket) && percent != 100 {
                return;
            }
            *last = Some(bucket);
        }
        self.log(LogLevel::Info, &format!("Progress: {}%", percent));
    }

    /// Flush buffered output to disk.
    pub fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }

    fn write_line(&self, message: &str) {
        let line = if self.config.show_timestamps {
            format!("[{}] {}\n", Local::now().format("%H:%M:%S%.3f"), message)
        } else {
            format!("{}\n", message)
        };

        let mut writer = self.writer.lock();
        if let Err(err) = writer.write_all(line.as_bytes()) {
            tracing::warn!("Failed to write job log line: {}", err);
        }
    }
}

impl Drop for JobLogger {
    fn drop(&mut self) {
        let _ = self.writer.lock().flush();
    }
}

/// Replace characters unsafe for filenames.
fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '_'
            }
        })
        .collect()
}
