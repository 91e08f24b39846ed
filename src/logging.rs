use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

use chrono::Utc;
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Log sink that appends to a plain-text file named after the current date
/// (`<dir>/YYYY-MM-DD.log`), so each day's diagnostics land in their own file.
///
/// Sink failures are swallowed; logging must never fail the request path.
pub struct DateStampedLogFile {
    dir: PathBuf,
    level: LevelFilter,
}

impl DateStampedLogFile {
    pub fn new(dir: impl Into<PathBuf>, level: LevelFilter) -> Self {
        Self { dir: dir.into(), level }
    }

    /// Installs the sink as the global logger. Call once, early in program startup.
    pub fn init(dir: impl Into<PathBuf>, level: LevelFilter) -> Result<(), SetLoggerError> {
        log::set_boxed_logger(Box::new(Self::new(dir, level))).map(|()| log::set_max_level(level))
    }

    fn current_file(&self) -> PathBuf {
        self.dir.join(format!("{}.log", Utc::now().format("%Y-%m-%d")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl Log for DateStampedLogFile {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = OpenOptions::new().append(true).create(true).open(self.current_file()) {
            let _ = writeln!(
                file,
                "{}  {:<5} {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}
