//! Optional file log for the chrome.
//!
//! Lines go to `~/.config/borderless/logs/borderless.log`. A line that
//! would push the file past `max_file_mb` first moves the current file
//! to `borderless.log.1`, replacing any older backup.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, OnceLock};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

static SINK: OnceLock<Mutex<Sink>> = OnceLock::new();

const LOG_FILE_NAME: &str = "borderless.log";
const BYTES_PER_MB: u64 = 1024 * 1024;

/// The `[logging]` config section.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub enabled: bool,
    /// "debug", "info", "warn" or "error". Anything else reads as "info".
    pub level: String,
    /// Size cap for the live file. Zero disables rolling.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    /// Parses a level name; unknown names mean `Info`.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        };
        f.pad(tag)
    }
}

struct Sink {
    min_level: Level,
    out: RollingFile,
}

/// Append-only file that rolls into a single backup at a size cap.
struct RollingFile {
    path: PathBuf,
    file: File,
    len: u64,
    cap: u64,
}

impl RollingFile {
    fn open(path: PathBuf, cap: u64) -> io::Result<Self> {
        let file = open_append(&path)?;
        let len = file.metadata()?.len();
        Ok(Self { path, file, len, cap })
    }

    fn append(&mut self, line: &str) -> io::Result<()> {
        let incoming = line.len() as u64;
        // A line larger than the cap still lands in a fresh file.
        if self.cap > 0 && self.len > 0 && self.len + incoming > self.cap {
            self.roll()?;
        }
        self.file.write_all(line.as_bytes())?;
        self.len += incoming;
        Ok(())
    }

    fn roll(&mut self) -> io::Result<()> {
        fs::rename(&self.path, backup_path(&self.path))?;
        self.file = open_append(&self.path)?;
        self.len = 0;
        Ok(())
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Opens the log file when `config.enabled` is set. Later calls are
/// ignored, as are I/O failures: the chrome runs the same without a log.
pub fn init(config: &LogConfig) {
    if !config.enabled || SINK.get().is_some() {
        return;
    }
    let Some(dir) = crate::config::config_dir().map(|d| d.join("logs")) else {
        return;
    };
    if fs::create_dir_all(&dir).is_err() {
        return;
    }
    let cap = config.max_file_mb.saturating_mul(BYTES_PER_MB);
    if let Ok(out) = RollingFile::open(dir.join(LOG_FILE_NAME), cap) {
        let _ = SINK.set(Mutex::new(Sink {
            min_level: Level::parse(&config.level),
            out,
        }));
    }
}

/// Appends one line when `level` passes the configured filter.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(Ok(mut sink)) = SINK.get().map(Mutex::lock) else {
        return;
    };
    if level < sink.min_level {
        return;
    }
    let since_epoch = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let _ = sink.out.append(&format_line(since_epoch, level, args));
}

fn format_line(since_epoch: Duration, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{} {level:<5} {args}\n", utc_clock(since_epoch))
}

/// Time of day in UTC, millisecond precision.
fn utc_clock(since_epoch: Duration) -> String {
    let day_secs = since_epoch.as_secs() % 86_400;
    format!(
        "{:02}:{:02}:{:02}.{:03}Z",
        day_secs / 3600,
        day_secs / 60 % 60,
        day_secs % 60,
        since_epoch.subsec_millis()
    )
}

/// `borderless.log` -> `borderless.log.1`.
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".1");
    PathBuf::from(name)
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("borderless-log-{}-{name}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn level_parse_is_case_insensitive_and_defaults_to_info() {
        // Assert
        assert_eq!(Level::parse("DEBUG"), Level::Debug);
        assert_eq!(Level::parse("warn"), Level::Warn);
        assert_eq!(Level::parse("Error"), Level::Error);
        assert_eq!(Level::parse("verbose"), Level::Info);
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        // Assert
        assert!(Level::Debug < Level::Info);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn backup_path_appends_suffix() {
        // Act
        let backup = backup_path(Path::new("/tmp/logs/borderless.log"));

        // Assert
        assert_eq!(backup, PathBuf::from("/tmp/logs/borderless.log.1"));
    }

    #[test]
    fn clock_wraps_at_midnight_utc() {
        // Arrange: three days plus 01:02:03.045.
        let since_epoch = Duration::from_millis(3 * 86_400_000 + 3_723_045);

        // Act
        let clock = utc_clock(since_epoch);

        // Assert
        assert_eq!(clock, "01:02:03.045Z");
    }

    #[test]
    fn line_pads_level_to_a_fixed_column() {
        // Act
        let line = format_line(Duration::ZERO, Level::Warn, format_args!("no placement"));

        // Assert
        assert_eq!(line, "00:00:00.000Z WARN  no placement\n");
    }

    #[test]
    fn rolling_file_moves_full_log_to_backup() {
        // Arrange
        let dir = scratch_dir("roll");
        let path = dir.join(LOG_FILE_NAME);
        let mut out = RollingFile::open(path.clone(), 16).unwrap();

        // Act
        out.append("first line\n").unwrap();
        out.append("second line\n").unwrap();

        // Assert
        assert_eq!(fs::read_to_string(backup_path(&path)).unwrap(), "first line\n");
        assert_eq!(fs::read_to_string(&path).unwrap(), "second line\n");
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn zero_cap_never_rolls() {
        // Arrange
        let dir = scratch_dir("uncapped");
        let path = dir.join(LOG_FILE_NAME);
        let mut out = RollingFile::open(path.clone(), 0).unwrap();

        // Act
        out.append("a\n").unwrap();
        out.append("b\n").unwrap();

        // Assert
        assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
        assert!(!backup_path(&path).exists());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn write_without_init_is_a_no_op() {
        // Act / Assert: must not panic.
        write(Level::Error, format_args!("dropped"));
    }
}
