//! Rolling file logger with an in-memory circular buffer.
//!
//! Installs a global `tracing` subscriber that writes every event to a
//! size-rotated file and keeps the newest lines in memory for display.
//! `log` records are bridged into the same subscriber.

mod buffer;
mod writer;

use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, OnceLock};

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

pub use buffer::LineBuffer;
pub use writer::RollingFileWriter;

const MAX_FILE_BYTES: u64 = 1024 * 1024;
const MAX_BACKUPS: usize = 3;
const RECENT_CAPACITY: usize = 500;

static RECENT: OnceLock<Mutex<LineBuffer>> = OnceLock::new();
static INITIALIZED: OnceLock<()> = OnceLock::new();

fn recent() -> &'static Mutex<LineBuffer> {
    RECENT.get_or_init(|| Mutex::new(LineBuffer::new(RECENT_CAPACITY)))
}

/// Timestamps in local time, millisecond precision
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Writer factory handed to the fmt layer. Each formatted event goes to the
/// rolling file and its lines are pushed into the recent buffer.
#[derive(Clone)]
struct LogSink {
    file: Arc<Mutex<RollingFileWriter>>,
    #[cfg(target_os = "android")]
    logcat: Arc<android_logger::AndroidLogger>,
}

struct SinkWriter<'a> {
    sink: &'a LogSink,
}

impl<'a> MakeWriter<'a> for LogSink {
    type Writer = SinkWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        SinkWriter { sink: self }
    }
}

impl Write for SinkWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        if let Ok(mut lines) = recent().lock() {
            for line in text.lines() {
                lines.push(line);
            }
        }

        #[cfg(target_os = "android")]
        {
            use log::Log;
            for line in text.lines().filter(|l| !l.trim().is_empty()) {
                self.sink.logcat.log(
                    &log::Record::builder()
                        .level(log::Level::Info)
                        .args(format_args!("{}", line))
                        .build(),
                );
            }
        }

        let mut file = self
            .sink
            .file
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))?;
        file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.sink.file.lock() {
            Ok(mut file) => file.flush(),
            Err(_) => Ok(()),
        }
    }
}

/// Initialize the global logger, writing to `<log_dir>/<app_name>.log`.
///
/// Calling it again after a successful init is a no-op.
pub fn init_logger(log_dir: PathBuf, app_name: &str) -> Result<(), String> {
    if INITIALIZED.get().is_some() {
        return Ok(());
    }

    let file = RollingFileWriter::open(&log_dir, app_name, MAX_FILE_BYTES, MAX_BACKUPS)
        .map_err(|e| format!("Failed to open log file in {}: {}", log_dir.display(), e))?;

    let sink = LogSink {
        file: Arc::new(Mutex::new(file)),
        #[cfg(target_os = "android")]
        logcat: Arc::new(android_logger::AndroidLogger::new(
            android_logger::Config::default()
                .with_max_level(log::LevelFilter::Info)
                .with_tag(app_name),
        )),
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_timer(LocalTime)
        .with_target(true)
        .with_writer(sink)
        .with_filter(LevelFilter::INFO);

    let registry = tracing_subscriber::registry().with(file_layer);

    #[cfg(not(target_os = "android"))]
    let registry = registry.with(
        tracing_subscriber::fmt::layer()
            .with_timer(LocalTime)
            .with_writer(io::stderr)
            .with_filter(if cfg!(debug_assertions) {
                LevelFilter::DEBUG
            } else {
                LevelFilter::WARN
            }),
    );

    registry
        .try_init()
        .map_err(|e| format!("Failed to install logger: {}", e))?;

    let _ = INITIALIZED.set(());
    tracing::info!(app = app_name, dir = %log_dir.display(), "Logger initialized");
    Ok(())
}

fn ensure_initialized() -> Result<(), String> {
    if INITIALIZED.get().is_some() {
        Ok(())
    } else {
        Err("Logger not initialized".to_string())
    }
}

pub fn info(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::info!("{}", message);
    Ok(())
}

pub fn error(message: &str) -> Result<(), String> {
    ensure_initialized()?;
    tracing::error!("{}", message);
    Ok(())
}

/// Most recent log lines, oldest first
pub fn recent_lines() -> Vec<String> {
    recent().lock().map(|lines| lines.snapshot()).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test touches the global subscriber; it can only be installed once per process.
    #[test]
    fn test_init_routes_tracing_and_log_to_file_and_buffer() {
        let dir = tempfile::tempdir().unwrap();
        assert!(info("before init").is_err());

        init_logger(dir.path().to_path_buf(), "Test").unwrap();
        init_logger(dir.path().to_path_buf(), "Test").unwrap();

        info("hello from tracing").unwrap();
        log::warn!("hello from log");

        let lines = recent_lines();
        assert!(lines.iter().any(|l| l.contains("hello from tracing")));
        assert!(lines.iter().any(|l| l.contains("hello from log")));

        let contents = std::fs::read_to_string(dir.path().join("Test.log")).unwrap();
        assert!(contents.contains("hello from tracing"));
        assert!(contents.contains("INFO"));
    }
}
