//! Logging Module
//!
//! Sets up `tracing` for the application:
//! - JSON file log in the app data directory (daily rolling)
//! - Optional human-readable stderr output (off in TUI mode)
//! - `log` crate records bridged into `tracing`
//! - Old rolled log files gzip-compressed in the background

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "apothecary.log";

// ============================================================================
// Paths
// ============================================================================

/// Directory holding log files.
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("apothecary").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

fn ensure_log_dir() -> PathBuf {
    let dir = log_dir();
    if !dir.exists() {
        if let Err(e) = fs::create_dir_all(&dir) {
            eprintln!("Failed to create logs directory: {}", e);
        }
    }
    dir
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

// ============================================================================
// Initialization
// ============================================================================

/// Initialize logging with a file layer and a stderr layer.
///
/// Returns a `WorkerGuard` that must be kept alive for the lifetime of the
/// program so buffered log lines are flushed on shutdown.
pub fn init() -> WorkerGuard {
    init_with_stderr(true)
}

/// Initialize logging for TUI mode.
///
/// Identical to [`init()`] but without the stderr layer, which would corrupt
/// the terminal while ratatui owns it.
pub fn init_tui() -> WorkerGuard {
    init_with_stderr(false)
}

fn init_with_stderr(stderr: bool) -> WorkerGuard {
    let dir = ensure_log_dir();

    let file_appender = tracing_appender::rolling::daily(&dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .json()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_filter(env_filter());

    let stderr_layer = stderr.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(io::stderr)
            .compact()
            .with_filter(env_filter())
    });

    let registry = tracing_subscriber::registry().with(file_layer).with(stderr_layer);
    if let Err(e) = registry.try_init() {
        eprintln!("Failed to initialize tracing subscriber: {}", e);
    }

    // The fmt subscriber's default features install a LogTracer already;
    // a second init is harmless and reported at debug level only.
    if let Err(e) = tracing_log::LogTracer::init() {
        tracing::debug!("LogTracer already installed: {}", e);
    }

    let dir_clone = dir.clone();
    std::thread::spawn(move || {
        compress_old_logs(&dir_clone);
    });

    tracing::info!(
        path = %dir.join(LOG_FILE_NAME).display(),
        "Logging initialized (daily rolling)"
    );

    guard
}

// ============================================================================
// Log Compression
// ============================================================================

/// Whether a file in the log directory is a rolled log ready to compress.
fn should_compress(file_name: &str, today_suffix: &str) -> bool {
    file_name.starts_with(&format!("{LOG_FILE_NAME}."))
        && !file_name.ends_with(today_suffix)
        && !file_name.ends_with(".gz")
}

/// Compress every rolled log file except today's.
pub fn compress_old_logs(log_dir: &Path) {
    let today_suffix = chrono::Local::now().format("%Y-%m-%d").to_string();

    let Ok(entries) = fs::read_dir(log_dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !should_compress(name, &today_suffix) {
            continue;
        }
        match compress_file(&path) {
            Ok(()) => log::info!("Compressed old log: {:?}", path),
            Err(e) => log::warn!("Failed to compress old log {:?}: {}", path, e),
        }
    }
}

fn compress_file(path: &Path) -> io::Result<()> {
    let file = fs::File::open(path)?;
    let mut reader = io::BufReader::new(file);

    let mut gz_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No filename"))?
        .to_os_string();
    gz_name.push(".gz");
    let gz_path = path
        .parent()
        .ok_or_else(|| io::Error::new(io::ErrorKind::Other, "No parent directory"))?
        .join(gz_name);

    if gz_path.exists() {
        return Ok(());
    }

    let output = fs::File::create(&gz_path)?;
    let mut encoder = GzEncoder::new(output, Compression::default());
    io::copy(&mut reader, &mut encoder)?;
    encoder.finish()?;

    fs::remove_file(path)?;
    Ok(())
}
