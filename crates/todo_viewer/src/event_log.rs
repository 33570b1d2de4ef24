//! An append-only, timestamped log of what happened in the window.

use std::{
    fs::OpenOptions,
    io::Write,
    path::{Path, PathBuf},
};

/// Directory (under the local data dir) that holds the event log.
pub const EVENT_LOG_DIR: &str = "WindowsWatcher";

pub const EVENT_LOG_FILE_NAME: &str = "windows_watcher.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// `[2024-05-06 07:08:09.010] message`
pub fn format_entry(time: chrono::NaiveDateTime, message: &str) -> String {
    format!("[{}] {message}", time.format(TIMESTAMP_FORMAT))
}

/// Where the event log lives unless told otherwise.
///
/// Falls back to the working directory if the OS has no local data dir.
pub fn default_path() -> PathBuf {
    let data_dir = directories::BaseDirs::new()
        .map(|dirs| dirs.data_local_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    data_dir.join(EVENT_LOG_DIR).join(EVENT_LOG_FILE_NAME)
}

/// Every entry goes to the `log` facade, and to a file or writer if one is attached.
pub struct EventLog {
    sink: Option<Box<dyn Write + Send>>,
}

impl EventLog {
    /// Only log through the `log` facade.
    pub fn console_only() -> Self {
        Self { sink: None }
    }

    /// Append to the file at `path`, creating it and its parent directories if needed.
    ///
    /// # Errors
    /// If the directory can't be created or the file can't be opened.
    pub fn open(path: &Path) -> std::io::Result<Self> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        log::debug!("Recording events to {}", path.display());
        Ok(Self::from_writer(file))
    }

    /// Open [`default_path`], falling back to [`Self::console_only`].
    pub fn open_default() -> Self {
        let path = default_path();
        match Self::open(&path) {
            Ok(event_log) => event_log,
            Err(err) => {
                log::warn!(
                    "Event file disabled: failed to open {}: {err}",
                    path.display()
                );
                Self::console_only()
            }
        }
    }

    pub fn from_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            sink: Some(Box::new(writer)),
        }
    }

    /// Record `message`, stamped with the local time.
    pub fn record(&mut self, message: &str) {
        let entry = format_entry(chrono::Local::now().naive_local(), message);
        log::info!("{entry}");

        if let Some(sink) = &mut self.sink {
            let written = writeln!(sink, "{entry}").and_then(|()| sink.flush());
            if let Err(err) = written {
                log::warn!("Event file disabled: failed to write: {err}");
                self.sink = None;
            }
        }
    }
}
