//! A small egui app: three buttons, each fetching a todo from a public test API
//! and showing the raw response (or the error) in a read-only text area.
//!
//! Clicks and key presses in the window are recorded to a timestamped event log.

mod activity;
mod app;
mod event_log;
mod fetch;
mod todo;

pub use activity::{Activity, Element};
pub use app::{TITLE, TodoApp, restore_settings};
pub use event_log::{EVENT_LOG_DIR, EVENT_LOG_FILE_NAME, EventLog, default_path, format_entry};
pub use fetch::{EhttpFetcher, FetchError, Fetcher, HttpReply, OnDone};
pub use todo::{DEFAULT_BASE_URL, Settings, TodoButton, error_text, loading_text};
