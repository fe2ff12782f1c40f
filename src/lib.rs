//! HUD text and console logging helpers for game plugins.

pub mod config;
pub mod error;
pub mod formatter;
pub mod hud;
pub mod logger;
pub mod native;

pub use config::HudConfig;
pub use error::{ConfigError, SplitError};
pub use formatter::{split_str, split_utf16, utf8_chunks, utf8_len_utf16};
pub use hud::{Hud, NotificationHeader};
pub use logger::{LogType, Logger, LIB_NAME};
pub use native::{NativeCall, NativeHost, RecordingHost};
