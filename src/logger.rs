//! Per-plugin console logger.
//!
//! Every line is printed to the host console as `"{plugin}: [{type}] {text}"`
//! and mirrored to the `log` facade.

use std::fmt;

use log::Level;

use crate::native::NativeHost;

pub const LIB_NAME: &str = "BaseLib";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogType {
    Info,
    Warn,
    Error,
}

impl LogType {
    fn level(self) -> Level {
        match self {
            LogType::Info => Level::Info,
            LogType::Warn => Level::Warn,
            LogType::Error => Level::Error,
        }
    }
}

impl fmt::Display for LogType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogType::Info => "Info",
            LogType::Warn => "Warn",
            LogType::Error => "Error",
        };
        f.write_str(name)
    }
}

/// One per plugin; prefixes each line with the plugin's name.
pub struct Logger<H: NativeHost> {
    plugin_name: String,
    host: H,
}

impl<H: NativeHost> Logger<H> {
    pub fn new(plugin_name: impl Into<String>, host: H) -> Self {
        let mut logger = Self {
            plugin_name: plugin_name.into(),
            host,
        };
        let line = format!("Logger was initialized by {}", logger.plugin_name);
        logger.log(&line, LogType::Info, "", LIB_NAME);
        logger
    }

    pub fn plugin_name(&self) -> &str {
        &self.plugin_name
    }

    pub fn info(&mut self, text: &str) {
        self.log(text, LogType::Info, "", "");
    }

    pub fn warn(&mut self, text: &str) {
        self.log(text, LogType::Warn, "", "");
    }

    pub fn error(&mut self, text: &str) {
        self.log(text, LogType::Error, "", "");
    }

    /// Empty `tag` or `plugin_name` fall back to the untagged form and the
    /// logger's own plugin name.
    pub fn info_tagged(&mut self, text: &str, tag: &str, plugin_name: &str) {
        self.log(text, LogType::Info, tag, plugin_name);
    }

    pub fn warn_tagged(&mut self, text: &str, tag: &str, plugin_name: &str) {
        self.log(text, LogType::Warn, tag, plugin_name);
    }

    pub fn error_tagged(&mut self, text: &str, tag: &str, plugin_name: &str) {
        self.log(text, LogType::Error, tag, plugin_name);
    }

    pub fn into_host(self) -> H {
        self.host
    }

    fn log(&mut self, text: &str, kind: LogType, tag: &str, plugin_name: &str) {
        let line = format_line(
            if plugin_name.is_empty() { self.plugin_name.as_str() } else { plugin_name },
            kind,
            tag,
            text,
        );
        log::log!(target: "baselib", kind.level(), "{}", line);
        self.host.console_print(&line);
    }
}

fn format_line(plugin_name: &str, kind: LogType, tag: &str, text: &str) -> String {
    if tag.is_empty() {
        format!("{}: [{}] {}", plugin_name, kind, text)
    } else {
        format!("{}: [{} - {}] {}", plugin_name, kind, tag, text)
    }
}
