//! The host's native function table, as seen by the HUD and logger.

use std::fmt;

/// Natives the helpers call into. The host environment supplies the
/// implementation; every method is a blocking call into the game.
pub trait NativeHost {
    fn begin_text_command_print(&mut self, label: &str);
    fn end_text_command_print(&mut self, duration_ms: u32, immediately: bool);

    fn begin_text_command_display_help(&mut self, label: &str);
    fn end_text_command_display_help(&mut self, shape: u32, looped: bool, beep: bool, duration_ms: u32);

    fn begin_text_command_feed_post(&mut self, label: &str);
    fn end_text_command_feed_post_message_text(
        &mut self,
        texture_dict: &str,
        texture_name: &str,
        flash: bool,
        icon_type: u32,
        title: &str,
        subtitle: &str,
    );
    fn end_text_command_feed_post_ticker(&mut self, important: bool, cache_message: bool);

    fn add_text_component_substring_player_name(&mut self, text: &str);

    fn console_print(&mut self, line: &str);
}

impl<H: NativeHost + ?Sized> NativeHost for &mut H {
    fn begin_text_command_print(&mut self, label: &str) {
        (**self).begin_text_command_print(label)
    }

    fn end_text_command_print(&mut self, duration_ms: u32, immediately: bool) {
        (**self).end_text_command_print(duration_ms, immediately)
    }

    fn begin_text_command_display_help(&mut self, label: &str) {
        (**self).begin_text_command_display_help(label)
    }

    fn end_text_command_display_help(&mut self, shape: u32, looped: bool, beep: bool, duration_ms: u32) {
        (**self).end_text_command_display_help(shape, looped, beep, duration_ms)
    }

    fn begin_text_command_feed_post(&mut self, label: &str) {
        (**self).begin_text_command_feed_post(label)
    }

    fn end_text_command_feed_post_message_text(
        &mut self,
        texture_dict: &str,
        texture_name: &str,
        flash: bool,
        icon_type: u32,
        title: &str,
        subtitle: &str,
    ) {
        (**self).end_text_command_feed_post_message_text(texture_dict, texture_name, flash, icon_type, title, subtitle)
    }

    fn end_text_command_feed_post_ticker(&mut self, important: bool, cache_message: bool) {
        (**self).end_text_command_feed_post_ticker(important, cache_message)
    }

    fn add_text_component_substring_player_name(&mut self, text: &str) {
        (**self).add_text_component_substring_player_name(text)
    }

    fn console_print(&mut self, line: &str) {
        (**self).console_print(line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeCall {
    BeginPrint(String),
    EndPrint { duration_ms: u32, immediately: bool },
    BeginHelp(String),
    EndHelp { shape: u32, looped: bool, beep: bool, duration_ms: u32 },
    BeginFeedPost(String),
    EndFeedPostMessageText {
        texture_dict: String,
        texture_name: String,
        flash: bool,
        icon_type: u32,
        title: String,
        subtitle: String,
    },
    EndFeedPostTicker { important: bool, cache_message: bool },
    AddTextComponent(String),
    ConsolePrint(String),
}

impl fmt::Display for NativeCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NativeCall::BeginPrint(label) => write!(f, "BEGIN_TEXT_COMMAND_PRINT({:?})", label),
            NativeCall::EndPrint { duration_ms, immediately } => {
                write!(f, "END_TEXT_COMMAND_PRINT({}, {})", duration_ms, immediately)
            }
            NativeCall::BeginHelp(label) => write!(f, "BEGIN_TEXT_COMMAND_DISPLAY_HELP({:?})", label),
            NativeCall::EndHelp { shape, looped, beep, duration_ms } => write!(
                f,
                "END_TEXT_COMMAND_DISPLAY_HELP({}, {}, {}, {})",
                shape, looped, beep, duration_ms
            ),
            NativeCall::BeginFeedPost(label) => write!(f, "BEGIN_TEXT_COMMAND_THEFEED_POST({:?})", label),
            NativeCall::EndFeedPostMessageText {
                texture_dict,
                texture_name,
                flash,
                icon_type,
                title,
                subtitle,
            } => write!(
                f,
                "END_TEXT_COMMAND_THEFEED_POST_MESSAGETEXT({:?}, {:?}, {}, {}, {:?}, {:?})",
                texture_dict, texture_name, flash, icon_type, title, subtitle
            ),
            NativeCall::EndFeedPostTicker { important, cache_message } => write!(
                f,
                "END_TEXT_COMMAND_THEFEED_POST_TICKER({}, {})",
                important, cache_message
            ),
            NativeCall::AddTextComponent(text) => {
                write!(f, "ADD_TEXT_COMPONENT_SUBSTRING_PLAYER_NAME({:?})", text)
            }
            NativeCall::ConsolePrint(line) => write!(f, "CONSOLE_PRINT({:?})", line),
        }
    }
}

/// In-memory host that records every native call in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub calls: Vec<NativeCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text of every pushed component, in push order.
    pub fn components(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                NativeCall::AddTextComponent(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn console_lines(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                NativeCall::ConsolePrint(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl NativeHost for RecordingHost {
    fn begin_text_command_print(&mut self, label: &str) {
        self.calls.push(NativeCall::BeginPrint(label.to_string()));
    }

    fn end_text_command_print(&mut self, duration_ms: u32, immediately: bool) {
        self.calls.push(NativeCall::EndPrint { duration_ms, immediately });
    }

    fn begin_text_command_display_help(&mut self, label: &str) {
        self.calls.push(NativeCall::BeginHelp(label.to_string()));
    }

    fn end_text_command_display_help(&mut self, shape: u32, looped: bool, beep: bool, duration_ms: u32) {
        self.calls.push(NativeCall::EndHelp { shape, looped, beep, duration_ms });
    }

    fn begin_text_command_feed_post(&mut self, label: &str) {
        self.calls.push(NativeCall::BeginFeedPost(label.to_string()));
    }

    fn end_text_command_feed_post_message_text(
        &mut self,
        texture_dict: &str,
        texture_name: &str,
        flash: bool,
        icon_type: u32,
        title: &str,
        subtitle: &str,
    ) {
        self.calls.push(NativeCall::EndFeedPostMessageText {
            texture_dict: texture_dict.to_string(),
            texture_name: texture_name.to_string(),
            flash,
            icon_type,
            title: title.to_string(),
            subtitle: subtitle.to_string(),
        });
    }

    fn end_text_command_feed_post_ticker(&mut self, important: bool, cache_message: bool) {
        self.calls.push(NativeCall::EndFeedPostTicker { important, cache_message });
    }

    fn add_text_component_substring_player_name(&mut self, text: &str) {
        self.calls.push(NativeCall::AddTextComponent(text.to_string()));
    }

    fn console_print(&mut self, line: &str) {
        self.calls.push(NativeCall::ConsolePrint(line.to_string()));
    }
}
