//! Help popups, notifications and subtitles that survive non-ASCII text.
//!
//! Each native text component holds at most `max_component_bytes` of UTF-8,
//! so longer messages are pushed as several components split on code point
//! boundaries.

use log::{debug, trace};

use crate::config::{HudConfig, DEFAULT_TEXTURE};
use crate::error::SplitError;
use crate::formatter::split_str;
use crate::native::NativeHost;

/// Text label whose format string is a plain concatenation of components.
const LONG_TEXT_LABEL: &str = "CELL_EMAIL_BCON";
const SHORT_TEXT_LABEL: &str = "STRING";

/// Title block of a feed notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationHeader {
    pub title: String,
    pub subtitle: String,
    pub texture_dict: String,
    pub texture_name: String,
}

impl NotificationHeader {
    pub fn new(title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: subtitle.into(),
            texture_dict: DEFAULT_TEXTURE.to_string(),
            texture_name: DEFAULT_TEXTURE.to_string(),
        }
    }

    pub fn with_texture(mut self, dict: impl Into<String>, name: impl Into<String>) -> Self {
        self.texture_dict = dict.into();
        self.texture_name = name.into();
        self
    }
}

pub struct Hud<'h, H: NativeHost> {
    host: &'h mut H,
    config: HudConfig,
}

impl<'h, H: NativeHost> Hud<'h, H> {
    pub fn new(host: &'h mut H) -> Self {
        Self::with_config(host, HudConfig::default())
    }

    pub fn with_config(host: &'h mut H, config: HudConfig) -> Self {
        Self { host, config }
    }

    pub fn config(&self) -> &HudConfig {
        &self.config
    }

    pub fn display_notification(
        &mut self,
        text: &str,
        important: bool,
        cache_message: bool,
    ) -> Result<(), SplitError> {
        self.begin_feed_post(text)?;
        self.host.end_text_command_feed_post_ticker(important, cache_message);
        Ok(())
    }

    pub fn display_notification_with_title(
        &mut self,
        text: &str,
        header: &NotificationHeader,
        important: bool,
        cache_message: bool,
    ) -> Result<(), SplitError> {
        self.begin_feed_post(text)?;
        self.host.end_text_command_feed_post_message_text(
            &header.texture_dict,
            &header.texture_name,
            false,
            0,
            &header.title,
            &header.subtitle,
        );
        self.host.end_text_command_feed_post_ticker(important, cache_message);
        Ok(())
    }

    pub fn display_subtitle(&mut self, message: &str) -> Result<(), SplitError> {
        let duration_ms = self.config.subtitle_duration_ms;
        self.display_subtitle_for(message, duration_ms)
    }

    pub fn display_subtitle_for(&mut self, message: &str, duration_ms: u32) -> Result<(), SplitError> {
        self.check_budget()?;
        self.host.begin_text_command_print(LONG_TEXT_LABEL);
        self.push_long_string(message)?;
        self.host.end_text_command_print(duration_ms, true);
        Ok(())
    }

    pub fn display_help(&mut self, message: &str) -> Result<(), SplitError> {
        let duration_ms = self.config.help_duration_ms;
        let sound = self.config.help_sound;
        self.display_help_with(message, duration_ms, sound)
    }

    pub fn display_help_with(&mut self, message: &str, duration_ms: u32, sound: bool) -> Result<(), SplitError> {
        self.check_budget()?;
        self.host.begin_text_command_display_help(LONG_TEXT_LABEL);
        self.push_long_string(message)?;
        self.host.end_text_command_display_help(0, false, sound, duration_ms);
        Ok(())
    }

    /// Pushes `text` as as many components as the byte budget requires.
    pub fn push_long_string(&mut self, text: &str) -> Result<(), SplitError> {
        let host = &mut *self.host;
        let mut pushed = 0usize;
        split_str(text, self.config.max_component_bytes, |chunk| {
            trace!("Pushing component {} ({} bytes)", pushed, chunk.len());
            host.add_text_component_substring_player_name(chunk);
            pushed += 1;
        })?;
        debug!("Pushed {} byte message as {} component(s)", text.len(), pushed);
        Ok(())
    }

    // Fails before the first native call so no text command is left open.
    fn check_budget(&self) -> Result<(), SplitError> {
        if self.config.max_component_bytes == 0 {
            return Err(SplitError::ZeroBudget);
        }
        Ok(())
    }

    // Short messages go out as a single component under the plain label.
    fn begin_feed_post(&mut self, text: &str) -> Result<(), SplitError> {
        self.check_budget()?;
        if text.len() > self.config.max_component_bytes {
            self.host.begin_text_command_feed_post(LONG_TEXT_LABEL);
            self.push_long_string(text)
        } else {
            self.host.begin_text_command_feed_post(SHORT_TEXT_LABEL);
            self.host.add_text_component_substring_player_name(text);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::native::{NativeCall, RecordingHost};

    fn component(text: &str) -> NativeCall {
        NativeCall::AddTextComponent(text.to_string())
    }

    #[test]
    fn test_short_notification_uses_single_component() {
        let mut host = RecordingHost::new();
        Hud::new(&mut host)
            .display_notification("Arrested suspect", false, true)
            .expect("display");

        assert_eq!(
            host.calls,
            vec![
                NativeCall::BeginFeedPost("STRING".to_string()),
                component("Arrested suspect"),
                NativeCall::EndFeedPostTicker { important: false, cache_message: true },
            ]
        );
    }

    #[test]
    fn test_long_notification_is_chunked() {
        let text = "あ".repeat(40); // 120 bytes
        let mut host = RecordingHost::new();
        Hud::new(&mut host)
            .display_notification(&text, true, false)
            .expect("display");

        assert_eq!(host.calls[0], NativeCall::BeginFeedPost("CELL_EMAIL_BCON".to_string()));
        assert_eq!(host.components(), vec!["あ".repeat(33).as_str(), "あ".repeat(7).as_str()]);
        assert_eq!(
            host.calls.last(),
            Some(&NativeCall::EndFeedPostTicker { important: true, cache_message: false })
        );
    }

    #[test]
    fn test_exactly_budget_sized_notification_is_short() {
        let text = "x".repeat(99);
        let mut host = RecordingHost::new();
        Hud::new(&mut host).display_notification(&text, false, true).expect("display");

        assert_eq!(host.calls[0], NativeCall::BeginFeedPost("STRING".to_string()));
        assert_eq!(host.components().len(), 1);
    }

    #[test]
    fn test_titled_notification() {
        let header = NotificationHeader::new("Dispatch", "Code 3");
        let mut host = RecordingHost::new();
        Hud::new(&mut host)
            .display_notification_with_title("Respond to 10-31", &header, false, true)
            .expect("display");

        assert_eq!(
            host.calls,
            vec![
                NativeCall::BeginFeedPost("STRING".to_string()),
                component("Respond to 10-31"),
                NativeCall::EndFeedPostMessageText {
                    texture_dict: "web_lossantospolicedept".to_string(),
                    texture_name: "web_lossantospolicedept".to_string(),
                    flash: false,
                    icon_type: 0,
                    title: "Dispatch".to_string(),
                    subtitle: "Code 3".to_string(),
                },
                NativeCall::EndFeedPostTicker { important: false, cache_message: true },
            ]
        );
    }

    #[test]
    fn test_titled_long_notification_with_custom_texture() {
        let header = NotificationHeader::new("Title", "Sub").with_texture("char_default", "char_default");
        let text = "é".repeat(60); // 120 bytes
        let mut host = RecordingHost::new();
        Hud::new(&mut host)
            .display_notification_with_title(&text, &header, false, true)
            .expect("display");

        assert_eq!(host.calls[0], NativeCall::BeginFeedPost("CELL_EMAIL_BCON".to_string()));
        let components = host.components();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].len(), 98);
        assert_eq!(components.concat(), text);
        assert!(matches!(
            &host.calls[host.calls.len() - 2],
            NativeCall::EndFeedPostMessageText { texture_dict, .. } if texture_dict == "char_default"
        ));
    }

    #[test]
    fn test_subtitle_defaults() {
        let mut host = RecordingHost::new();
        Hud::new(&mut host).display_subtitle("Pull over!").expect("display");

        assert_eq!(
            host.calls,
            vec![
                NativeCall::BeginPrint("CELL_EMAIL_BCON".to_string()),
                component("Pull over!"),
                NativeCall::EndPrint { duration_ms: 2500, immediately: true },
            ]
        );
    }

    #[test]
    fn test_subtitle_keeps_emoji_whole() {
        let text = format!("{}🚓 go", "a".repeat(97));
        let mut host = RecordingHost::new();
        Hud::new(&mut host).display_subtitle_for(&text, 1000).expect("display");

        assert_eq!(host.components(), vec!["a".repeat(97).as_str(), "🚓 go"]);
        assert_eq!(
            host.calls.last(),
            Some(&NativeCall::EndPrint { duration_ms: 1000, immediately: true })
        );
    }

    #[test]
    fn test_help_defaults_and_overrides() {
        let mut host = RecordingHost::new();
        {
            let mut hud = Hud::new(&mut host);
            hud.display_help("Press E").expect("display");
            hud.display_help_with("Press F", 8000, false).expect("display");
        }

        assert_eq!(
            host.calls,
            vec![
                NativeCall::BeginHelp("CELL_EMAIL_BCON".to_string()),
                component("Press E"),
                NativeCall::EndHelp { shape: 0, looped: false, beep: true, duration_ms: 5000 },
                NativeCall::BeginHelp("CELL_EMAIL_BCON".to_string()),
                component("Press F"),
                NativeCall::EndHelp { shape: 0, looped: false, beep: false, duration_ms: 8000 },
            ]
        );
    }

    #[test]
    fn test_empty_help_pushes_one_empty_component() {
        let mut host = RecordingHost::new();
        Hud::new(&mut host).display_help("").expect("display");
        assert_eq!(host.components(), vec![""]);
    }

    #[test]
    fn test_custom_budget() {
        let config = HudConfig {
            max_component_bytes: 4,
            ..HudConfig::default()
        };
        let mut host = RecordingHost::new();
        Hud::with_config(&mut host, config).push_long_string("abcdefghij").expect("push");
        assert_eq!(host.components(), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_zero_budget_fails_before_any_call() {
        let config = HudConfig {
            max_component_bytes: 0,
            ..HudConfig::default()
        };
        let mut host = RecordingHost::new();
        let result = Hud::with_config(&mut host, config).display_notification("hi", false, true);
        assert_eq!(result, Err(SplitError::ZeroBudget));
        assert!(host.calls.is_empty());

        let config = HudConfig {
            max_component_bytes: 0,
            ..HudConfig::default()
        };
        let result = Hud::with_config(&mut host, config).display_help("hi");
        assert_eq!(result, Err(SplitError::ZeroBudget));
        assert!(host.calls.is_empty());
    }
}
