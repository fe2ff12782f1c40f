use baselib::{Hud, HudConfig, Logger, NotificationHeader, RecordingHost};

type CommandResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

const USAGE: &str = "usage: baselib <subtitle|help|notify|notify-title> <message...>";

fn main() {
    pretty_env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Replays a HUD call against a recording host and prints the natives it
/// would invoke.
fn run(args: &[String]) -> CommandResult {
    let (command, words) = match args.split_first() {
        Some((command, words)) if !words.is_empty() => (command.as_str(), words),
        _ => return Err(USAGE.into()),
    };
    let message = words.join(" ");

    let config = HudConfig::from_env()?;
    log::info!(
        "Previewing {} for a {} byte message (component limit {})",
        command,
        message.len(),
        config.max_component_bytes
    );

    let mut host = RecordingHost::new();
    {
        let mut logger = Logger::new("Preview", &mut host);
        logger.info_tagged(&format!("running {}", command), "CLI", "");
    }
    {
        let mut hud = Hud::with_config(&mut host, config);
        match command {
            "subtitle" => hud.display_subtitle(&message)?,
            "help" => hud.display_help(&message)?,
            "notify" => hud.display_notification(&message, false, true)?,
            "notify-title" => {
                let header = NotificationHeader::new("BaseLib", "Preview");
                hud.display_notification_with_title(&message, &header, false, true)?
            }
            other => return Err(format!("unknown command '{}'\n{}", other, USAGE).into()),
        }
    }

    for call in &host.calls {
        println!("{}", call);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_run_accepts_known_commands() {
        for command in ["subtitle", "help", "notify", "notify-title"] {
            assert!(run(&args(&[command, "hello", "world"])).is_ok(), "{}", command);
        }
    }

    #[test]
    fn test_run_rejects_missing_message() {
        let err = run(&args(&["subtitle"])).unwrap_err();
        assert_eq!(err.to_string(), USAGE);
    }

    #[test]
    fn test_run_rejects_unknown_command() {
        let err = run(&args(&["banner", "hi"])).unwrap_err();
        assert!(err.to_string().contains("unknown command 'banner'"));
    }
}
