use ssync::application::WatchEvent;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;

pub fn render_session_header(
    source: &str,
    destination: &str,
    exclusions: usize,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Remote, "ssync");
    header.add("Source", source);
    header.add("Destination", destination);
    if exclusions > 0 {
        header.add("Excluding", format!("{} pattern(s) from .ssyncignore", exclusions));
    }
    format!(
        "{}{} => {}\n",
        header.render(supports_color, supports_unicode),
        source,
        destination
    )
}

pub fn render_watch_disabled(supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Sync completed. Watch mode disabled.\n",
        Icon::Success.colored(supports_color, supports_unicode)
    )
}

pub fn render_watch_unavailable(source: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{} Source {} is remote; watch mode needs a local source. Exiting after one sync.\n",
        Icon::Warning.colored(supports_color, supports_unicode),
        source
    )
}

pub fn render_watch_event(event: &WatchEvent, supports_color: bool, supports_unicode: bool) -> String {
    match event {
        WatchEvent::WatchStarted { root, .. } => format!(
            "\n{} Watching {} for changes...\n",
            Icon::Watch.colored(supports_color, supports_unicode),
            root
        ),
        WatchEvent::FileChanged { path, kind } => format!("[{}] {}\n", kind, path),
        WatchEvent::SyncStarted => format!(
            "{} Syncing...\n",
            Icon::Progress.colored(supports_color, supports_unicode)
        ),
        WatchEvent::SyncComplete => format!(
            "{} Sync completed successfully.\n",
            Icon::Success.colored(supports_color, supports_unicode)
        ),
        WatchEvent::SyncFailed { message } => format!(
            "{} Error: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
        WatchEvent::Error { message } => format!(
            "{} Error watching files: {}\n",
            Icon::Error.colored(supports_color, supports_unicode),
            message
        ),
    }
}
