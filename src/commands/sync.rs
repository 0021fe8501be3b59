use std::sync::Arc;

use anyhow::Result;
use tracing::debug;

use ssync::application::watch::{run_sync, EventSink, WatchEvent, WatchOptions, WatchUseCase};
use ssync::application::SyncSession;
use ssync::config::{Config, ConfigWarning};
use ssync::domain::ports::TransferRunner;
use ssync::infrastructure::transfer::DEFAULT_PROGRAM;
use ssync::infrastructure::{ssync_home_dir, RsyncTransfer};
use ssync::SsyncError;

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::error::print_warning;
use crate::ui::views::watch::{
    render_session_header, render_watch_disabled, render_watch_event, render_watch_unavailable,
};

pub fn cmd_sync(cli: &Cli) -> Result<()> {
    let ui = UiContext::new(cli.json, cli.color);

    let (mut config, warnings) = Config::load_or_default()?;
    for warning in &warnings {
        print_warning(&describe_config_warning(warning), ui.json);
    }
    apply_cli_overrides(&mut config, cli);

    let (filter, unknown) = config.change_filter();
    for kind in &unknown {
        print_warning(&format!("ignoring unknown change kind '{}'", kind), ui.json);
    }
    if config.watch.enabled && filter.is_empty() {
        print_warning("no change kinds selected; changes will not trigger a sync", ui.json);
    }

    let cwd = std::env::current_dir().map_err(SsyncError::CurrentDirUnavailable)?;
    let home = ssync_home_dir().ok_or(SsyncError::HomeDirUnavailable)?;

    let (source_arg, dest_arg) = cli.endpoints();
    let session = SyncSession::resolve(
        source_arg,
        dest_arg,
        &cwd,
        &home,
        config.transfer_options(),
    )?;
    debug!(
        source = session.endpoints().source().transfer_address(),
        destination = session.endpoints().destination().transfer_address(),
        exclusions = session.exclusions().len(),
        "session resolved"
    );

    let program = config
        .sync
        .rsync
        .clone()
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string());
    let runner = RsyncTransfer::new(&program);

    if !ui.json {
        print!(
            "{}",
            render_session_header(
                session.endpoints().source().display_name(),
                session.endpoints().destination().display_name(),
                session.exclusions().len(),
                ui.color,
                ui.unicode,
            )
        );
    }

    if !runner.check_available() {
        print_warning(
            &format!("'{}' could not be executed; is rsync installed and on PATH?", program),
            ui.json,
        );
    }

    let sink = event_sink(ui);
    run_sync(&session, &runner, sink.as_ref());

    if !config.watch.enabled {
        if !ui.json {
            print!("{}", render_watch_disabled(ui.color, ui.unicode));
        }
        return Ok(());
    }

    let Some(root) = session.watch_root() else {
        if !ui.json {
            print!(
                "{}",
                render_watch_unavailable(
                    session.endpoints().source().display_name(),
                    ui.color,
                    ui.unicode
                )
            );
        }
        return Ok(());
    };

    let options = WatchOptions::new(root)
        .with_filter(filter)
        .with_debounce(config.debounce());
    let runner: Arc<dyn TransferRunner> = Arc::new(runner);
    WatchUseCase::new(Arc::new(session), runner, options).start(sink)?;

    Ok(())
}

/// CLI flags win over environment and config file.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    let set = |flag: Option<bool>, slot: &mut bool| {
        if let Some(value) = flag {
            *slot = value;
        }
    };

    set(cli.compress, &mut config.sync.compress);
    set(cli.verbose, &mut config.sync.verbose);
    set(cli.progress, &mut config.sync.progress);
    set(cli.delete, &mut config.sync.delete);
    set(cli.watch, &mut config.watch.enabled);

    if let Some(changes) = &cli.changes {
        config.watch.changes = changes.clone();
    }
}

fn describe_config_warning(warning: &ConfigWarning) -> String {
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    match &warning.suggestion {
        Some(suggestion) => format!(
            "unknown config key '{}' in {} (did you mean '{}'?)",
            warning.key, location, suggestion
        ),
        None => format!("unknown config key '{}' in {}", warning.key, location),
    }
}

fn event_sink(ui: UiContext) -> EventSink {
    Arc::new(move |event: WatchEvent| {
        if ui.json {
            println!("{}", event.to_json());
            return;
        }

        let rendered = render_watch_event(&event, ui.color, ui.unicode);
        match event {
            WatchEvent::SyncFailed { .. } | WatchEvent::Error { .. } => eprint!("{rendered}"),
            _ => print!("{rendered}"),
        }
    })
}
