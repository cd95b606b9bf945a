use suvidha::adapters::FileKeyValueStore;
use suvidha::app::{App, AppMessage};
use suvidha::cli::{parse_args, run_cli_command, CliCommand};
use suvidha::config::KioskConfig;
use suvidha::logging::init_logging;
use suvidha::storage::ComplaintStore;
use suvidha::terminal::{setup_panic_hook, TerminalManager};
use suvidha::ui;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::mpsc;

/// Tick for cursor blink and background message polling
const TICK: Duration = Duration::from_millis(50);

fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if let Some(result) = run_cli_command(&command) {
        return result;
    }
    let CliCommand::Run {
        data_dir,
        export_dir,
    } = command
    else {
        return Ok(());
    };

    color_eyre::install()?;

    let config = KioskConfig::from_env().with_overrides(data_dir, export_dir);
    if let Err(e) = init_logging(&config) {
        eprintln!("warning: file logging disabled: {e}");
    }

    let backend = FileKeyValueStore::open(&config.data_dir)
        .wrap_err_with(|| format!("cannot open kiosk data in {}", config.data_dir.display()))?;
    let mut app = App::new(ComplaintStore::new(backend), &config);
    tracing::info!(
        data_dir = %config.data_dir.display(),
        export_dir = %config.export_dir.display(),
        language = config.language.code(),
        "Kiosk ready"
    );

    setup_panic_hook();
    let runtime = tokio::runtime::Runtime::new()?;
    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(run_app(manager.terminal(), &mut app));
    manager.restore()?;

    tracing::info!("Kiosk shut down");
    result
}

async fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event = event_stream.next() => {
                match event {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal input error: {}", e);
                        return Err(e.into());
                    }
                    None => break,
                }
            }

            message = async {
                match message_rx.as_mut() {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(message) = message {
                    app.handle_message(message);
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
