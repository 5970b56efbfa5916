use campus_connect::app::App;
use campus_connect::cli::{parse_args, version_line, CliCommand};
use campus_connect::config::AppConfig;
use campus_connect::devserver::{open_in_browser, start_dev_server_on, DevServer};
use campus_connect::logging::init_logging;
use campus_connect::terminal::{setup_panic_hook, TerminalManager};
use campus_connect::ui;
use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::net::SocketAddr;
use std::time::Duration;

/// Event loop tick, also drives the loading spinner.
const TICK: Duration = Duration::from_millis(16);

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::RunTui(options) => options,
    };

    color_eyre::install()?;
    setup_panic_hook();

    let config = options.apply(AppConfig::from_env());
    init_logging(&config.log_file)?;
    if config.api_key.is_empty() {
        tracing::warn!("no API_KEY or VITE_API_KEY set, quiz generation will fail");
    }

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run(config))
}

async fn run(config: AppConfig) -> Result<()> {
    let mut app = App::from_config(&config);

    let server = if config.serve {
        let addr = SocketAddr::from(([127, 0, 0, 1], config.dev_server_port));
        let server = start_dev_server_on(addr, app.snapshot()).await?;
        if config.open_browser {
            open_in_browser(&server.url());
        }
        Some(server)
    } else {
        None
    };

    let mut manager = TerminalManager::new()?;
    app.mount();
    let result = run_app(manager.terminal(), &mut app, server.as_ref()).await;
    manager.restore()?;

    if let Some(server) = server {
        server.shutdown();
    }
    tracing::info!("shell exited");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    server: Option<&DevServer>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    // Owned here so select! can borrow it alongside `app`
    let mut message_rx = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &app.view_state()))?;
            app.needs_redraw = false;
            if let Some(server) = server {
                server.publish(app.snapshot()).await;
            }
        }

        tokio::select! {
            _ = tokio::time::sleep(TICK) => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key(key),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!(error = %e, "terminal event stream failed");
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
