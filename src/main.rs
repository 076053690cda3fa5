mod app;
mod coin;
mod config;
mod logging;
mod mount;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::mount::{ClickHandler, Tui};
use anyhow::{Context, Result};
use crossterm::event::EventStream;
use futures::StreamExt;
use std::io;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing_appender::non_blocking::WorkerGuard;

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = mount::detach();
        original_hook(info);
    }));

    let cfg = config::load_config()?;
    let log_guard = logging::init(&cfg.logging)?;

    let mut terminal = mount::attach().context("Failed to mount on the terminal")?;
    tracing::info!(props = ?cfg.widget, "mounted");

    // The top level wires no behaviour to taps.
    let on_click: ClickHandler = Box::new(|| {});

    let result = run_app(&mut terminal, cfg, on_click).await;
    let detached = mount::detach();

    if let Err(e) = shutdown(result, detached, log_guard) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

/// Pick the error to report after the terminal is given back. A failed run
/// wins over a failed detach. The log guard is dropped last so these lines
/// reach the log file before the process exits.
fn shutdown(
    result: Result<()>,
    detached: io::Result<()>,
    log_guard: Option<WorkerGuard>,
) -> Result<()> {
    let outcome = match (result, detached) {
        (Err(e), detached) => {
            if let Err(d) = detached {
                tracing::warn!(error = %d, "failed to restore the terminal");
            }
            tracing::error!(error = %e, "exited with error");
            Err(e)
        }
        (Ok(()), Err(d)) => {
            tracing::error!(error = %d, "failed to restore the terminal");
            Err(anyhow::Error::new(d).context("Failed to restore the terminal"))
        }
        (Ok(()), Ok(())) => Ok(()),
    };
    drop(log_guard);
    outcome
}

async fn run_app(terminal: &mut Tui, cfg: config::AppConfig, mut on_click: ClickHandler) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg, Instant::now());
    let tick_ms = state.config.ui.tick_ms.max(1);

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(e)) => {
                    tracing::warn!(error = %e, "terminal input failed");
                    break;
                }
                None => break,
            }
        }
    });

    // Spawn tick task (20 FPS = 50ms by default)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_millis(tick_ms));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    draw(terminal, &mut state)?;

    // Main event loop
    loop {
        let Some(event) = event_rx.recv().await else {
            break;
        };

        let actions = handler::handle_event(&mut state, event, Instant::now());
        for action in actions {
            match action {
                Action::Click => on_click(),
                Action::Quit => state.should_quit = true,
            }
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            draw(terminal, &mut state)?;
        }
    }

    state.coin.unmount();
    Ok(())
}

/// Draw a frame, then measure where the coin landed.
fn draw(terminal: &mut Tui, state: &mut AppState) -> Result<()> {
    let now = Instant::now();
    let frame = terminal.draw(|f| ui::render(f, state, now))?;
    let stage = ui::layout::compute_layout(frame.area).stage;
    let coin = ui::layout::coin_geometry(stage, &state.metrics);
    state.remeasure(Some(coin));
    state.dirty = false;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuf(Arc<Mutex<Vec<u8>>>);

    impl io::Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_run_error_wins_over_detach_error() {
        let out = shutdown(
            Err(anyhow::anyhow!("event loop died")),
            Err(io::Error::other("tty gone")),
            None,
        );
        assert_eq!(out.unwrap_err().to_string(), "event loop died");
    }

    #[test]
    fn test_detach_error_reported_after_clean_run() {
        let out = shutdown(Ok(()), Err(io::Error::other("tty gone")), None);
        let msg = format!("{:#}", out.unwrap_err());
        assert!(msg.contains("Failed to restore the terminal"));
        assert!(msg.contains("tty gone"));
        assert!(shutdown(Ok(()), Ok(()), None).is_ok());
    }

    #[test]
    fn test_error_line_flushed_before_exit() {
        let buf = SharedBuf::default();
        let (writer, guard) = tracing_appender::non_blocking(buf.clone());
        let subscriber = tracing_subscriber::fmt()
            .with_writer(writer)
            .with_ansi(false)
            .finish();
        let _default = tracing::subscriber::set_default(subscriber);

        let out = shutdown(Err(anyhow::anyhow!("event loop died")), Ok(()), Some(guard));
        assert!(out.is_err());

        let logged = String::from_utf8(buf.0.lock().unwrap().clone()).unwrap();
        assert!(logged.contains("exited with error"));
        assert!(logged.contains("event loop died"));
    }
}
