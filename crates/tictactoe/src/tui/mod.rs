//! Terminal user interface: a 3x3 button grid driven by mouse and keys.

mod app;
mod input;
mod ui;

pub use app::App;
pub use ui::{ScreenLayout, draw};

use anyhow::Result;
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tictactoe_core::StatisticsStore;
use tracing::{error, info, instrument};

/// Takes over the terminal and runs `app` until the user quits.
///
/// Once raw mode is on, the terminal is restored on every exit path,
/// including a failed screen setup.
#[instrument(skip_all)]
pub fn run<S: StatisticsStore>(app: &mut App<S>) -> Result<()> {
    info!("Starting terminal UI");

    let res = with_restore(
        || Ok(enable_raw_mode()?),
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
            let backend = CrosstermBackend::new(stdout);
            let mut terminal = Terminal::new(backend)?;
            run_app(&mut terminal, app)
        },
        restore_terminal,
    );

    if let Err(e) = &res {
        error!(error = %e, "Terminal UI exited with error");
    } else {
        info!("Terminal UI exited");
    }
    res
}

/// Runs `body` after `enter` succeeds, then always runs `restore`.
///
/// An error from `body` wins over an error from `restore`.
fn with_restore<E, B, R>(enter: E, body: B, restore: R) -> Result<()>
where
    E: FnOnce() -> Result<()>,
    B: FnOnce() -> Result<()>,
    R: FnOnce() -> Result<()>,
{
    enter()?;
    let res = body();
    let restored = restore();
    if let Err(e) = &restored {
        error!(error = %e, "Failed to restore terminal");
    }
    res.and(restored)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}

/// Event loop: draw, then block for one input and process it to completion.
fn run_app<B, S>(terminal: &mut Terminal<B>, app: &mut App<S>) -> Result<()>
where
    B: Backend,
    <B as Backend>::Error: Send + Sync + 'static,
    S: StatisticsStore,
{
    while !app.should_quit() {
        let area = terminal.draw(|f| draw(f, app))?.area;
        app.set_viewport(area);

        match event::read()? {
            Event::Key(key) if key.kind != KeyEventKind::Release => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }
    }
    Ok(())
}
