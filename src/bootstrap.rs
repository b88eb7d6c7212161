//! Entry bootstrap: runs once per process
//!
//! Locate the mount node, set up the terminal, wrap the shell in the
//! theme provider, paint the baseline, draw the first frame, then hand
//! over to the event loop. A missing mount node is fatal; there are no
//! retries.

use crate::app::App;
use crate::config::Config;
use crate::ui::{self, ThemeProvider};
use anyhow::{bail, Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::{self, stdout, IsTerminal, Stdout};
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Proof that an interactive terminal is attached to stdout
#[derive(Debug)]
pub struct MountNode {
    _private: (),
}

impl MountNode {
    pub fn locate() -> Result<Self> {
        Self::probe(io::stdout().is_terminal())
    }

    fn probe(is_terminal: bool) -> Result<Self> {
        if !is_terminal {
            bail!("pitwall must be run in an interactive terminal (stdout is not a TTY)");
        }
        Ok(Self { _private: () })
    }

    /// Switch the terminal into raw mode + alternate screen
    fn attach(self) -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;

        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).context("Failed to create terminal")
    }
}

/// Restore the terminal to its normal state. Every step runs even when an
/// earlier one fails; the first failure is returned.
fn detach() -> Result<()> {
    first_error([
        disable_raw_mode().context("Failed to disable raw mode"),
        execute!(io::stdout(), LeaveAlternateScreen).context("Failed to leave alternate screen"),
        execute!(io::stdout(), crossterm::cursor::Show).context("Failed to show cursor"),
    ])
}

fn first_error(steps: impl IntoIterator<Item = Result<()>>) -> Result<()> {
    let mut first = Ok(());
    for step in steps {
        if let Err(e) = step {
            log::warn!("Terminal restore step failed: {:#}", e);
            if first.is_ok() {
                first = Err(e);
            }
        }
    }
    first
}

/// The event loop's own error outranks a failed restore
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    result.and(restored)
}

pub fn run(config: Config, initial_path: &str) -> Result<()> {
    let mount = MountNode::locate()?;
    log::info!("Mount node found, starting at {}", initial_path);

    let mut app = App::new(config, initial_path, ThemeProvider::default())
        .context("Failed to initialize application")?;

    let mut terminal = mount.attach()?;

    // Without this a panic leaves the terminal in raw mode + alternate screen
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = detach();
        original_hook(info);
    }));

    let result = first_frame(&mut terminal, &app).and_then(|_| main_loop(&mut terminal, &mut app));

    if let Err(e) = &result {
        log::error!("Event loop failed: {:#}", e);
    }

    let restored = first_error([
        detach(),
        terminal.show_cursor().context("Failed to show cursor"),
    ]);

    log::info!("Shut down at {}", app.router.current_path());
    finish(result, restored)
}

/// Baseline reset followed by the initial render
fn first_frame<B: Backend>(terminal: &mut Terminal<B>, app: &App) -> Result<()> {
    terminal.clear().context("Failed to clear terminal")?;
    terminal
        .draw(|frame| ui::render_baseline(frame, app.theme()))
        .context("Failed to apply baseline")?;
    terminal
        .draw(|frame| ui::render(frame, app))
        .context("Initial render failed")?;
    Ok(())
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }

        if app.should_quit {
            break;
        }

        app.update_timers();

        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_missing_mount_node_is_an_error() {
        let err = MountNode::probe(false).unwrap_err();
        assert!(err.to_string().contains("interactive terminal"));
    }

    #[test]
    fn test_mount_node_found() {
        assert!(MountNode::probe(true).is_ok());
    }

    #[test]
    fn test_restore_runs_every_step() {
        let mut ran = Vec::new();
        let steps = (0..3).map(|i| {
            ran.push(i);
            if i == 0 {
                Err(anyhow::anyhow!("raw mode"))
            } else if i == 1 {
                Err(anyhow::anyhow!("alternate screen"))
            } else {
                Ok(())
            }
        });
        let err = first_error(steps).unwrap_err();
        assert_eq!(err.to_string(), "raw mode");
        assert_eq!(ran, vec![0, 1, 2]);

        assert!(first_error([Ok(()), Ok(())]).is_ok());
    }

    #[test]
    fn test_loop_error_wins_over_restore_error() {
        let err = finish(
            Err(anyhow::anyhow!("event loop")),
            Err(anyhow::anyhow!("restore")),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "event loop");

        let err = finish(Ok(()), Err(anyhow::anyhow!("restore"))).unwrap_err();
        assert_eq!(err.to_string(), "restore");
        assert!(finish(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_first_frame_renders_start_page() {
        let app = App::new(Config::default(), "/", ThemeProvider::default()).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        first_frame(&mut terminal, &app).unwrap();

        let buffer = terminal.backend().buffer();
        let theme = app.theme();
        assert_eq!(buffer[(79, 0)].bg, theme.palette.background.default);
        assert_eq!(app.router.current_path(), "/live");
    }
}
