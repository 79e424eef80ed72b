use std::io::{stdout, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event};
use crossterm::style::{Attribute, Print, SetAttribute};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue, terminal};
use log::{debug, info};
use postinstall_core::error::{Error, Result};
use postinstall_core::menu_definitions::MenuNode;
use postinstall_core::navigation::{MenuView, NavStatus, Navigator};

use super::input::{map_key, KeyAction};
use super::types::{MenuOutcome, ViewportState};
use super::{FOOTER_HINT, ROOT_LABEL};

/// Exit code used when the session is interrupted by a signal.
const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Set while a [`TerminalSession`] holds raw mode and the alternate screen.
static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Puts the terminal back the way it was. Safe to call more than once.
fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(stdout(), Show, LeaveAlternateScreen);
}

/// Restores the terminal only if a session is still active. Returns whether
/// anything was restored.
fn restore_active_session() -> bool {
    if SESSION_ACTIVE.swap(false, Ordering::SeqCst) {
        restore_terminal();
        true
    } else {
        false
    }
}

/// Restores the terminal on SIGINT/SIGTERM before exiting.
///
/// # Errors
///
/// Returns an error if a handler is already installed.
pub fn install_signal_handler() -> Result<()> {
    ctrlc::set_handler(|| {
        restore_active_session();
        std::process::exit(INTERRUPTED_EXIT_CODE);
    })
    .map_err(|e| Error::Misc(format!("Failed to install signal handler: {e}")))
}

struct TerminalSession;

impl TerminalSession {
    fn acquire() -> Result<Self> {
        enable_raw_mode().map_err(Error::Terminal)?;
        SESSION_ACTIVE.store(true, Ordering::SeqCst);
        // From here on, every exit path goes through Drop
        let session = TerminalSession;
        execute!(stdout(), EnterAlternateScreen, Hide).map_err(Error::Terminal)?;
        Ok(session)
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_active_session();
    }
}

/// Lets the user browse and toggle the menu until they back out of the root.
///
/// # Errors
///
/// Returns [`Error::Terminal`] if the terminal cannot be initialised, or an
/// IO error if drawing or reading input fails.
pub fn run_menu(forest: Vec<MenuNode>) -> Result<MenuOutcome> {
    let _session = TerminalSession::acquire()?;

    let (mut width, height) = terminal::size().map_err(Error::Terminal)?;
    let mut viewport = ViewportState::for_terminal_height(height);
    let mut navigator = Navigator::new(forest);

    loop {
        redraw_ui(&navigator.view(), &mut viewport, width)?;

        match event::read()? {
            Event::Key(key_event) => match map_key(key_event) {
                KeyAction::Interrupt => {
                    info!("Menu interrupted");
                    return Ok(MenuOutcome::Interrupted);
                }
                KeyAction::Navigate(nav_event) => {
                    debug!("Navigation event: {nav_event:?}");
                    if navigator.handle(nav_event) == NavStatus::Finished {
                        return Ok(MenuOutcome::Finished(navigator.into_forest()));
                    }
                }
            },
            Event::Resize(new_width, new_height) => {
                width = new_width;
                viewport.resize(new_height);
            }
            _ => {}
        }
    }
}

fn redraw_ui(view: &MenuView<'_>, viewport: &mut ViewportState, width: u16) -> Result<()> {
    let mut stdout = stdout();
    let width = usize::from(width);

    queue!(stdout, Clear(ClearType::All), MoveTo(0, 0))?;

    let header = std::iter::once(ROOT_LABEL)
        .chain(view.breadcrumb.iter().copied())
        .collect::<Vec<_>>()
        .join(" > ");
    queue!(
        stdout,
        SetAttribute(Attribute::Bold),
        Print(fit_to_width(&header, width)),
        SetAttribute(Attribute::Reset)
    )?;

    let offset = viewport.scroll_to(view.cursor);
    let visible_nodes = view
        .nodes
        .iter()
        .enumerate()
        .skip(offset)
        .take(usize::from(viewport.height));

    for (row, (index, node)) in (1u16..).zip(visible_nodes) {
        queue!(stdout, MoveTo(0, row))?;

        if index == view.cursor {
            queue!(stdout, SetAttribute(Attribute::Reverse))?;
        }

        queue!(
            stdout,
            Print(fit_to_width(&node.to_string(), width)),
            SetAttribute(Attribute::Reset)
        )?;
    }

    queue!(
        stdout,
        MoveTo(0, viewport.height + 1),
        Print(fit_to_width(FOOTER_HINT, width))
    )?;

    stdout.flush()?;
    Ok(())
}

/// Truncate to the terminal width so rows never wrap
fn fit_to_width(text: &str, width: usize) -> String {
    text.chars().take(width).collect()
}
