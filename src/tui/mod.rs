//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the dashboard,
//! and translates keyboard events into store operations.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop only redraws when something changed:
//!
//! - **Loading**: draws every ~80ms so the spinners animate.
//! - **Idle**: sleeps up to 250ms, redrawing on key events, terminal resize
//!   or a store change published through the watch channel.

mod component;
mod components;
mod event;
pub mod format;
pub mod palette;
mod ui;

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::core::action::{Action, Effect};
use crate::core::hook::{DashboardHook, project};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// The four dashboard pages, in tab order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Page {
    #[default]
    Dashboard,
    Sales,
    Products,
    Settings,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Sales, Page::Products, Page::Settings];

    pub fn title(self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Sales => "Sales",
            Page::Products => "Products",
            Page::Settings => "Settings",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Page> {
        Self::ALL.get(index).copied()
    }

    pub fn next(self) -> Page {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Page {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// TUI-specific presentation state (not part of the store)
#[derive(Debug, Default)]
pub struct TuiState {
    pub page: Page,
}

impl TuiState {
    /// Apply a navigation event. Returns false for events that aren't navigation.
    fn navigate(&mut self, event: TuiEvent) -> bool {
        let page = match event {
            TuiEvent::NextPage => self.page.next(),
            TuiEvent::PrevPage => self.page.prev(),
            TuiEvent::SelectPage(index) => match Page::from_index(index) {
                Some(page) => page,
                None => return false,
            },
            _ => return false,
        };
        debug!("Page: {} -> {}", self.page.title(), page.title());
        self.page = page;
        true
    }
}

pub async fn run(mut hook: DashboardHook) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut hook).await;

    hook.deactivate().await;
    ratatui::restore();
    info!("Terminal restored");
    result
}

async fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    hook: &mut DashboardHook,
) -> std::io::Result<()> {
    let mut tui = TuiState::default();
    let mut changes = hook.subscribe();
    let mut view = hook.activate();

    // Animation timer
    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if changes.has_changed().unwrap_or(false) {
            view = project(&changes.borrow_and_update());
            needs_redraw = true;
        }

        let animating = view.loading || view.user_loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            let is_dark = hook.store().is_dark();
            terminal.draw(|f| ui::draw_ui(f, &view, is_dark, &tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle.
        // Fetch tasks keep running on the workers while this waits.
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(250)
        };
        let events = next_events(timeout).await?;
        if !events.is_empty() {
            needs_redraw = true;
        }

        for event in events {
            if apply_event(&mut tui, hook, event) == Flow::Quit {
                info!("Quit requested");
                return Ok(());
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Block on the terminal off the async workers: the first event (waiting up
/// to `timeout`) plus everything already pending behind it.
async fn next_events(timeout: Duration) -> std::io::Result<Vec<TuiEvent>> {
    tokio::task::spawn_blocking(move || {
        poll_event_timeout(timeout)
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
            .collect()
    })
    .await
    .map_err(std::io::Error::other)
}

fn apply_event(tui: &mut TuiState, hook: &mut DashboardHook, event: TuiEvent) -> Flow {
    if tui.navigate(event) {
        return Flow::Continue;
    }
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => {
            if hook.store().dispatch(Action::Quit) == Effect::Quit {
                return Flow::Quit;
            }
        }
        TuiEvent::ToggleTheme => hook.store().toggle_theme(),
        TuiEvent::Refresh => hook.refresh(),
        TuiEvent::Resize => {}
        TuiEvent::NextPage | TuiEvent::PrevPage | TuiEvent::SelectPage(_) => {}
    }
    Flow::Continue
}
