//! Terminal user interface.
//!
//! Architecture, simplest thing that works:
//! - a synchronous ratatui render loop polling crossterm events
//! - one tokio task per dispatched request, reporting back over an
//!   unbounded channel the loop drains between frames
//!
//! The UI consumes the core's outputs (parsed document, variable table,
//! execution results) and produces nothing the core depends on.

pub mod views;

use crate::executor;
use crate::models::{ExecutionResult, ParsedDocument, RequestDefinition};
use crate::variables::VariableTable;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use ratatui::widgets::ListState;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Spinner frames for the loading view.
pub(crate) const SPINNER_FRAMES: [&str; 10] =
    ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Request list with navigation and filtering.
    List,
    /// A request is in flight.
    Loading,
    /// Result of the last dispatch.
    Response,
    /// Fatal-for-this-action message, e.g. a dispatch that never started.
    Error,
}

/// All UI state for one loaded document.
pub struct App {
    /// The parsed document being browsed.
    pub document: ParsedDocument,
    /// Resolved variable table, built once at load.
    pub variables: VariableTable,
    /// Current screen.
    pub view: View,
    /// Selection state for the request list.
    pub list_state: ListState,
    /// Active filter text (substring match, case-insensitive).
    pub filter: String,
    /// Whether the filter input is capturing keystrokes.
    pub filtering: bool,
    /// Result of the most recent dispatch, discarded on the next one.
    pub last_result: Option<ExecutionResult>,
    /// Whether the response view shows response headers.
    pub show_headers: bool,
    /// Whether the response view shows the used-variables panel.
    pub show_variables: bool,
    /// Message for the error view.
    pub error_message: String,
    /// Vertical scroll offset in the response view.
    pub scroll: u16,
    /// Loading spinner frame counter.
    pub spinner_frame: usize,
    /// Title of the request currently in flight.
    pub pending_title: String,
    /// Set when the user asks to leave.
    pub should_quit: bool,
}

impl App {
    /// Creates the UI state for a loaded document.
    pub fn new(document: ParsedDocument, variables: VariableTable, show_headers: bool) -> Self {
        let mut list_state = ListState::default();
        if !document.requests.is_empty() {
            list_state.select(Some(0));
        }

        Self {
            document,
            variables,
            view: View::List,
            list_state,
            filter: String::new(),
            filtering: false,
            last_result: None,
            show_headers,
            show_variables: true,
            error_message: String::new(),
            scroll: 0,
            spinner_frame: 0,
            pending_title: String::new(),
            should_quit: false,
        }
    }

    /// Requests visible under the current filter, in document order.
    pub fn visible_requests(&self) -> Vec<&RequestDefinition> {
        if self.filter.is_empty() {
            return self.document.requests.iter().collect();
        }

        let needle = self.filter.to_lowercase();
        self.document
            .requests
            .iter()
            .filter(|r| {
                r.title().to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// The request under the cursor, if any.
    pub fn selected_request(&self) -> Option<&RequestDefinition> {
        let visible = self.visible_requests();
        self.list_state
            .selected()
            .and_then(|i| visible.get(i).copied())
    }

    fn select_next(&mut self) {
        let count = self.visible_requests().len();
        if count == 0 {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < count => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    fn select_previous(&mut self) {
        if self.visible_requests().is_empty() {
            return;
        }
        let previous = match self.list_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.list_state.select(Some(previous));
    }

    /// Re-clamps the selection after the filter changed.
    fn reset_selection(&mut self) {
        if self.visible_requests().is_empty() {
            self.list_state.select(None);
        } else {
            self.list_state.select(Some(0));
        }
    }

    /// Stores a finished dispatch and switches views.
    ///
    /// A dispatch that produced any response snapshot (even a partial one)
    /// goes to the response view; one that failed before anything came back
    /// goes to the error view.
    pub fn finish_dispatch(&mut self, result: ExecutionResult) {
        self.scroll = 0;
        if !result.success && result.response.is_none() {
            self.error_message = result
                .error
                .as_ref()
                .map(|e| e.to_string())
                .unwrap_or_else(|| "request failed".to_string());
            self.last_result = Some(result);
            self.view = View::Error;
        } else {
            self.last_result = Some(result);
            self.view = View::Response;
        }
    }

    pub fn is_loading(&self) -> bool {
        self.view == View::Loading
    }
}

/// Restores the terminal even when the loop unwinds.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

/// Runs the UI loop until the user quits.
///
/// # Arguments
///
/// * `app` - Initial UI state built from the loaded document
pub async fn run(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let (tx, mut rx) = mpsc::unbounded_channel::<ExecutionResult>();

    while !app.should_quit {
        terminal.draw(|frame| views::draw(frame, &mut app))?;

        if let Ok(result) = rx.try_recv() {
            app.finish_dispatch(result);
        }

        if app.is_loading() {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
        }

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(&mut app, key, &tx);
                }
            }
        }
    }

    Ok(())
}

/// Routes a key press to the active view.
fn handle_key(app: &mut App, key: KeyEvent, tx: &mpsc::UnboundedSender<ExecutionResult>) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match app.view {
        View::List => handle_list_key(app, key, tx),
        View::Response => handle_response_key(app, key),
        View::Error => handle_error_key(app, key),
        // The loading view ignores everything except quit.
        View::Loading => {
            if key.code == KeyCode::Char('q') {
                app.should_quit = true;
            }
        }
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent, tx: &mpsc::UnboundedSender<ExecutionResult>) {
    if app.filtering {
        match key.code {
            KeyCode::Esc => {
                app.filtering = false;
                app.filter.clear();
                app.reset_selection();
            }
            KeyCode::Enter => app.filtering = false,
            KeyCode::Backspace => {
                app.filter.pop();
                app.reset_selection();
            }
            KeyCode::Char(c) => {
                app.filter.push(c);
                app.reset_selection();
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('/') => {
            app.filtering = true;
            app.filter.clear();
            app.reset_selection();
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Enter => {
            if let Some(request) = app.selected_request().cloned() {
                dispatch(app, request, tx);
            }
        }
        _ => {}
    }
}

fn handle_response_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('h') => app.show_headers = !app.show_headers,
        KeyCode::Char('v') => app.show_variables = !app.show_variables,
        KeyCode::Char('b') | KeyCode::Esc => {
            app.view = View::List;
            app.scroll = 0;
        }
        KeyCode::Down | KeyCode::Char('j') => app.scroll = app.scroll.saturating_add(1),
        KeyCode::Up | KeyCode::Char('k') => app.scroll = app.scroll.saturating_sub(1),
        KeyCode::PageDown => app.scroll = app.scroll.saturating_add(10),
        KeyCode::PageUp => app.scroll = app.scroll.saturating_sub(10),
        KeyCode::Home => app.scroll = 0,
        _ => {}
    }
}

fn handle_error_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('b') | KeyCode::Esc => app.view = View::List,
        _ => {}
    }
}

/// Spawns the dispatch task for one request and switches to loading.
fn dispatch(app: &mut App, request: RequestDefinition, tx: &mpsc::UnboundedSender<ExecutionResult>) {
    app.pending_title = request.title();
    app.spinner_frame = 0;
    app.last_result = None;
    app.view = View::Loading;

    let table = app.variables.clone();
    let tx = tx.clone();
    tokio::spawn(async move {
        let result = executor::execute(&request, &table).await;
        // Receiver gone means the UI is shutting down; nothing to do.
        let _ = tx.send(result);
    });
}
