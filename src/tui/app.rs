use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use regex::Regex;
use tracing::{debug, info};

use crate::io::ambient::{AmbientTheme, TerminalAmbient};
use crate::io::state::{JsonFileStore, KeyValueStore};
use crate::model::sample::{sample_notes, sample_tasks};
use crate::model::{DashConfig, EditMode, Note, Task};
use crate::ops::calendar::{CalendarError, CalendarView};
use crate::ops::ids::IdGenerator;
use crate::ops::search;
use crate::ops::store::{CollectionStore, StoreError};
use crate::ops::theme_pref::ThemePreference;
use crate::util::clock::{Clock, SystemClock};

use super::form::{FormError, FormKind, FormState};
use super::input;
use super::list_renderer::{ActionKind, ItemAction, ListRenderer};
use super::render;
use super::tabs::{Tab, TabController};
use super::theme::Theme;

pub type TaskStore = CollectionStore<Task, ListRenderer<Task>>;
pub type NoteStore = CollectionStore<Note, ListRenderer<Note>>;

/// Error type for building the application state
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("could not load initial items: {0}")]
    Store(#[from] StoreError),
    #[error("could not compute calendar: {0}")]
    Calendar(#[from] CalendarError),
}

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the create/edit form
    Form,
    /// Typing a note search query
    Search,
}

/// Everything the dashboard needs to start
pub struct AppOptions {
    pub config: DashConfig,
    pub clock: Rc<dyn Clock>,
    pub state: Box<dyn KeyValueStore>,
    /// Start with empty stores regardless of `config.sample_data`
    pub empty: bool,
}

/// Main application state
pub struct App {
    pub config: DashConfig,
    pub clock: Rc<dyn Clock>,
    pub tasks: TaskStore,
    pub notes: NoteStore,
    pub tabs: TabController,
    pub calendar: CalendarView,
    pub theme_pref: ThemePreference<Box<dyn KeyValueStore>>,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Selected row in the task list
    pub task_cursor: usize,
    /// Selected row in the (possibly filtered) note list
    pub note_cursor: usize,
    pub form: Option<FormState>,
    /// Active note filter; empty shows every note
    pub search_query: String,
    /// One-shot message shown in the status row until the next key press
    pub status: Option<String>,
    pub show_help: bool,
    task_ids: IdGenerator,
    note_ids: IdGenerator,
}

impl App {
    pub fn new(options: AppOptions, ambient: &dyn AmbientTheme) -> Result<Self, AppError> {
        let AppOptions {
            config,
            clock,
            state,
            empty,
        } = options;

        let seed = config.sample_data && !empty;
        let (task_items, note_items) = if seed {
            (sample_tasks(), sample_notes())
        } else {
            (Vec::new(), Vec::new())
        };
        let tasks = CollectionStore::with_items(task_items, ListRenderer::new(clock.clone()))?;
        let notes = CollectionStore::with_items(note_items, ListRenderer::new(clock.clone()))?;
        let calendar = CalendarView::new(clock.clone())?;

        let theme_pref = ThemePreference::resolve(state, ambient);
        let theme = Theme::for_mode(theme_pref.current(), &config.ui);

        info!(
            tasks = tasks.len(),
            notes = notes.len(),
            theme = %theme_pref.current(),
            "dashboard initialized"
        );

        Ok(App {
            config,
            clock,
            tasks,
            notes,
            tabs: TabController::new(),
            calendar,
            theme_pref,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            task_cursor: 0,
            note_cursor: 0,
            form: None,
            search_query: String::new(),
            status: None,
            show_help: false,
            task_ids: IdGenerator::new("task"),
            note_ids: IdGenerator::new("note"),
        })
    }

    /// Tear down: nothing but the theme outlives the session
    pub fn shutdown(self) {
        info!(
            tasks = self.tasks.len(),
            notes = self.notes.len(),
            "dashboard closed, discarding items"
        );
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn activate_tab(&mut self, tab: Tab) {
        debug!(tab = tab.key(), "activate tab");
        self.tabs.activate(tab);
    }

    // -----------------------------------------------------------------------
    // Theme
    // -----------------------------------------------------------------------

    pub fn toggle_theme(&mut self) {
        let mode = self.theme_pref.toggle();
        self.theme = Theme::for_mode(mode, &self.config.ui);
    }

    // -----------------------------------------------------------------------
    // Cursor
    // -----------------------------------------------------------------------

    /// Number of rows in the list on the active tab
    pub fn visible_rows(&self) -> usize {
        match self.active_tab() {
            Tab::Tasks => self.tasks.listener().len(),
            Tab::Notes => self.notes.listener().len(),
            Tab::Calendar => 0,
        }
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let rows = self.visible_rows();
        let Some(cursor) = self.cursor_mut() else {
            return;
        };
        if rows == 0 {
            *cursor = 0;
            return;
        }
        *cursor = cursor.saturating_add_signed(delta).min(rows - 1);
    }

    pub fn cursor_to_end(&mut self, end: bool) {
        let rows = self.visible_rows();
        if let Some(cursor) = self.cursor_mut() {
            *cursor = if end { rows.saturating_sub(1) } else { 0 };
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match self.active_tab() {
            Tab::Tasks => Some(&mut self.task_cursor),
            Tab::Notes => Some(&mut self.note_cursor),
            Tab::Calendar => None,
        }
    }

    fn clamp_cursors(&mut self) {
        let task_rows = self.tasks.listener().len();
        let note_rows = self.notes.listener().len();
        self.task_cursor = self.task_cursor.min(task_rows.saturating_sub(1));
        self.note_cursor = self.note_cursor.min(note_rows.saturating_sub(1));
    }

    // -----------------------------------------------------------------------
    // Item actions
    // -----------------------------------------------------------------------

    /// Resolve `kind` against the selected row of the active list and run it
    pub fn act_on_selection(&mut self, kind: ActionKind) {
        let action = match self.active_tab() {
            Tab::Tasks => self.tasks.listener().action_at(self.task_cursor, kind),
            Tab::Notes => self.notes.listener().action_at(self.note_cursor, kind),
            Tab::Calendar => None,
        };
        if let Some(action) = action {
            self.dispatch(self.active_tab(), action);
        }
    }

    /// Run an item action on the list shown in `tab`
    pub fn dispatch(&mut self, tab: Tab, action: ItemAction) {
        match (tab, action.kind) {
            (Tab::Tasks, ActionKind::Delete) => {
                self.tasks.remove(&action.item_id);
            }
            (Tab::Notes, ActionKind::Delete) => {
                if self.notes.remove(&action.item_id) {
                    // the full list was just re-rendered
                    self.search_query.clear();
                }
            }
            (Tab::Tasks, ActionKind::Edit) => {
                if let Some(task) = self.tasks.find(&action.item_id) {
                    self.status = Some(format!("Editing task: {}", task.title));
                    let form = FormState::from_task(task);
                    self.open_form_with(form, &action.item_id);
                }
            }
            (Tab::Notes, ActionKind::Edit) => {
                if let Some(note) = self.notes.find(&action.item_id) {
                    self.status = Some(format!("Editing note: {}", note.title));
                    let form = FormState::from_note(note);
                    self.open_form_with(form, &action.item_id);
                }
            }
            (Tab::Calendar, _) => {}
        }
        self.clamp_cursors();
    }

    // -----------------------------------------------------------------------
    // Forms
    // -----------------------------------------------------------------------

    /// Open an empty create form for the active list
    pub fn open_form(&mut self) {
        let kind = match self.active_tab() {
            Tab::Tasks => FormKind::Task,
            Tab::Notes => FormKind::Note,
            Tab::Calendar => return,
        };
        self.form = Some(FormState::for_kind(kind));
        self.mode = Mode::Form;
    }

    fn open_form_with(&mut self, mut form: FormState, item_id: &str) {
        if self.config.ui.edit_mode == EditMode::Update {
            form.editing = Some(item_id.to_string());
        }
        self.form = Some(form);
        self.mode = Mode::Form;
    }

    pub fn cancel_form(&mut self) {
        self.form = None;
        self.mode = Mode::Navigate;
    }

    /// Submit the open form: update in place when editing, else append.
    /// On a validation error the form stays open.
    pub fn submit_form(&mut self) -> Result<(), FormError> {
        let Some(form) = self.form.as_ref() else {
            return Ok(());
        };
        let now = self.clock.now_millis();
        match form.kind {
            FormKind::Task => {
                let id = match &form.editing {
                    Some(id) => id.clone(),
                    None => self.task_ids.next_id(now),
                };
                let task = form.build_task(id)?;
                let row_id = task.id.clone();
                if form.editing.is_some() {
                    self.tasks.replace(task);
                } else if let Err(e) = self.tasks.add(task) {
                    self.status = Some(e.to_string());
                }
                self.task_cursor = self.tasks.listener().row_of(&row_id).unwrap_or(0);
            }
            FormKind::Note => {
                let id = match &form.editing {
                    Some(id) => id.clone(),
                    None => self.note_ids.next_id(now),
                };
                let note = form.build_note(id)?;
                let row_id = note.id.clone();
                if form.editing.is_some() {
                    self.notes.replace(note);
                } else if let Err(e) = self.notes.add(note) {
                    self.status = Some(e.to_string());
                }
                self.search_query.clear();
                self.note_cursor = self.notes.listener().row_of(&row_id).unwrap_or(0);
            }
        }
        self.form = None;
        self.mode = Mode::Navigate;
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Replace the note query and re-render the filtered view
    pub fn set_search_query(&mut self, query: String) {
        self.search_query = query;
        let q = self.search_query.clone();
        self.notes.render_view(|note| search::matches(&q, note));
        self.clamp_cursors();
    }

    pub fn clear_search(&mut self) {
        self.set_search_query(String::new());
    }

    /// Highlight regex for the active note query
    pub fn search_regex(&self) -> Option<Regex> {
        search::highlight_regex(&self.search_query)
    }

    // -----------------------------------------------------------------------
    // Calendar
    // -----------------------------------------------------------------------

    pub fn calendar_step(&mut self, forward: bool) {
        let result = if forward {
            self.calendar.next_month()
        } else {
            self.calendar.prev_month()
        };
        if let Err(e) = result {
            self.status = Some(e.to_string());
        }
    }

    pub fn calendar_today(&mut self) {
        if let Err(e) = self.calendar.today() {
            self.status = Some(e.to_string());
        }
    }
}

/// Paths and flags the TUI is launched with
pub struct LaunchOptions {
    pub config: DashConfig,
    pub state_dir: PathBuf,
    pub empty: bool,
}

/// Run the TUI application
pub fn run(launch: LaunchOptions) -> Result<(), Box<dyn std::error::Error>> {
    let ambient = TerminalAmbient::from_env(launch.config.ui.system_theme.clone());
    let options = AppOptions {
        config: launch.config,
        clock: Rc::new(SystemClock),
        state: Box::new(JsonFileStore::new(launch.state_dir)),
        empty: launch.empty,
    };
    let mut app = App::new(options, &ambient)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Restore the terminal if anything panics
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    app.shutdown();
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
