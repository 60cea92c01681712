use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::action::Action;
use crate::config::Settings;
use crate::engine::{SortCriterion, UpdateEngine};
use crate::event::Message;
use crate::ui::RenderRequest;
use crate::ui::header::HeaderLines;
use crate::ui::table::{self, Selection};

/// Side effects requested by [`App::update`]. The runtime carries them out.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    ScheduleTick(Duration),
    Sample,
    Quit,
    Fail(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Size of the process table region, after the header and footer margins.
    pub fn table_size(&self, settings: &Settings) -> (u16, u16) {
        (
            self.width.saturating_sub(settings.table_margin_width),
            self.height.saturating_sub(settings.table_margin_height),
        )
    }
}

pub struct App {
    pub engine: UpdateEngine,
    pub viewport: Viewport,
    pub selection: Selection,
    cpu_count: usize,
    settings: Settings,
}

impl App {
    pub fn new(settings: Settings, viewport: Viewport, cpu_count: usize) -> Self {
        App {
            engine: UpdateEngine::new(),
            viewport,
            selection: Selection::default(),
            cpu_count,
            settings,
        }
    }

    /// Commands to run before the first message: sample right away and start
    /// the tick cycle.
    pub fn init(&self) -> Vec<Command> {
        vec![
            Command::Sample,
            Command::ScheduleTick(self.settings.refresh_interval()),
        ]
    }

    pub fn update(&mut self, message: Message) -> Vec<Command> {
        match message {
            Message::Tick => vec![
                Command::ScheduleTick(self.settings.refresh_interval()),
                Command::Sample,
            ],
            Message::SnapshotReady(snapshot) => {
                self.engine.apply_snapshot(snapshot);
                self.resolve_selection();
                Vec::new()
            }
            Message::Key(key) => {
                if key.kind != KeyEventKind::Press {
                    return Vec::new();
                }
                let action = self.map_key(key);
                self.dispatch(action)
            }
            Message::Resize { width, height } => {
                tracing::debug!(width, height, "resize");
                self.viewport = Viewport::new(width, height);
                self.resolve_selection();
                Vec::new()
            }
            Message::InputFailed(reason) => {
                vec![Command::Fail(format!("terminal input failed: {reason}"))]
            }
        }
    }

    pub fn map_key(&self, key: KeyEvent) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') => Action::Sort(SortCriterion::Cpu),
            KeyCode::Char('m') => Action::Sort(SortCriterion::Memory),
            KeyCode::Char('p') => Action::Sort(SortCriterion::Pid),
            KeyCode::Char('n') => Action::Sort(SortCriterion::Name),
            KeyCode::Up | KeyCode::Char('k') => Action::SelectUp,
            KeyCode::Down | KeyCode::Char('j') => Action::SelectDown,
            KeyCode::PageUp | KeyCode::Char('b') => Action::PageUp,
            KeyCode::PageDown | KeyCode::Char('f') | KeyCode::Char(' ') => Action::PageDown,
            KeyCode::Char('u') => Action::HalfPageUp,
            KeyCode::Char('d') => Action::HalfPageDown,
            KeyCode::Home | KeyCode::Char('g') => Action::SelectFirst,
            KeyCode::End | KeyCode::Char('G') => Action::SelectLast,
            _ => Action::None,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Vec<Command> {
        match action {
            Action::Quit => {
                tracing::debug!("quit requested");
                vec![Command::Quit]
            }
            Action::Sort(criterion) => {
                self.engine.set_sort_criterion(criterion);
                self.resolve_selection();
                Vec::new()
            }
            Action::SelectUp => self.navigate(Selection::select_up),
            Action::SelectDown => self.navigate(Selection::select_down),
            Action::PageUp => {
                let page = self.page_rows();
                self.navigate(|s| s.page_up(page))
            }
            Action::PageDown => {
                let page = self.page_rows();
                self.navigate(|s| s.page_down(page))
            }
            Action::HalfPageUp => {
                let half = (self.page_rows() / 2).max(1);
                self.navigate(|s| s.page_up(half))
            }
            Action::HalfPageDown => {
                let half = (self.page_rows() / 2).max(1);
                self.navigate(|s| s.page_down(half))
            }
            Action::SelectFirst => self.navigate(Selection::home),
            Action::SelectLast => self.navigate(Selection::end),
            Action::None => Vec::new(),
        }
    }

    fn navigate(&mut self, step: impl FnOnce(&mut Selection)) -> Vec<Command> {
        step(&mut self.selection);
        self.resolve_selection();
        Vec::new()
    }

    fn page_rows(&self) -> usize {
        let (_, table_height) = self.viewport.table_size(&self.settings);
        table::visible_rows(table_height)
    }

    /// Keeps the cursor on an existing row and inside the visible window after
    /// the rows or the viewport change.
    fn resolve_selection(&mut self) {
        let visible = self.page_rows();
        self.selection.resolve(self.engine.rows().len(), visible);
    }

    pub fn render_request(&self) -> RenderRequest<'_> {
        let (table_width, table_height) = self.viewport.table_size(&self.settings);
        RenderRequest {
            header: HeaderLines::build(
                self.engine.snapshot(),
                &self.engine.directive(),
                self.cpu_count,
                self.settings.header_core_limit,
            ),
            rows: self.engine.rows(),
            selection: self.selection,
            table_width,
            table_height,
        }
    }
}
