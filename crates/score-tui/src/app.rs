use crate::events::{Event, EventHandler};
use crate::selection::SelectionState;
use crate::state::StateManager;
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use score_core::{ScoreError, ScoreResult};
use score_domain::{reorder, Row, RowId, ScoreDelta, ScoreOperations};
use score_persistence::SaveStats;
use std::io;

pub struct App {
    pub should_quit: bool,
    pub mode: AppMode,
    pub state: StateManager,
    pub selection: SelectionState,
    pub pending: Option<PendingAction>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppMode {
    Normal,
    Editing,
    /// A row is picked up; `preview` is the order shown until it is dropped.
    Grab {
        row_id: RowId,
        origin: usize,
        preview: Vec<Row>,
    },
}

/// Destructive actions that need a second press to confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingAction {
    Delete(RowId),
    Reset,
}

impl App {
    pub fn new(state: StateManager) -> Self {
        let selection = SelectionState::for_rows(state.rows().len());
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            state,
            selection,
            pending: None,
            status: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Rows in display order, including an uncommitted drag.
    pub fn visible_rows(&self) -> &[Row] {
        match &self.mode {
            AppMode::Grab { preview, .. } => preview,
            _ => self.state.rows(),
        }
    }

    pub fn selected_row(&self) -> Option<&Row> {
        self.selection
            .get()
            .and_then(|idx| self.visible_rows().get(idx))
    }

    pub fn scoring_enabled(&self) -> bool {
        self.state.features().scoring
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit();
            return;
        }

        self.status = None;
        match self.mode {
            AppMode::Normal => self.handle_normal_key(key.code),
            AppMode::Editing => self.handle_editing_key(key.code),
            AppMode::Grab { .. } => self.handle_grab_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode) {
        let pending = self.pending.take();

        match code {
            KeyCode::Char('q') => self.quit(),
            KeyCode::Char('a') | KeyCode::Char('i') => self.mode = AppMode::Editing,
            KeyCode::Char('j') | KeyCode::Down => self.selection.move_down(self.state.rows().len()),
            KeyCode::Char('k') | KeyCode::Up => self.selection.move_up(self.state.rows().len()),
            KeyCode::Char('+') | KeyCode::Char('=') => self.adjust_selected(ScoreDelta::PlusOne),
            KeyCode::Char('-') => self.adjust_selected(ScoreDelta::MinusOne),
            KeyCode::Char(']') => self.adjust_selected(ScoreDelta::PlusTen),
            KeyCode::Char('[') => self.adjust_selected(ScoreDelta::MinusTen),
            KeyCode::Char('d') => self.delete_selected(pending),
            KeyCode::Char('R') => self.reset_scores(pending),
            KeyCode::Char('m') => self.grab_selected(),
            _ => {}
        }
    }

    fn handle_editing_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.mode = AppMode::Normal,
            KeyCode::Enter => match self.state.add_from_input() {
                Ok(Some(_)) => {
                    let len = self.state.rows().len();
                    self.selection.set(len.checked_sub(1));
                }
                Ok(None) => {}
                Err(e) => self.report_error("add row", e),
            },
            KeyCode::Backspace => {
                self.state.input_mut().pop();
            }
            KeyCode::Char(c) => self.state.input_mut().push(c),
            _ => {}
        }
    }

    fn handle_grab_key(&mut self, code: KeyCode) {
        let AppMode::Grab {
            row_id,
            origin,
            ref preview,
        } = self.mode
        else {
            return;
        };
        let Some(from) = preview.iter().position(|row| row.id() == row_id) else {
            self.mode = AppMode::Normal;
            return;
        };

        match code {
            KeyCode::Char('j') | KeyCode::Down => self.shift_grabbed(from, from + 1),
            KeyCode::Char('k') | KeyCode::Up => {
                if from > 0 {
                    self.shift_grabbed(from, from - 1);
                }
            }
            KeyCode::Char('m') | KeyCode::Enter => self.drop_grabbed(),
            KeyCode::Esc => {
                tracing::debug!("Cancelled move of row {}", row_id);
                self.mode = AppMode::Normal;
                self.selection.set(Some(origin));
            }
            _ => {}
        }
    }

    fn adjust_selected(&mut self, delta: ScoreDelta) {
        if !self.scoring_enabled() {
            self.status = Some("Scoring is turned off".to_string());
            return;
        }
        let Some(id) = self.selected_row().map(Row::id) else {
            return;
        };
        if let Err(e) = self.state.adjust_score(id, delta) {
            self.report_error("adjust score", e);
        }
    }

    fn delete_selected(&mut self, pending: Option<PendingAction>) {
        let Some((id, text)) = self
            .selected_row()
            .map(|row| (row.id(), row.text().to_string()))
        else {
            return;
        };

        if pending != Some(PendingAction::Delete(id)) {
            self.status = Some(format!("Press d again to delete '{}'", text));
            self.pending = Some(PendingAction::Delete(id));
            return;
        }

        match self.state.delete_row(id) {
            Ok(_) => self.selection.clamp(self.state.rows().len()),
            Err(e) => self.report_error("delete row", e),
        }
    }

    fn reset_scores(&mut self, pending: Option<PendingAction>) {
        if !self.scoring_enabled() || self.state.rows().is_empty() {
            return;
        }
        if pending != Some(PendingAction::Reset) {
            self.status = Some("Press R again to reset all scores".to_string());
            self.pending = Some(PendingAction::Reset);
            return;
        }
        if let Err(e) = self.state.reset_scores() {
            self.report_error("reset scores", e);
        }
    }

    fn grab_selected(&mut self) {
        let Some(origin) = self.selection.get() else {
            return;
        };
        let Some(row) = self.state.rows().get(origin) else {
            return;
        };
        tracing::debug!("Grabbed row {} at position {}", row.id(), origin);
        self.mode = AppMode::Grab {
            row_id: row.id(),
            origin,
            preview: self.state.rows().to_vec(),
        };
    }

    fn shift_grabbed(&mut self, from: usize, to: usize) {
        if let AppMode::Grab { preview, .. } = &mut self.mode {
            if let Some(moved) = reorder::move_row(preview, from, to) {
                let position = to.min(moved.len().saturating_sub(1));
                *preview = moved;
                self.selection.set(Some(position));
            }
        }
    }

    fn drop_grabbed(&mut self) {
        let mode = std::mem::replace(&mut self.mode, AppMode::Normal);
        let AppMode::Grab { preview, .. } = mode else {
            return;
        };
        if let Err(e) = self.state.reorder(preview) {
            self.report_error("reorder rows", e);
        }
    }

    fn report_error(&mut self, action: &str, error: ScoreError) {
        tracing::warn!("Failed to {}: {}", action, error);
        self.status = Some(format!("Could not {}", action));
    }

    /// Runs the event loop until quit, then flushes pending saves.
    /// Saves are flushed even when the terminal fails.
    pub async fn run(&mut self) -> ScoreResult<SaveStats> {
        let mut terminal = match setup_terminal() {
            Ok(terminal) => terminal,
            Err(e) => return self.finish(Err(e.into())).await,
        };
        let mut events = EventHandler::new();

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        let restored = restore_terminal(&mut terminal).map_err(ScoreError::from);
        self.finish(result.and(restored)).await
    }

    /// Drains the save worker before reporting `outcome`.
    async fn finish(&mut self, outcome: ScoreResult<()>) -> ScoreResult<SaveStats> {
        let stats = self.state.shutdown().await;
        outcome.map(|()| stats)
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> ScoreResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            match events.next().await {
                Some(Event::Key(key)) => self.handle_key(key),
                Some(Event::Resize) | Some(Event::Tick) => {}
                None => break,
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
