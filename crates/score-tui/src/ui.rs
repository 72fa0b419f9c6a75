use crate::app::{App, AppMode};
use crate::keybindings::KeybindingRegistry;
use crate::theme::*;
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const TITLE: &str = "Score Counter";
const INPUT_PLACEHOLDER: &str = "Player name";
const EMPTY_LIST: &str = "No players yet.";
const SCORE_WIDTH: usize = 8;

pub fn render(app: &App, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    render_input(app, frame, chunks[1]);
    render_rows(app, frame, chunks[2]);
    render_footer(app, frame, chunks[3]);
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let mut spans = vec![Span::styled(TITLE, bold_highlight())];
    if !app.state.is_persistent() {
        spans.push(Span::styled("  (not saved)", label_text()));
    }
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_input(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.mode == AppMode::Editing;
    let text = app.state.controller().input();

    let line = if text.is_empty() && !editing {
        Line::from(Span::styled(INPUT_PLACEHOLDER, label_text()))
    } else {
        Line::from(Span::styled(text, normal_text()))
    };

    let input = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border(editing))
            .title("Add player"),
    );
    frame.render_widget(input, area);

    if editing {
        let offset = u16::try_from(text.width()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(1)
            .saturating_add(offset)
            .min(area.right().saturating_sub(2));
        frame.set_cursor_position(Position::new(x, area.y + 1));
    }
}

fn render_rows(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border(app.mode != AppMode::Editing))
        .title("Players");

    let rows = app.visible_rows();
    if rows.is_empty() {
        let empty = Paragraph::new(Span::styled(EMPTY_LIST, label_text())).block(block);
        frame.render_widget(empty, area);
        return;
    }

    let scoring = app.scoring_enabled();
    let text_width = (area.width as usize).saturating_sub(2 + if scoring { SCORE_WIDTH } else { 0 });

    let items: Vec<ListItem> = rows
        .iter()
        .map(|row| {
            let mut spans = vec![Span::styled(fit_width(row.text(), text_width), normal_text())];
            if scoring {
                spans.push(Span::styled(
                    format!("{:>width$}", row.score(), width = SCORE_WIDTH),
                    score_style(row.score()),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let highlight = match app.mode {
        AppMode::Grab { .. } => grabbed_item(),
        _ => selected_item(),
    };
    let list = List::new(items).block(block).highlight_style(highlight);

    let mut state = ListState::default().with_selected(app.selection.get());
    frame.render_stateful_widget(list, area, &mut state);
}

/// Cuts `text` to `width` display columns and pads it out to exactly that.
fn fit_width(text: &str, width: usize) -> String {
    let mut fitted = String::with_capacity(width);
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        fitted.push(c);
    }
    fitted.extend(std::iter::repeat(' ').take(width - used));
    fitted
}

fn render_footer(app: &App, frame: &mut Frame, area: Rect) {
    let context = KeybindingRegistry::get_provider(app).get_context();

    let footer = match &app.status {
        Some(status) => Paragraph::new(status.as_str()).style(bold_highlight()),
        None => Paragraph::new(context.help_line()).style(label_text()),
    };
    frame.render_widget(
        footer.block(Block::default().borders(Borders::ALL).title(context.name)),
        area,
    );
}
