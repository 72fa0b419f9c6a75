use ratatui::style::{Color, Modifier, Style};

pub const FOCUSED_BORDER: Color = Color::Cyan;
pub const UNFOCUSED_BORDER: Color = Color::White;
pub const SELECTED_BG: Color = Color::Blue;
pub const GRABBED_BG: Color = Color::Magenta;
pub const NORMAL_TEXT: Color = Color::White;
pub const LABEL_TEXT: Color = Color::DarkGray;
pub const HIGHLIGHT_TEXT: Color = Color::Yellow;
pub const POSITIVE_SCORE: Color = Color::Green;
pub const NEGATIVE_SCORE: Color = Color::Red;

pub fn border(focused: bool) -> Style {
    Style::default().fg(if focused {
        FOCUSED_BORDER
    } else {
        UNFOCUSED_BORDER
    })
}

pub fn selected_item() -> Style {
    Style::default().bg(SELECTED_BG)
}

pub fn grabbed_item() -> Style {
    Style::default()
        .bg(GRABBED_BG)
        .add_modifier(Modifier::BOLD)
}

pub fn normal_text() -> Style {
    Style::default().fg(NORMAL_TEXT)
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn bold_highlight() -> Style {
    Style::default()
        .fg(HIGHLIGHT_TEXT)
        .add_modifier(Modifier::BOLD)
}

pub fn score_style(score: i64) -> Style {
    let color = match score {
        s if s > 0 => POSITIVE_SCORE,
        s if s < 0 => NEGATIVE_SCORE,
        _ => NORMAL_TEXT,
    };
    Style::default().fg(color)
}
