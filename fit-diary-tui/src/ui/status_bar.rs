// fit-diary-tui/src/ui/status_bar.rs
use crate::app::{ActiveModal, App};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

pub fn render_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status_text = match app.active_modal {
        ActiveModal::None => {
            "[↑↓/jk] Nav | [a]dd | [e]dit | [d]elete | [r]ecent | [w]ater | [c]hart | [?] Help | [q]uit "
        }
        ActiveModal::Help => " [Esc/Enter/?] Close Help ",
        ActiveModal::RecordForm { .. } => {
            " [Esc] Cancel | [Enter] Next/Confirm | [Tab/Shift+Tab] Navigate | [↑↓] Inc/Dec Number "
        }
        ActiveModal::ConfirmDelete { .. } => " [y/Enter] Delete | [n/Esc] Keep ",
    };

    let message_text = app.status_message.as_deref().unwrap_or("");
    let message_color = if app.status_is_error {
        Color::Red
    } else {
        Color::Green
    };

    let status_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(area);

    let status_paragraph =
        Paragraph::new(status_text).style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status_paragraph, status_chunks[0]);

    let message_paragraph = Paragraph::new(message_text)
        .style(Style::default().bg(Color::DarkGray).fg(message_color))
        .alignment(Alignment::Right);
    f.render_widget(message_paragraph, status_chunks[1]);
}
