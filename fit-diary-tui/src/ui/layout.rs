// fit-diary-tui/src/ui/layout.rs
use crate::{
    app::{ActiveModal, App},
    ui::{
        diary::{render_chart, render_record_table, render_sort_bar},
        modals::render_modal,
        status_bar::render_status_bar,
    },
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    widgets::Paragraph,
    Frame,
};

// Main UI rendering function
pub fn render_ui(f: &mut Frame, app: &mut App) {
    let size = f.size();

    // Title, chart, sort buttons, record list, status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),      // Title
            Constraint::Percentage(40), // Chart
            Constraint::Length(1),      // Sort bar
            Constraint::Min(0),         // Records
            Constraint::Length(1),      // Status Bar
        ])
        .split(size);

    let title = Paragraph::new("My Fit Diary".bold())
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);
    f.render_widget(title, main_chunks[0]);

    render_chart(f, app, main_chunks[1]);
    render_sort_bar(f, app, main_chunks[2]);
    render_record_table(f, app, main_chunks[3]);
    render_status_bar(f, app, main_chunks[4]);

    // Render modal last if active
    if app.active_modal != ActiveModal::None {
        render_modal(f, app);
    }
}

/// Helper function to create a centered rectangle for modals
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let percent_x = percent_x.min(100);
    let percent_y = percent_y.min(100);
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Centered rectangle with a fixed height in rows, clamped to the frame.
pub fn centered_fixed_rect(percent_x: u16, height: u16, r: Rect) -> Rect {
    let height = height.min(r.height);
    let horizontal = centered_rect(percent_x, 100, r);
    Rect {
        x: horizontal.x,
        y: r.y + (r.height - height) / 2,
        width: horizontal.width,
        height,
    }
}
