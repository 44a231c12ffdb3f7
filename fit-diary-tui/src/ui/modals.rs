// fit-diary-tui/src/ui/modals.rs
use crate::{
    app::{ActiveModal, App, RecordFormField},
    ui::layout::{centered_fixed_rect, centered_rect},
};
use fit_diary_lib::RecordForm;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render_modal(f: &mut Frame, app: &App) {
    match &app.active_modal {
        ActiveModal::Help => render_help_modal(f),
        ActiveModal::RecordForm {
            focused_field,
            error_message,
        } => render_record_form_modal(f, app, *focused_field, error_message.as_deref()),
        ActiveModal::ConfirmDelete { position, .. } => render_confirm_delete_modal(f, *position),
        ActiveModal::None => {}
    }
}

fn section(title: &'static str) -> Line<'static> {
    Line::from(Span::styled(title, Style::new().bold().underlined()))
}

fn render_help_modal(f: &mut Frame) {
    let block = Block::default()
        .title("Help (?)")
        .borders(Borders::ALL)
        .title_style(Style::new().bold())
        .border_style(Style::new().yellow());
    let area = centered_rect(60, 70, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let help_text = vec![
        section("--- Global ---"),
        Line::from(" q: Quit Application"),
        Line::from(" ?: Show/Hide This Help"),
        Line::from(""),
        section("--- Records ---"),
        Line::from(" k / ↑: Navigate Up"),
        Line::from(" j / ↓: Navigate Down"),
        Line::from(" a: Add New Record"),
        Line::from(" e / Enter: Edit Selected Record"),
        Line::from(" d / Delete: Delete Selected Record"),
        Line::from(""),
        section("--- Sorting & Chart ---"),
        Line::from(" r: Sort by Most Recent"),
        Line::from(" w: Sort by Most Water"),
        Line::from(" s: Toggle Sort"),
        Line::from(" c: Cycle Chart Metric (Water > Exercise > Calories)"),
        Line::from(""),
        section("--- Record Form ---"),
        Line::from(" Tab / Enter: Next Field"),
        Line::from(" Shift+Tab: Previous Field"),
        Line::from(" ↑ / ↓: Increase / Decrease Number"),
        Line::from(" Esc: Cancel"),
        Line::from(""),
        Line::from(Span::styled(
            " Press Esc, ?, or Enter to close ",
            Style::new().italic().yellow(),
        )),
    ];

    let paragraph = Paragraph::new(help_text).wrap(Wrap { trim: false });
    f.render_widget(
        paragraph,
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}

fn focus_style(focused: bool) -> Style {
    let base = Style::default().fg(Color::White);
    if focused {
        base.reversed()
    } else {
        base
    }
}

fn render_input(
    f: &mut Frame,
    label: &str,
    value: &str,
    focused: bool,
    label_area: Rect,
    input_area: Rect,
) {
    f.render_widget(Paragraph::new(label.to_string()), label_area);
    // Padded area within the line for the text itself
    let text_area = input_area.inner(&Margin {
        vertical: 0,
        horizontal: 1,
    });
    f.render_widget(
        Paragraph::new(value.to_string()).style(focus_style(focused)),
        text_area,
    );
    if focused {
        #[allow(clippy::cast_possible_truncation)]
        let cursor_x = (text_area.x + value.chars().count() as u16)
            .min(text_area.right().saturating_sub(1)); // Clamp to padded area
        f.set_cursor(cursor_x, text_area.y);
    }
}

fn render_record_form_modal(
    f: &mut Frame,
    app: &App,
    focused_field: RecordFormField,
    error_message: Option<&str>,
) {
    let title = match app.service.state.edit.record() {
        Some(record) => format!("Edit Record ({})", app.service.format_date(record)),
        None => "Register your day".to_string(),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::new().yellow());
    let area = centered_fixed_rect(50, 13, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Water label
            Constraint::Length(1), // Water input
            Constraint::Length(1), // Exercise label
            Constraint::Length(1), // Exercise input
            Constraint::Length(1), // Calories label
            Constraint::Length(1), // Calories input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons row
            Constraint::Length(1), // Error Message
            Constraint::Min(0),
        ])
        .split(area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }));

    let RecordForm {
        water,
        exercise,
        calories,
    } = &app.service.state.form;
    render_input(
        f,
        "How many liters of water did you drink today?",
        water,
        focused_field == RecordFormField::Water,
        chunks[0],
        chunks[1],
    );
    render_input(
        f,
        "How many minutes of exercise did you do today?",
        exercise,
        focused_field == RecordFormField::Exercise,
        chunks[2],
        chunks[3],
    );
    render_input(
        f,
        "How many calories did you eat today?",
        calories,
        focused_field == RecordFormField::Calories,
        chunks[4],
        chunks[5],
    );

    let button_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[7]);

    let save_label = if app.service.state.edit.is_editing() {
        " Update "
    } else {
        " Save "
    };
    let save_button = Paragraph::new(save_label)
        .alignment(Alignment::Center)
        .style(focus_style(focused_field == RecordFormField::Save));
    f.render_widget(save_button, button_layout[0]);

    let cancel_button = Paragraph::new(" Cancel ")
        .alignment(Alignment::Center)
        .style(focus_style(focused_field == RecordFormField::Cancel));
    f.render_widget(cancel_button, button_layout[1]);

    if let Some(err) = error_message {
        f.render_widget(
            Paragraph::new(err.to_string()).style(Style::default().fg(Color::Red)),
            chunks[8],
        );
    }
}

fn render_confirm_delete_modal(f: &mut Frame, position: usize) {
    let block = Block::default()
        .title("Confirm Deletion")
        .borders(Borders::ALL)
        .border_style(Style::new().red());
    let area = centered_fixed_rect(40, 6, f.size());
    f.render_widget(Clear, area);
    f.render_widget(block, area);

    let text = vec![
        Line::from(format!("Delete record #{}?", position + 1)),
        Line::from(""),
        Line::from(Span::styled(" [y]es / [n]o ", Style::new().italic())),
    ];
    f.render_widget(
        Paragraph::new(text).alignment(Alignment::Center),
        area.inner(&Margin {
            vertical: 1,
            horizontal: 1,
        }),
    );
}
