use crate::app::App;
use fit_diary_lib::{format_number, SortMode};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{
        block::{Position, Title},
        Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Table,
    },
    Frame,
};

const BAR_WIDTH: u16 = 10;

pub fn render_chart(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("{} per record", app.chart_metric))
        .title(
            Title::from(" [c] change metric ")
                .position(Position::Bottom)
                .alignment(Alignment::Right),
        );

    if app.chart_points.is_empty() {
        let empty = Paragraph::new("No records yet. Press [a] to add one.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    // Bars hold integers, so values are scaled to hundredths
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bars: Vec<Bar> = app
        .chart_points
        .iter()
        .map(|p| {
            Bar::default()
                .value((p.value * 100.0).round() as u64)
                .text_value(format_number(p.value))
                .label(Line::from(p.label.clone()))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(BAR_WIDTH)
        .bar_gap(2)
        .bar_style(Style::default().fg(Color::Cyan))
        .value_style(Style::default().fg(Color::Black).bg(Color::Cyan))
        .label_style(Style::default().fg(Color::Gray));

    f.render_widget(chart, area);
}

pub fn render_sort_bar(f: &mut Frame, app: &App, area: Rect) {
    let button = |mode: SortMode, key: &'static str| {
        let text = format!(" [{key}] {mode} ");
        if app.service.state.sort_mode == mode {
            Span::styled(text, Style::default().fg(Color::Black).bg(Color::Yellow))
        } else {
            Span::raw(text)
        }
    };
    let line = Line::from(vec![
        Span::raw("Sort: "),
        button(SortMode::Recent, "r"),
        Span::raw(" "),
        button(SortMode::MostWater, "w"),
    ]);
    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

pub fn render_record_table(f: &mut Frame, app: &mut App, area: Rect) {
    let editing_id = app.service.state.edit.record().map(|r| r.id);

    let table_block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Records ({})", app.records.len()))
        .border_style(Style::default().fg(Color::Yellow));

    let header_style = Style::default().fg(Color::LightBlue);
    let header = Row::new(vec![
        Cell::from("#").style(header_style),
        Cell::from("Date").style(header_style),
        Cell::from("Water (L)").style(header_style),
        Cell::from("Exercise (min)").style(header_style),
        Cell::from("Calories").style(header_style),
    ])
    .height(1)
    .bottom_margin(1);

    let rows: Vec<Row> = app
        .records
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let row = Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(app.service.format_date(r)),
                Cell::from(format_number(r.water_liters())),
                Cell::from(format_number(r.exercise_minutes())),
                Cell::from(format_number(r.calories())),
            ]);
            if editing_id == Some(r.id) {
                row.style(Style::default().italic())
            } else {
                row
            }
        })
        .collect();

    let widths = [
        Constraint::Length(4),
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(15),
        Constraint::Min(10),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(table_block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    f.render_stateful_widget(table, area, &mut app.record_table_state);
}
