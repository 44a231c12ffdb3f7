// fit-diary-tui/src/app/modals.rs
use super::state::{ActiveModal, App, RecordFormField};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use fit_diary_lib::{format_number, parse_number, FormField, Intent, Outcome};

// Arrow-key step for each numeric input
const fn step_for(field: FormField) -> f64 {
    match field {
        FormField::Water => 0.25,
        FormField::Exercise => 5.0,
        FormField::Calories => 50.0,
    }
}

/// Nudges a numeric input by `delta`, never going below `min_val`.
/// Empty input counts as zero; unparsable input is left alone.
pub(crate) fn modify_numeric_input(input_str: &mut String, delta: f64, min_val: f64) {
    let current = if input_str.trim().is_empty() {
        0.0
    } else {
        match parse_number(input_str) {
            Some(v) => v,
            None => return, // Cannot parse, do nothing
        }
    };
    let updated = (current + delta).max(min_val);
    *input_str = format_number((updated * 100.0).round() / 100.0);
}

fn close_record_form(app: &mut App) {
    app.service.dispatch(Intent::CancelEdit);
    app.active_modal = ActiveModal::None;
}

fn submit_record_form(app: &mut App) {
    match app.service.submit_form() {
        Ok(outcome) => {
            app.active_modal = ActiveModal::None;
            app.report(&outcome);
            app.refresh_data();
            match outcome {
                Outcome::Created(record) | Outcome::Updated(record) => app.select_record(record.id),
                Outcome::NotFound(id) => app.set_error(format!("Record {id} no longer exists.")),
                _ => {}
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "record form rejected");
            if let ActiveModal::RecordForm {
                ref mut focused_field,
                ref mut error_message,
            } = app.active_modal
            {
                *focused_field = e.field().into();
                *error_message = Some(e.to_string());
            }
        }
    }
}

pub fn handle_record_form_modal_input(app: &mut App, key: KeyEvent) -> Result<()> {
    let mut should_submit = false;
    let mut should_close = false;

    if let ActiveModal::RecordForm {
        ref mut focused_field,
        ref mut error_message,
    } = app.active_modal
    {
        *error_message = None; // Clear error on input

        if key.code == KeyCode::BackTab
            || (key.modifiers == KeyModifiers::SHIFT && key.code == KeyCode::Tab)
        {
            *focused_field = focused_field.previous();
        } else if key.code == KeyCode::Esc {
            should_close = true;
        } else if let Some(input) = focused_field.input() {
            let text = app.service.state.form.input_mut(input);
            match key.code {
                KeyCode::Char(c) if c.is_ascii_digit() || c == '.' || c == ',' || c == '-' => {
                    text.push(c);
                }
                KeyCode::Backspace => {
                    text.pop();
                }
                KeyCode::Up => modify_numeric_input(text, step_for(input), 0.0),
                KeyCode::Down => modify_numeric_input(text, -step_for(input), 0.0),
                KeyCode::Enter | KeyCode::Tab => *focused_field = focused_field.next(),
                _ => {}
            }
        } else {
            // Buttons row
            match (key.code, *focused_field) {
                (KeyCode::Enter, RecordFormField::Save) => should_submit = true,
                (KeyCode::Enter, RecordFormField::Cancel) => should_close = true,
                (KeyCode::Left | KeyCode::Right, RecordFormField::Save) => {
                    *focused_field = RecordFormField::Cancel;
                }
                (KeyCode::Left | KeyCode::Right, RecordFormField::Cancel) => {
                    *focused_field = RecordFormField::Save;
                }
                (KeyCode::Tab | KeyCode::Down, field) => *focused_field = field.next(),
                (KeyCode::Up, field) => *focused_field = field.previous(),
                _ => {}
            }
        }
    } // End mutable borrow of app.active_modal

    if should_close {
        close_record_form(app);
    } else if should_submit {
        submit_record_form(app);
    }
    Ok(())
}

pub fn handle_confirm_delete_modal_input(app: &mut App, key: KeyEvent) -> Result<()> {
    if let ActiveModal::ConfirmDelete { record_id, .. } = app.active_modal {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => {
                app.active_modal = ActiveModal::None;
                app.delete_record(record_id);
            }
            KeyCode::Char('n' | 'N') | KeyCode::Esc => {
                app.active_modal = ActiveModal::None;
            }
            _ => {}
        }
    }
    Ok(())
}
