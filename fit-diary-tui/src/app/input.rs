// src/app/input.rs
use super::{
    modals::{handle_confirm_delete_modal_input, handle_record_form_modal_input},
    navigation_helpers::{table_next, table_previous},
    state::{ActiveModal, App},
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use fit_diary_lib::SortMode;

// Main key event handler method on App
impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Handle based on active modal first
        if self.active_modal != ActiveModal::None {
            return self.handle_modal_input(key);
        }

        let len = self.records.len();
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.active_modal = ActiveModal::Help,
            KeyCode::Char('k') | KeyCode::Up => table_previous(&mut self.record_table_state, len),
            KeyCode::Char('j') | KeyCode::Down => table_next(&mut self.record_table_state, len),
            KeyCode::Char('a') => self.open_add_record_modal(),
            KeyCode::Char('e') | KeyCode::Enter => self.open_edit_record_modal(),
            KeyCode::Char('d') | KeyCode::Delete => self.open_delete_confirmation_modal(),
            KeyCode::Char('r') => self.set_sort_mode(SortMode::Recent),
            KeyCode::Char('w') => self.set_sort_mode(SortMode::MostWater),
            KeyCode::Char('s') => self.toggle_sort_mode(),
            KeyCode::Char('c') => self.cycle_chart_metric(),
            _ => {}
        }
        Ok(())
    }

    // --- Modal Input Handling ---
    fn handle_modal_input(&mut self, key: KeyEvent) -> Result<()> {
        match self.active_modal {
            ActiveModal::Help => self.handle_help_modal_input(key),
            ActiveModal::RecordForm { .. } => handle_record_form_modal_input(self, key)?,
            ActiveModal::ConfirmDelete { .. } => handle_confirm_delete_modal_input(self, key)?,
            ActiveModal::None => {}
        }
        Ok(())
    }

    fn handle_help_modal_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') | KeyCode::Enter => {
                self.active_modal = ActiveModal::None;
            }
            _ => {} // Ignore other keys in help
        }
    }
}
