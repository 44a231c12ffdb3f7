// fit-diary-tui/src/app/actions.rs
use super::state::{ActiveModal, App, RecordFormField};
use fit_diary_lib::{Intent, Outcome, SortMode};

impl App {
    pub fn open_add_record_modal(&mut self) {
        // A fresh form; any stale session is dropped
        self.service.dispatch(Intent::CancelEdit);
        self.active_modal = ActiveModal::RecordForm {
            focused_field: RecordFormField::Water,
            error_message: None,
        };
    }

    pub fn open_edit_record_modal(&mut self) {
        let Some(id) = self.selected_record().map(|r| r.id) else {
            return;
        };
        match self.service.dispatch(Intent::BeginEdit(id)) {
            Outcome::EditStarted(_) => {
                self.active_modal = ActiveModal::RecordForm {
                    focused_field: RecordFormField::Water,
                    error_message: None,
                };
            }
            _ => self.set_error(format!("Record {id} is no longer available.")),
        }
    }

    pub fn open_delete_confirmation_modal(&mut self) {
        if let Some(position) = self.record_table_state.selected() {
            if let Some(record) = self.records.get(position) {
                self.active_modal = ActiveModal::ConfirmDelete {
                    record_id: record.id,
                    position,
                };
            }
        }
    }

    pub fn delete_record(&mut self, id: u64) {
        let outcome = self.service.dispatch(Intent::Delete(id));
        self.report(&outcome);
        self.refresh_data();
    }

    pub fn set_sort_mode(&mut self, mode: SortMode) {
        let selected = self.selected_record().map(|r| r.id);
        self.service.dispatch(Intent::SetSortMode(mode));
        self.refresh_data();
        // Keep the cursor on the same record across re-sorts
        if let Some(id) = selected {
            self.select_record(id);
        }
        self.set_message(format!("Sorted by: {mode}"));
    }

    pub fn toggle_sort_mode(&mut self) {
        self.set_sort_mode(self.service.state.sort_mode.toggled());
    }

    pub fn cycle_chart_metric(&mut self) {
        self.chart_metric = self.chart_metric.next();
        self.refresh_data();
    }

    /// Shows the outcome's confirmation text, if it has one.
    pub(crate) fn report(&mut self, outcome: &Outcome) {
        if let Some(msg) = outcome.message() {
            self.set_message(msg);
        }
    }
}
