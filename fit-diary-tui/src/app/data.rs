// fit-diary-tui/src/app/data.rs
use super::state::App;

impl App {
    // Recompute the ordered view and the chart from scratch before each draw
    pub fn refresh_data(&mut self) {
        self.clear_expired_message();

        self.records = self.service.displayed_records();
        self.chart_points = self.service.chart(self.chart_metric);

        // Clamp selection index
        if self.records.is_empty() {
            self.record_table_state.select(None);
        } else if self.record_table_state.selected().unwrap_or(0) >= self.records.len() {
            self.record_table_state
                .select(Some(self.records.len().saturating_sub(1)));
        } else if self.record_table_state.selected().is_none() {
            self.record_table_state.select(Some(0));
        }
    }

    /// Moves the selection onto the record with `id`, if it is displayed.
    pub(crate) fn select_record(&mut self, id: u64) {
        if let Some(index) = self.records.iter().position(|r| r.id == id) {
            self.record_table_state.select(Some(index));
        }
    }
}
