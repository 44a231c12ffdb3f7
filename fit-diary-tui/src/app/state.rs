// fit-diary-tui/src/app/state.rs
use chrono::Duration;
use fit_diary_lib::{AppService, ChartPoint, FormField, Metric, Record};
use ratatui::widgets::TableState;
use std::time::Instant;

const MESSAGE_LIFETIME_SECS: i64 = 5;

// Fields within the record form modal
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordFormField {
    Water,
    Exercise,
    Calories,
    Save,
    Cancel,
}

impl RecordFormField {
    pub const fn next(self) -> Self {
        match self {
            Self::Water => Self::Exercise,
            Self::Exercise => Self::Calories,
            Self::Calories => Self::Save,
            Self::Save => Self::Cancel,
            Self::Cancel => Self::Water,
        }
    }

    pub const fn previous(self) -> Self {
        match self {
            Self::Water => Self::Cancel,
            Self::Exercise => Self::Water,
            Self::Calories => Self::Exercise,
            Self::Save => Self::Calories,
            Self::Cancel => Self::Save,
        }
    }

    /// The form input behind this field, if it is a text input.
    pub const fn input(self) -> Option<FormField> {
        match self {
            Self::Water => Some(FormField::Water),
            Self::Exercise => Some(FormField::Exercise),
            Self::Calories => Some(FormField::Calories),
            Self::Save | Self::Cancel => None,
        }
    }
}

impl From<FormField> for RecordFormField {
    fn from(field: FormField) -> Self {
        match field {
            FormField::Water => Self::Water,
            FormField::Exercise => Self::Exercise,
            FormField::Calories => Self::Calories,
        }
    }
}

// Represents the state of active modals
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActiveModal {
    None,
    Help,
    RecordForm {
        focused_field: RecordFormField,
        error_message: Option<String>,
    },
    ConfirmDelete {
        record_id: u64,
        position: usize, // For display purposes ("Delete record X?")
    },
}

// Holds the application state
pub struct App {
    pub service: AppService,
    pub should_quit: bool,
    pub active_modal: ActiveModal,
    pub status_message: Option<String>, // For status bar notices
    pub status_is_error: bool,
    pub message_clear_time: Option<Instant>,

    // === Diary screen state ===
    pub records: Vec<Record>, // Current ordered view
    pub record_table_state: TableState,
    pub chart_metric: Metric,
    pub chart_points: Vec<ChartPoint>,
}

impl App {
    pub fn new(service: AppService) -> Self {
        let chart_metric = service.config.chart_metric;
        let mut app = Self {
            service,
            should_quit: false,
            active_modal: ActiveModal::None,
            status_message: None,
            status_is_error: false,
            message_clear_time: None,
            records: Vec::new(),
            record_table_state: TableState::default(),
            chart_metric,
            chart_points: Vec::new(),
        };
        app.record_table_state.select(Some(0));
        app
    }

    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.show_message(msg.into(), false);
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.show_message(msg.into(), true);
    }

    fn show_message(&mut self, msg: String, is_error: bool) {
        self.status_message = Some(msg);
        self.status_is_error = is_error;
        self.message_clear_time = Duration::seconds(MESSAGE_LIFETIME_SECS)
            .to_std()
            .ok()
            .map(|lifetime| Instant::now() + lifetime);
    }

    // Called from refresh_data before each draw
    pub(crate) fn clear_expired_message(&mut self) {
        if let Some(clear_time) = self.message_clear_time {
            if Instant::now() >= clear_time {
                self.status_message = None;
                self.message_clear_time = None;
            }
        }
    }

    pub fn selected_record(&self) -> Option<&Record> {
        self.record_table_state
            .selected()
            .and_then(|i| self.records.get(i))
    }
}
