// fit-diary-tui/src/app.rs
mod actions;
mod data;
mod input;
mod modals;
mod navigation_helpers;
pub mod state;

pub use state::{ActiveModal, App, RecordFormField};
