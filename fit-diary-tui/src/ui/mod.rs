// fit-diary-tui/src/ui/mod.rs
mod diary;
mod layout;
mod modals;
mod status_bar;

pub use layout::render_ui;
