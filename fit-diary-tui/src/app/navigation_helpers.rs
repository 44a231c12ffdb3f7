// src/app/navigation_helpers.rs
use ratatui::widgets::TableState;

pub fn table_next(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(i) if i >= len - 1 => 0,
        Some(i) => i + 1,
        None => 0,
    };
    state.select(Some(i));
}

pub fn table_previous(state: &mut TableState, len: usize) {
    if len == 0 {
        return;
    }
    let i = match state.selected() {
        Some(0) => len - 1,
        Some(i) => i - 1,
        None => len.saturating_sub(1),
    };
    state.select(Some(i));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_and_previous_wrap() {
        let mut state = TableState::default();
        table_next(&mut state, 3);
        assert_eq!(state.selected(), Some(0));
        table_previous(&mut state, 3);
        assert_eq!(state.selected(), Some(2));
        table_next(&mut state, 3);
        assert_eq!(state.selected(), Some(0));
    }

    #[test]
    fn empty_table_keeps_selection() {
        let mut state = TableState::default();
        table_next(&mut state, 0);
        table_previous(&mut state, 0);
        assert_eq!(state.selected(), None);
    }
}
