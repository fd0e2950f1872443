use std::time::{SystemTime, UNIX_EPOCH};

use crate::app::core::App;
use crate::constants::INK_PULSE_FRAMES;
use crate::tip::TipState;

impl App {
    pub fn next_item(&mut self) {
        let items_len = self.journal.len();
        if items_len == 0 {
            return;
        }
        let i = match self.entries_state.selected() {
            Some(i) if i >= items_len - 1 => i,
            Some(i) => i + 1,
            None => 0,
        };
        self.entries_state.select(Some(i));
    }

    pub fn previous_item(&mut self) {
        if self.journal.is_empty() {
            return;
        }
        let i = match self.entries_state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.entries_state.select(Some(i));
    }

    /// Status line for the tip sheet; pulses while the tip is prepared.
    pub fn get_ink_animation(&self) -> String {
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let frame = (millis / 200 % INK_PULSE_FRAMES.len() as u128) as usize;

        match self.tip_state() {
            TipState::Idle => "Pick a chip or type an amount".to_string(),
            TipState::Preparing => format!("Inking  {}", INK_PULSE_FRAMES[frame]),
            TipState::Confirm => "Waiting for your wallet…".to_string(),
            TipState::Sending => format!("Sending  {}", INK_PULSE_FRAMES[frame]),
            TipState::Done => "Thank you ✒".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::app::core::test_support::app;

    #[test]
    fn navigation_on_empty_journal_is_a_no_op() {
        let mut app = app();
        app.next_item();
        app.previous_item();
        assert_eq!(app.entries_state.selected(), None);
    }

    #[test]
    fn navigation_stays_in_bounds() {
        let mut app = app();
        for n in 0..3 {
            app.journal.add("", &format!("clip {n}"), "").unwrap();
        }
        app.next_item();
        assert_eq!(app.entries_state.selected(), Some(0));
        for _ in 0..5 {
            app.next_item();
        }
        assert_eq!(app.entries_state.selected(), Some(2));
        for _ in 0..5 {
            app.previous_item();
        }
        assert_eq!(app.entries_state.selected(), Some(0));
    }

    #[test]
    fn idle_animation_is_a_hint() {
        let app = app();
        assert_eq!(app.get_ink_animation(), "Pick a chip or type an amount");
    }
}
