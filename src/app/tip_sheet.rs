use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;

use crate::app::core::App;
use crate::constants::TIP_PRESETS;
use crate::tip::{Press, TipState};

impl App {
    pub fn open_tip(&mut self) {
        self.is_tip_open = true;
    }

    pub fn close_tip(&mut self) {
        self.is_tip_open = false;
    }

    pub fn tip_state(&self) -> TipState {
        self.tips.state()
    }

    /// Moves the chip selection by `delta`, wrapping around the presets.
    pub fn cycle_preset(&mut self, delta: isize) {
        let len = TIP_PRESETS.len() as isize;
        let next = match self.selected_preset {
            Some(i) => (i as isize + delta).rem_euclid(len),
            None if delta >= 0 => 0,
            None => len - 1,
        };
        self.select_preset(next as usize);
    }

    pub fn select_preset(&mut self, index: usize) {
        if index < TIP_PRESETS.len() {
            self.selected_preset = Some(index);
            self.custom_amount.clear();
        }
    }

    pub fn custom_amount_char(&mut self, c: char) {
        self.custom_amount.push(c);
        if !self.custom_amount.trim().is_empty() {
            self.selected_preset = None;
        }
    }

    pub fn custom_amount_backspace(&mut self) {
        self.custom_amount.pop();
    }

    /// The chip when one is selected, the custom field otherwise.
    pub fn effective_amount(&self) -> String {
        match self.selected_preset {
            Some(i) => TIP_PRESETS[i].to_string(),
            None => self.custom_amount.trim().to_string(),
        }
    }

    /// Presses the send control and, when a tip starts, runs it on a
    /// background task so the UI keeps drawing every state.
    pub async fn handle_send_tip(app: Arc<Mutex<App>>) -> Option<JoinHandle<TipState>> {
        let (tips, press) = {
            let app_guard = app.lock().await;
            let tips = app_guard.tips.clone();
            let press = tips.press(&app_guard.effective_amount());
            (tips, press)
        };

        match press {
            Press::Started(amount) => Some(tokio::spawn(async move { tips.run(amount).await })),
            Press::Reset | Press::Busy | Press::Rejected(_) => None,
        }
    }
}
