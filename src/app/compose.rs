use std::time::{Duration, Instant};

use tracing::warn;

use crate::app::core::{App, Focus, ScrapFlight};
use crate::constants::SCRAP_FLIGHT_MILLIS;
use crate::error::JournalError;
use crate::notice::MessageType;

impl App {
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Url => Focus::Clip,
            Focus::Clip => Focus::Url,
        };
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Focus::Url => &mut self.url_input,
            Focus::Clip => &mut self.clip_input,
        }
    }

    pub fn input_char(&mut self, c: char) {
        self.focused_input().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_input().pop();
    }

    pub fn newline(&mut self) {
        if self.focus == Focus::Clip {
            self.clip_input.push('\n');
        }
    }

    pub fn clear_inputs(&mut self) {
        self.url_input.clear();
        self.clip_input.clear();
        self.set_message(MessageType::Info, "Cleared.");
    }

    pub fn new_prompt(&mut self) {
        self.prompts.shuffle(&mut rand::thread_rng());
    }

    /// Tears the current clip off and starts its flight into the journal.
    pub fn tear_clip(&mut self) {
        if self.scrap.is_some() {
            return;
        }
        let clip = self.clip_input.trim();
        if clip.is_empty() {
            self.set_message(MessageType::Error, JournalError::EmptyClip.to_string());
            return;
        }
        self.scrap = Some(ScrapFlight {
            url: self.url_input.trim().to_string(),
            clip: clip.to_string(),
            prompt: self.prompts.current().to_string(),
            started_at: Instant::now(),
        });
    }

    /// Fraction of the flight already covered, `None` when nothing flies.
    pub fn scrap_progress(&self, now: Instant) -> Option<f64> {
        self.scrap.as_ref().map(|s| {
            let elapsed = now.saturating_duration_since(s.started_at).as_millis() as f64;
            (elapsed / SCRAP_FLIGHT_MILLIS as f64).min(1.0)
        })
    }

    pub(crate) fn land_scrap(&mut self, now: Instant) {
        let landed = self
            .scrap
            .as_ref()
            .is_some_and(|s| now.saturating_duration_since(s.started_at) >= Duration::from_millis(SCRAP_FLIGHT_MILLIS));
        if !landed {
            return;
        }
        let Some(scrap) = self.scrap.take() else {
            return;
        };

        match self.journal.add(&scrap.url, &scrap.clip, &scrap.prompt) {
            Ok(entry) => {
                self.fresh_entry = Some(entry.id);
            }
            Err(JournalError::Storage(e)) => {
                // kept in memory; only the save failed
                warn!("Failed to save journal: {}", e);
                self.fresh_entry = self.journal.entries().first().map(|e| e.id);
                self.set_message(MessageType::Error, format!("Saved for this session only: {}", e));
            }
            Err(e) => {
                self.set_message(MessageType::Error, e.to_string());
                return;
            }
        }
        self.entries_state.select(Some(0));
        self.clip_input.clear();
        self.url_input.clear();
    }
}
