use std::time::{Duration, Instant};

use ratatui::widgets::ListState;
use tokio::sync::mpsc::UnboundedReceiver;
use uuid::Uuid;

use crate::constants::TOAST_MILLIS;
use crate::host::HostEnv;
use crate::journal::Journal;
use crate::notice::{MessageType, Notice};
use crate::prompts::PromptDeck;
use crate::tip::TipController;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Url,
    Clip,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message_type: MessageType,
    pub message: String,
    pub expires_at: Instant,
}

/// A clip on its way into the journal; committed when the flight lands.
#[derive(Debug, Clone)]
pub struct ScrapFlight {
    pub url: String,
    pub clip: String,
    pub prompt: String,
    pub started_at: Instant,
}

pub struct App {
    pub journal: Journal,
    pub prompts: PromptDeck,
    pub url_input: String,
    pub clip_input: String,
    pub focus: Focus,
    pub entries_state: ListState,
    pub host_env: HostEnv,
    pub tips: TipController,
    pub notices: UnboundedReceiver<Notice>,
    pub toast: Option<Toast>,
    pub is_tip_open: bool,
    pub selected_preset: Option<usize>,
    pub custom_amount: String,
    pub scrap: Option<ScrapFlight>,
    pub fresh_entry: Option<Uuid>,
}

impl App {
    pub fn new(
        journal: Journal,
        prompts: PromptDeck,
        tips: TipController,
        notices: UnboundedReceiver<Notice>,
        host_env: HostEnv,
    ) -> App {
        let mut app = App {
            journal,
            prompts,
            url_input: String::new(),
            clip_input: String::new(),
            focus: Focus::Clip,
            entries_state: ListState::default(),
            host_env,
            tips,
            notices,
            toast: None,
            is_tip_open: false,
            selected_preset: None,
            custom_amount: String::new(),
            scrap: None,
            fresh_entry: None,
        };
        if !app.journal.is_empty() {
            app.entries_state.select(Some(0));
        }
        app
    }

    // show a toast, replacing the current one
    pub fn set_message(&mut self, message_type: MessageType, message: impl Into<String>) {
        self.toast = Some(Toast {
            message_type,
            message: message.into(),
            expires_at: Instant::now() + Duration::from_millis(TOAST_MILLIS),
        });
    }

    /// Pulls notices posted by background tasks into the toast slot.
    pub fn drain_notices(&mut self) {
        while let Ok(notice) = self.notices.try_recv() {
            self.set_message(notice.message_type, notice.message);
        }
    }

    /// Per-frame housekeeping: notices, toast expiry, landing scraps.
    pub fn tick(&mut self, now: Instant) {
        self.drain_notices();
        if self.toast.as_ref().is_some_and(|t| now >= t.expires_at) {
            self.toast = None;
        }
        self.land_scrap(now);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use tokio::sync::mpsc::unbounded_channel;

    use super::*;
    use crate::config::TipConfig;
    use crate::storage::{KeyValueStore, MemoryStore};
    use crate::tip::Erc8021;

    pub fn app_with_store(store: Arc<dyn KeyValueStore>) -> App {
        let (tx, rx) = unbounded_channel();
        let tips = TipController::new(None, Arc::new(Erc8021), TipConfig::default(), tx);
        App::new(
            Journal::load(store),
            PromptDeck::for_day(0),
            tips,
            rx,
            HostEnv::Standalone,
        )
    }

    pub fn app() -> App {
        app_with_store(Arc::new(MemoryStore::new()))
    }
}
