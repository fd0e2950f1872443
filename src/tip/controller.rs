use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::mpsc::UnboundedSender;
use tokio::time::sleep;
use tracing::{info, warn};

use super::amount::{parse_amount, ParsedAmount};
use super::attribution::AttributionEncoder;
use super::send::send_usdc;
use super::state::{TipMachine, TipState};
use crate::config::TipConfig;
use crate::error::TipError;
use crate::notice::Notice;
use crate::wallet::WalletProvider;

/// Outcome of pressing the send control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Press {
    /// `done` was acknowledged; back to `idle`.
    Reset,
    /// A tip is already in flight.
    Busy,
    /// Nothing started; the error was posted as a notice.
    Rejected(TipError),
    /// Entered `preparing`; hand the amount to [`TipController::run`].
    Started(ParsedAmount),
}

/// Owns the tip session and drives it from a press to `done` or back to
/// `idle`. Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct TipController {
    machine: Arc<Mutex<TipMachine>>,
    provider: Option<Arc<dyn WalletProvider>>,
    attribution: Arc<dyn AttributionEncoder>,
    config: TipConfig,
    notices: UnboundedSender<Notice>,
}

impl TipController {
    pub fn new(
        provider: Option<Arc<dyn WalletProvider>>,
        attribution: Arc<dyn AttributionEncoder>,
        config: TipConfig,
        notices: UnboundedSender<Notice>,
    ) -> Self {
        Self {
            machine: Arc::new(Mutex::new(TipMachine::new())),
            provider,
            attribution,
            config,
            notices,
        }
    }

    fn machine(&self) -> MutexGuard<'_, TipMachine> {
        self.machine.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> TipState {
        self.machine().state()
    }

    pub fn wallet_name(&self) -> Option<String> {
        self.provider.as_ref().map(|p| p.name())
    }

    fn notify(&self, notice: Notice) {
        // The receiver only disappears on shutdown.
        let _ = self.notices.send(notice);
    }

    /// Applies the idle/done guards and, for a valid amount, enters
    /// `preparing`. The guard and the transition happen under one lock, so
    /// only one flow can ever be started.
    pub fn press(&self, input: &str) -> Press {
        let mut machine = self.machine();
        match machine.state() {
            TipState::Done => {
                let _ = machine.transition(TipState::Idle);
                Press::Reset
            }
            state if state.is_busy() => Press::Busy,
            _ => {
                let amount = match parse_amount(input) {
                    Ok(amount) => amount,
                    Err(e) => {
                        let err = TipError::from(e);
                        self.notify(Notice::error(err.user_message()));
                        return Press::Rejected(err);
                    }
                };
                if !self.config.is_enabled() {
                    let err = TipError::NotConfigured;
                    self.notify(Notice::error(err.user_message()));
                    return Press::Rejected(err);
                }
                if let Err(e) = machine.transition(TipState::Preparing) {
                    return Press::Rejected(e);
                }
                info!(amount = %amount.display, "tip started");
                Press::Started(amount)
            }
        }
    }

    /// Runs a started tip to completion. Every failure is posted as a
    /// notice and unwinds to `idle`. Returns the final state.
    pub async fn run(&self, amount: ParsedAmount) -> TipState {
        sleep(self.config.prepare_delay).await;

        if let Err(e) = self.deliver(&amount).await {
            warn!(error = ?e, "tip failed");
            self.notify(Notice::error(e.user_message()));
            self.machine().fail();
        }
        self.state()
    }

    /// `press` followed by `run` when a flow was started.
    #[cfg(test)]
    pub async fn submit(&self, input: &str) -> TipState {
        match self.press(input) {
            Press::Started(amount) => self.run(amount).await,
            _ => self.state(),
        }
    }

    async fn deliver(&self, amount: &ParsedAmount) -> Result<(), TipError> {
        self.machine().transition(TipState::Confirm)?;

        send_usdc(
            self.provider.as_deref(),
            self.attribution.as_ref(),
            &self.config,
            amount.units,
        )
        .await?;

        self.machine().transition(TipState::Sending)?;
        sleep(self.config.sending_delay).await;
        self.machine().transition(TipState::Done)?;

        info!(amount = %amount.display, "tip sent");
        self.notify(Notice::success("Tip sent (or queued). Thank you."));
        Ok(())
    }
}
