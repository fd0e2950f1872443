use crate::error::TipError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TipState {
    #[default]
    Idle,
    Preparing,
    Confirm,
    Sending,
    Done,
}

impl TipState {
    pub fn name(&self) -> &'static str {
        match self {
            TipState::Idle => "idle",
            TipState::Preparing => "preparing",
            TipState::Confirm => "confirm",
            TipState::Sending => "sending",
            TipState::Done => "done",
        }
    }

    /// Label of the send control in this state.
    pub fn button_label(&self) -> &'static str {
        match self {
            TipState::Idle => "Send USDC",
            TipState::Preparing => "Preparing tip…",
            TipState::Confirm => "Confirm in wallet",
            TipState::Sending => "Sending…",
            TipState::Done => "Send again",
        }
    }

    /// A tip is in flight; the send control is disabled.
    pub fn is_busy(&self) -> bool {
        matches!(self, TipState::Preparing | TipState::Confirm | TipState::Sending)
    }

    pub fn can_transition(&self, next: TipState) -> bool {
        use TipState::*;
        matches!(
            (self, next),
            (Idle, Preparing)
                | (Preparing, Confirm)
                | (Confirm, Sending)
                | (Sending, Done)
                | (Done, Idle)
                | (Preparing, Idle)
                | (Confirm, Idle)
                | (Sending, Idle)
        )
    }
}

/// Single owner of the tip session state.
#[derive(Debug, Default)]
pub struct TipMachine {
    state: TipState,
}

impl TipMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TipState {
        self.state
    }

    pub fn transition(&mut self, next: TipState) -> Result<(), TipError> {
        if !self.state.can_transition(next) {
            return Err(TipError::InvalidTransition {
                from: self.state.name(),
                to: next.name(),
            });
        }
        tracing::debug!(from = self.state.name(), to = next.name(), "tip state");
        self.state = next;
        Ok(())
    }

    /// Returns to idle from any in-flight state after a failure.
    pub fn fail(&mut self) {
        if self.state.is_busy() {
            self.state = TipState::Idle;
        }
    }
}
