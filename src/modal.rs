//! Lifecycle of the create, edit and delete dialogs.
//!
//! `Closed -> Open -> (cancel -> Closed) | (confirm -> Pending -> Closed | Failed)`.
//! Transitions that do not apply to the current state leave it unchanged.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ModalState {
    #[default]
    Closed,
    Open,
    Pending,
    /// Still open, showing why the last attempt failed.
    Failed(String),
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        !matches!(self, ModalState::Closed)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ModalState::Pending)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ModalState::Failed(msg) => Some(msg),
            _ => None,
        }
    }

    pub fn open(&mut self) {
        if *self == ModalState::Closed {
            *self = ModalState::Open;
        }
    }

    /// Dismiss without acting. Ignored while a request is in flight.
    pub fn cancel(&mut self) {
        if matches!(self, ModalState::Open | ModalState::Failed(_)) {
            *self = ModalState::Closed;
        }
    }

    /// Returns true when the caller should now start the action.
    pub fn confirm(&mut self) -> bool {
        if matches!(self, ModalState::Open | ModalState::Failed(_)) {
            *self = ModalState::Pending;
            true
        } else {
            false
        }
    }

    pub fn resolve<T, E: ToString>(&mut self, outcome: &Result<T, E>) {
        if !self.is_pending() {
            return;
        }
        *self = match outcome {
            Ok(_) => ModalState::Closed,
            Err(e) => ModalState::Failed(e.to_string()),
        };
    }
}
