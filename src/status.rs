use std::fmt;

use log::debug;

use crate::error::DappError;

/// Outcome of the most recent action, as shown under the action panels.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum StatusMessage {
    #[default]
    Idle,
    Pending(String),
    Success(String),
    Error(String),
}

impl From<&DappError> for StatusMessage {
    fn from(err: &DappError) -> Self {
        StatusMessage::Error(err.to_string())
    }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::Idle => Ok(()),
            StatusMessage::Pending(msg) | StatusMessage::Success(msg) => f.write_str(msg),
            StatusMessage::Error(msg) => write!(f, "Error: {}", msg),
        }
    }
}

/// Handle given to an action when it starts; only the newest one may settle
/// the status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

/// Single slot status. Starting an action supersedes whatever was in flight,
/// and completions of superseded actions are dropped.
#[derive(Clone, Debug, Default)]
pub struct StatusBoard {
    latest: u64,
    message: StatusMessage,
}

impl StatusBoard {
    pub fn message(&self) -> &StatusMessage {
        &self.message
    }

    pub fn begin(&mut self, pending: impl Into<String>) -> Ticket {
        self.latest += 1;
        self.message = StatusMessage::Pending(pending.into());
        Ticket(self.latest)
    }

    /// Returns false when the ticket was superseded and the message discarded.
    pub fn settle(&mut self, ticket: Ticket, message: StatusMessage) -> bool {
        if ticket.0 != self.latest {
            debug!(
                "dropping status of superseded action {} (latest {}): {}",
                ticket.0, self.latest, message
            );
            return false;
        }
        self.message = message;
        true
    }
}
