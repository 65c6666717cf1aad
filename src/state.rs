//! Connection lifecycle states.
//!
//! ```text
//! CLOSED --open--> OPEN --001--> READY
//!                   |              |
//!                   +---close------+--> CLOSING --> CLOSED
//!
//! any state --transport failure--> CLOSED
//! ```

use std::fmt;

/// Lifecycle state of a client connection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConnectionState {
    /// No transport. Both the initial and the final state.
    #[default]
    Closed,
    /// Teardown in progress.
    Closing,
    /// Transport is live; registration not yet acknowledged.
    Open,
    /// The server sent its welcome reply.
    Ready,
}

impl ConnectionState {
    /// Whether a transport is expected to be live in this state.
    pub fn is_connected(self) -> bool {
        matches!(self, ConnectionState::Open | ConnectionState::Ready)
    }

    /// Whether the read and write loops should stop.
    pub fn is_shutting_down(self) -> bool {
        matches!(self, ConnectionState::Closing | ConnectionState::Closed)
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConnectionState::Closed => "CLOSED",
            ConnectionState::Closing => "CLOSING",
            ConnectionState::Open => "OPEN",
            ConnectionState::Ready => "READY",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        assert_eq!(ConnectionState::default(), ConnectionState::Closed);
    }

    #[test]
    fn test_display() {
        assert_eq!(ConnectionState::Open.to_string(), "OPEN");
        assert_eq!(ConnectionState::Closing.to_string(), "CLOSING");
    }

    #[test]
    fn test_classification() {
        assert!(ConnectionState::Ready.is_connected());
        assert!(!ConnectionState::Closing.is_connected());
        assert!(ConnectionState::Closed.is_shutting_down());
        assert!(!ConnectionState::Open.is_shutting_down());
    }
}
