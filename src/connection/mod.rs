//! Client connection state machine.
//!
//! A [`ClientConnection`] owns one transport to one server. While open, two
//! tokio tasks run against it:
//!
//! - the read loop frames and parses inbound lines, answers `PING`, detects
//!   the welcome reply, tracks `CAP` replies and forwards every message to
//!   [`ConnectionEvents::incoming`];
//! - the write loop serializes messages taken from
//!   [`ClientConnection::sender`] onto the transport.
//!
//! State changes are announced on [`ConnectionEvents::state`] in the order
//! `OPEN`, optionally `READY`, then either `CLOSED` (transport lost) or
//! `CLOSING`, `CLOSED` (explicit [`close`](ClientConnection::close)).
//!
//! # Example
//!
//! ```no_run
//! use slirc_client::connection::ClientConnection;
//! use slirc_client::{Message, UserModes};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let (conn, mut events) = ClientConnection::new("irc.example.com", 6667);
//! conn.open().await?;
//!
//! let out = conn.sender();
//! out.send(Message::nick("johndoe")?).await?;
//! out.send(Message::user("jdoe", "John Doe", UserModes::new())).await?;
//!
//! while let Some(msg) = events.incoming.recv().await {
//!     println!("{}", msg);
//!     if msg.command == slirc_client::Command::ERROR {
//!         break;
//!     }
//! }
//! conn.close().await?;
//! conn.wait().await;
//! # Ok(())
//! # }
//! ```

mod config;
mod read;
mod write;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::io::ReadHalf;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::codec::{FramedRead, FramedWrite};
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, warn};

use crate::caps::{Capability, CapabilitySet};
use crate::error::ConnectionError;
use crate::irc::IrcCodec;
use crate::message::Message;
use crate::server::ServerInfo;
use crate::state::ConnectionState;
use crate::transport::{BoxedStream, Dialer, TcpDialer};

pub use self::config::ConnectionConfig;

type LineReader = FramedRead<ReadHalf<BoxedStream>, IrcCodec>;

/// Receiving ends of a connection's event streams.
///
/// Returned once by [`ClientConnection::new`]; the streams stay valid across
/// re-opens of the same connection.
#[derive(Debug)]
pub struct ConnectionEvents {
    /// Every state change, in order.
    pub state: mpsc::UnboundedReceiver<ConnectionState>,
    /// Messages received from the server.
    pub incoming: mpsc::Receiver<Message>,
    /// Per-line parse failures and transport errors.
    pub errors: mpsc::UnboundedReceiver<ConnectionError>,
}

/// A live transport and the tasks driving it.
struct Link {
    id: u64,
    cancel: CancellationToken,
    writer: JoinHandle<Result<(), ConnectionError>>,
}

struct Shared {
    server: ServerInfo,
    config: ConnectionConfig,
    dialer: Box<dyn Dialer>,
    capabilities: Mutex<CapabilitySet>,
    /// Current state. Only written under the `state_events` lock.
    state: watch::Sender<ConnectionState>,
    state_events: Mutex<mpsc::UnboundedSender<ConnectionState>>,
    incoming: mpsc::Sender<Message>,
    outgoing: mpsc::Sender<Message>,
    outgoing_rx: tokio::sync::Mutex<mpsc::Receiver<Message>>,
    errors: mpsc::UnboundedSender<ConnectionError>,
    link: Mutex<Option<Link>>,
    /// Serializes `open` and `close`.
    lifecycle: tokio::sync::Mutex<()>,
    tracker: TaskTracker,
    next_link_id: AtomicU64,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl Shared {
    /// Apply `step` to the current state and announce the result, if any.
    fn transition<F>(&self, step: F) -> bool
    where
        F: FnOnce(ConnectionState) -> Option<ConnectionState>,
    {
        let events = lock(&self.state_events);
        let mut next = None;
        self.state.send_if_modified(|current| match step(*current) {
            Some(state) => {
                *current = state;
                next = Some(state);
                true
            }
            None => false,
        });

        match next {
            Some(state) => {
                debug!(server = %self.server, %state, "connection state changed");
                // Nobody listening is fine.
                let _ = events.send(state);
                true
            }
            None => false,
        }
    }

    fn announce(&self, state: ConnectionState) {
        self.transition(|_| Some(state));
    }

    fn report(&self, err: ConnectionError) {
        let _ = self.errors.send(err);
    }

    /// Remove the link if it is still the one identified by `id`.
    fn take_link(&self, id: u64) -> Option<Link> {
        let mut link = lock(&self.link);
        if link.as_ref().map(|current| current.id) == Some(id) {
            link.take()
        } else {
            None
        }
    }

    fn capabilities(&self) -> MutexGuard<'_, CapabilitySet> {
        lock(&self.capabilities)
    }
}

/// Handle to a client connection. Clones share the same connection.
#[derive(Clone)]
pub struct ClientConnection {
    shared: Arc<Shared>,
}

impl std::fmt::Debug for ClientConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConnection")
            .field("server", &self.shared.server)
            .field("state", &self.state())
            .finish()
    }
}

impl ClientConnection {
    /// Prepare a connection to `hostname:port` with default settings.
    ///
    /// Nothing is dialed until [`open`](Self::open).
    pub fn new(hostname: impl Into<String>, port: u16) -> (Self, ConnectionEvents) {
        Self::with_config(hostname, port, ConnectionConfig::default())
    }

    /// Prepare a plain TCP connection with custom settings.
    pub fn with_config(
        hostname: impl Into<String>,
        port: u16,
        config: ConnectionConfig,
    ) -> (Self, ConnectionEvents) {
        let dialer = TcpDialer::new().keepalive(config.keepalive);
        Self::with_dialer(hostname, port, config, dialer)
    }

    /// Prepare a connection that opens its transport through `dialer`.
    pub fn with_dialer<D: Dialer>(
        hostname: impl Into<String>,
        port: u16,
        config: ConnectionConfig,
        dialer: D,
    ) -> (Self, ConnectionEvents) {
        let capacity = config.buffer_size.max(1);
        let (state_tx, state_rx) = mpsc::unbounded_channel();
        let (incoming_tx, incoming_rx) = mpsc::channel(capacity);
        let (outgoing_tx, outgoing_rx) = mpsc::channel(capacity);
        let (errors_tx, errors_rx) = mpsc::unbounded_channel();

        let tracker = TaskTracker::new();
        // Nothing to wait for until the first open.
        tracker.close();

        let shared = Shared {
            server: ServerInfo::new(hostname, port),
            config,
            dialer: Box::new(dialer),
            capabilities: Mutex::new(CapabilitySet::new()),
            state: watch::channel(ConnectionState::Closed).0,
            state_events: Mutex::new(state_tx),
            incoming: incoming_tx,
            outgoing: outgoing_tx,
            outgoing_rx: tokio::sync::Mutex::new(outgoing_rx),
            errors: errors_tx,
            link: Mutex::new(None),
            lifecycle: tokio::sync::Mutex::new(()),
            tracker,
            next_link_id: AtomicU64::new(0),
        };

        let events = ConnectionEvents {
            state: state_rx,
            incoming: incoming_rx,
            errors: errors_rx,
        };

        (
            Self {
                shared: Arc::new(shared),
            },
            events,
        )
    }

    pub fn hostname(&self) -> &str {
        self.shared.server.hostname()
    }

    pub fn port(&self) -> u16 {
        self.shared.server.port()
    }

    /// The server this connection dials.
    pub fn server(&self) -> &ServerInfo {
        &self.shared.server
    }

    /// The most recently announced state.
    pub fn state(&self) -> ConnectionState {
        *self.shared.state.borrow()
    }

    /// Sink for messages to the server.
    pub fn sender(&self) -> mpsc::Sender<Message> {
        self.shared.outgoing.clone()
    }

    /// Enabled capabilities, in no particular order.
    pub fn capabilities(&self) -> Vec<Capability> {
        self.shared.capabilities().enabled()
    }

    /// Whether `cap` is known and enabled.
    pub fn has_capability(&self, cap: Capability) -> bool {
        self.shared.capabilities().is_enabled(cap)
    }

    /// Record `cap` as enabled or disabled.
    pub fn set_capability(&self, cap: Capability, enabled: bool) {
        self.shared.capabilities().set(cap, enabled);
    }

    /// Dial the server and start the read and write loops.
    ///
    /// Fails with [`ConnectionError::AlreadyEstablished`] while a transport
    /// is live. A dial failure is also pushed onto the error stream; no loop
    /// is started in that case.
    pub async fn open(&self) -> Result<(), ConnectionError> {
        let shared = &self.shared;
        let _lifecycle = shared.lifecycle.lock().await;

        if lock(&shared.link).is_some() {
            return Err(ConnectionError::AlreadyEstablished);
        }

        let config = &shared.config;
        let reader_codec = IrcCodec::with_max_len(&config.encoding, config.max_line_len)?;
        let writer_codec = IrcCodec::with_max_len(&config.encoding, config.max_line_len)?;

        let (host, port) = (shared.server.hostname(), shared.server.port());
        debug!(server = %shared.server, "dialing IRC server");
        let stream = match shared.dialer.dial(host, port).await {
            Ok(stream) => stream,
            Err(source) => {
                let addr = shared.server.to_string();
                warn!(%addr, error = %source, "dial failed");
                shared.report(ConnectionError::Dial {
                    addr: addr.clone(),
                    source: std::io::Error::new(source.kind(), source.to_string()),
                });
                return Err(ConnectionError::Dial { addr, source });
            }
        };

        let (read_half, write_half) = tokio::io::split(stream);
        let id = shared.next_link_id.fetch_add(1, Ordering::Relaxed);
        let cancel = CancellationToken::new();

        shared.capabilities().clear();
        shared.announce(ConnectionState::Open);

        shared.tracker.reopen();
        let writer = shared.tracker.spawn(write::write_loop(
            Arc::clone(shared),
            cancel.clone(),
            FramedWrite::new(write_half, writer_codec),
        ));

        // The link must exist before the reader can observe end of stream.
        *lock(&shared.link) = Some(Link {
            id,
            cancel: cancel.clone(),
            writer,
        });

        shared.tracker.spawn(read::read_loop(
            Arc::clone(shared),
            id,
            cancel,
            FramedRead::new(read_half, reader_codec),
        ));
        shared.tracker.close();

        Ok(())
    }

    /// Shut the transport down.
    ///
    /// Announces `CLOSING`, lets the writer flush what is already queued and
    /// shut its half down, then announces `CLOSED`. A subsequent
    /// [`open`](Self::open) dials again. Closing a closed connection does
    /// nothing.
    ///
    /// The flush is bounded by [`ConnectionConfig::close_timeout`]. A peer
    /// that stops reading cannot hold the call open: once the deadline
    /// passes the writer is aborted, the transport dropped and
    /// [`ConnectionError::CloseTimeout`] returned.
    ///
    /// Returns the error, if any, from flushing and shutting down the
    /// transport.
    pub async fn close(&self) -> Result<(), ConnectionError> {
        let shared = &self.shared;
        let _lifecycle = shared.lifecycle.lock().await;

        let Some(link) = lock(&shared.link).take() else {
            return Ok(());
        };

        shared.announce(ConnectionState::Closing);
        link.cancel.cancel();

        let Link { mut writer, .. } = link;
        let grace = shared.config.close_timeout;
        let result = match tokio::time::timeout(grace, &mut writer).await {
            Ok(Ok(result)) => result,
            Ok(Err(join_err)) => Err(ConnectionError::Task(join_err.to_string())),
            Err(_) => {
                warn!(server = %shared.server, ?grace, "flush timed out, dropping transport");
                writer.abort();
                // Aborting drops the write half; wait so the transport is
                // released before CLOSED is announced.
                let _ = writer.await;
                Err(ConnectionError::CloseTimeout(grace))
            }
        };

        shared.announce(ConnectionState::Closed);
        result
    }

    /// Wait until every loop this connection started has exited.
    ///
    /// Returns immediately for a connection that was never opened.
    pub async fn wait(&self) {
        self.shared.tracker.wait().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capabilities_only_lists_enabled() {
        let (conn, _events) = ClientConnection::new("example.com", 6667);
        conn.set_capability(Capability::AccountNotify, true);
        conn.set_capability(Capability::CapNotify, false);

        assert_eq!(conn.capabilities(), vec![Capability::AccountNotify]);
        assert!(conn.has_capability(Capability::AccountNotify));
        assert!(!conn.has_capability(Capability::CapNotify));
        assert!(!conn.has_capability(Capability::AccountTag));
    }

    #[test]
    fn test_new_connection_is_closed() {
        let (conn, _events) = ClientConnection::new("example.com", 6667);
        assert_eq!(conn.state(), ConnectionState::Closed);
        assert_eq!(conn.hostname(), "example.com");
        assert_eq!(conn.port(), 6667);
        assert_eq!(conn.server().to_string(), "example.com:6667");
    }

    #[tokio::test]
    async fn test_close_and_wait_without_open() {
        let (conn, mut events) = ClientConnection::new("example.com", 6667);
        conn.close().await.unwrap();
        conn.wait().await;
        assert!(events.state.try_recv().is_err());
    }

    #[test]
    fn test_transition_announces_in_order() {
        let (conn, mut events) = ClientConnection::new("example.com", 6667);
        let shared = &conn.shared;

        shared.announce(ConnectionState::Open);
        let ready = |s: ConnectionState| (s == ConnectionState::Open).then_some(ConnectionState::Ready);
        assert!(shared.transition(ready));
        assert!(!shared.transition(ready));

        assert_eq!(events.state.try_recv().unwrap(), ConnectionState::Open);
        assert_eq!(events.state.try_recv().unwrap(), ConnectionState::Ready);
        assert!(events.state.try_recv().is_err());
        assert_eq!(conn.state(), ConnectionState::Ready);
    }
}
