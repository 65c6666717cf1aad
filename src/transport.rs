//! Transport dialing.
//!
//! A [`Dialer`] turns a host and port into a byte stream. [`TcpDialer`] is
//! the plaintext default; callers wanting `ircs://` supply a dialer that
//! wraps the TCP stream in TLS.

use std::io;
use std::time::Duration;

use futures_util::future::BoxFuture;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tracing::{debug, warn};

/// Interval between keepalive probes once the idle time has elapsed.
const KEEPALIVE_INTERVAL: Duration = Duration::from_secs(30);

/// A bidirectional byte stream a connection can run over.
pub trait AsyncStream: AsyncRead + AsyncWrite + Send + Unpin + 'static {}

impl<T> AsyncStream for T where T: AsyncRead + AsyncWrite + Send + Unpin + 'static {}

/// Type-erased stream returned by a [`Dialer`].
pub type BoxedStream = Box<dyn AsyncStream>;

/// Opens transports for a [`ClientConnection`](crate::connection::ClientConnection).
pub trait Dialer: Send + Sync + 'static {
    /// Connect to `host:port`.
    fn dial<'a>(&'a self, host: &'a str, port: u16) -> BoxFuture<'a, io::Result<BoxedStream>>;
}

/// Plain TCP dialer.
#[derive(Clone, Debug, Default)]
pub struct TcpDialer {
    keepalive: Option<Duration>,
}

impl TcpDialer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable TCP keepalive, probing after `idle` without traffic.
    #[must_use]
    pub fn keepalive(mut self, idle: Option<Duration>) -> Self {
        self.keepalive = idle;
        self
    }

    fn enable_keepalive(stream: &TcpStream, idle: Duration) -> io::Result<()> {
        use socket2::{SockRef, TcpKeepalive};

        let sock = SockRef::from(stream);
        let keepalive = TcpKeepalive::new()
            .with_time(idle)
            .with_interval(KEEPALIVE_INTERVAL);

        sock.set_tcp_keepalive(&keepalive)
    }
}

impl Dialer for TcpDialer {
    fn dial<'a>(&'a self, host: &'a str, port: u16) -> BoxFuture<'a, io::Result<BoxedStream>> {
        Box::pin(async move {
            let stream = TcpStream::connect((host, port)).await?;
            debug!(host, port, "tcp connection established");

            if let Some(idle) = self.keepalive {
                if let Err(e) = Self::enable_keepalive(&stream, idle) {
                    warn!("failed to enable TCP keepalive: {}", e);
                }
            }

            Ok(Box::new(stream) as BoxedStream)
        })
    }
}
