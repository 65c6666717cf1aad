use std::sync::Arc;

use futures_util::SinkExt;
use tokio::io::WriteHalf;
use tokio_util::codec::FramedWrite;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::Shared;
use crate::error::ConnectionError;
use crate::irc::IrcCodec;
use crate::transport::BoxedStream;

type LineWriter = FramedWrite<WriteHalf<BoxedStream>, IrcCodec>;

/// Serialize queued messages onto the transport until cancelled.
///
/// On cancellation, whatever is already queued is flushed before the write
/// half is shut down. A write failure is reported on the error stream and
/// cancels the link so the reader stops too.
pub(super) async fn write_loop(
    shared: Arc<Shared>,
    cancel: CancellationToken,
    mut sink: LineWriter,
) -> Result<(), ConnectionError> {
    let mut outgoing = shared.outgoing_rx.lock().await;

    loop {
        let msg = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            msg = outgoing.recv() => msg,
        };

        // The sender lives in `shared`, so the queue never closes under us.
        let Some(msg) = msg else { break };

        trace!(message = %msg, "sending");
        if let Err(e) = sink.send(msg).await {
            warn!(server = %shared.server, error = %e, "write failed");
            let summary = e.to_string();
            shared.report(e.into());
            cancel.cancel();
            return Err(ConnectionError::Task(summary));
        }
    }

    while let Ok(msg) = outgoing.try_recv() {
        sink.feed(msg).await?;
    }
    sink.close().await?;

    debug!(server = %shared.server, "write loop finished");
    Ok(())
}
