use std::sync::Arc;

use futures_util::StreamExt;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace, warn};

use super::{LineReader, Shared};
use crate::command::Command;
use crate::error::ConnectionError;
use crate::message::Message;
use crate::response::Response;
use crate::state::ConnectionState;

/// Pump inbound lines until the transport ends or the link is cancelled.
pub(super) async fn read_loop(
    shared: Arc<Shared>,
    id: u64,
    cancel: CancellationToken,
    mut lines: LineReader,
) {
    let failure = loop {
        let item = tokio::select! {
            _ = cancel.cancelled() => break None,
            item = lines.next() => item,
        };

        match item {
            Some(Ok(Ok(msg))) => {
                trace!(message = %msg, "received");
                if !dispatch(&shared, &cancel, msg).await {
                    break None;
                }
            }
            Some(Ok(Err(e))) => {
                // A bad line never ends the connection.
                warn!(error = %e, "dropping unparseable line");
                shared.report(e.into());
            }
            Some(Err(e)) => break Some(ConnectionError::from(e)),
            None => break None,
        }
    };

    match failure {
        Some(e) => {
            warn!(server = %shared.server, error = %e, "read failed");
            shared.report(e);
        }
        None => debug!(server = %shared.server, "read loop finished"),
    }

    // Lost the transport without `close` having claimed the link.
    if let Some(link) = shared.take_link(id) {
        link.cancel.cancel();
        shared.announce(ConnectionState::Closed);
    }
}

/// React to one inbound message and forward it.
///
/// Returns `false` once the link has been cancelled.
async fn dispatch(shared: &Shared, cancel: &CancellationToken, msg: Message) -> bool {
    match &msg.command {
        Command::Response(Response::RPL_WELCOME) => {
            shared.transition(|state| {
                (state == ConnectionState::Open).then_some(ConnectionState::Ready)
            });
        }
        Command::PING => {
            if let Some(token) = msg.param(0) {
                let pong = Message::pong(token);
                tokio::select! {
                    _ = cancel.cancelled() => return false,
                    res = shared.outgoing.send(pong) => {
                        if res.is_err() {
                            return false;
                        }
                    }
                }
            }
        }
        Command::CAP if msg.params.len() >= 3 => {
            if let (Some(sub), Some(list)) = (msg.param(1), msg.trailing()) {
                if shared.capabilities().apply_reply(sub, list) {
                    debug!(subcommand = sub, caps = list, "capabilities updated");
                }
            }
        }
        _ => {}
    }

    tokio::select! {
        _ = cancel.cancelled() => false,
        // A dropped receiver only means nobody reads; keep answering PINGs.
        _ = shared.incoming.send(msg) => true,
    }
}
