//! Simple IRC client example
//!
//! Connects to the server named by an `irc://` URL, registers, joins the
//! URL's channel if it has one and logs everything the server sends.
//!
//! ```text
//! RUST_LOG=debug cargo run --example simple_client -- irc://irc.libera.chat/#example
//! ```

use anyhow::{bail, Context};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use slirc_client::{
    ClientConnection, Command, ConnectionState, Message, Response, ServerInfo, ServerUrl,
    UserModes,
};

const NICK: &str = "example_bot";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let Some(arg) = std::env::args().nth(1) else {
        bail!("usage: simple_client irc://host[:port][/#channel]");
    };
    let url: ServerUrl = arg.parse().with_context(|| format!("bad URL {arg:?}"))?;
    if url.is_secure() {
        warn!("ircs:// needs a TLS dialer; connecting in plaintext");
    }

    let server = ServerInfo::from(&url);
    let (conn, mut events) = ClientConnection::new(server.hostname(), server.port());
    conn.open()
        .await
        .with_context(|| format!("could not connect to {server}"))?;

    let out = conn.sender();
    out.send(Message::nick(NICK)?).await?;
    out.send(Message::user("example", "Example Bot", UserModes::new()))
        .await?;

    loop {
        tokio::select! {
            Some(state) = events.state.recv() => {
                info!(%state, "connection state");
                match state {
                    ConnectionState::Ready => {
                        if let Some(channel) = url.channel() {
                            out.send(Message::join(channel)?).await?;
                            out.send(Message::privmsg(channel, "Hello from slirc-client!")).await?;
                        }
                    }
                    ConnectionState::Closed => break,
                    _ => {}
                }
            }
            Some(msg) = events.incoming.recv() => {
                info!("<- {}", msg);
                if let Command::Response(Response::ERR_NICKNAMEINUSE) = msg.command {
                    out.send(Message::nick(format!("{NICK}_"))?).await?;
                }
            }
            Some(err) = events.errors.recv() => error!(error = %err, "connection error"),
            _ = tokio::signal::ctrl_c() => {
                out.send(Message::quit("Goodbye!")).await?;
                conn.close().await?;
            }
        }
    }

    conn.wait().await;
    Ok(())
}
