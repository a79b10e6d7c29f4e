//! Managed realtime channel: one WebSocket per mounted page, greeting on every
//! connect, reconnect with backoff, explicit disconnect.

use chrono::{DateTime, Local};
use crud::{Backoff, ConnectionState, Error};
use dioxus::prelude::*;
use futures::channel::mpsc::UnboundedReceiver;
use futures::{FutureExt, StreamExt, pin_mut, select};
use gloo_net::websocket::{Message, futures::WebSocket};
use gloo_timers::future::sleep;
use shared_http::{Applied, LiveModel, greet};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelCommand {
    Disconnect,
    Reconnect,
}

/// Signals the channel writes into.
#[derive(Clone, Copy)]
pub struct LiveState {
    pub model: Signal<LiveModel>,
    pub connection: Signal<ConnectionState>,
    pub last_update: Signal<Option<DateTime<Local>>>,
}

impl LiveState {
    fn set_connection(&self, state: ConnectionState) {
        let mut connection = self.connection;
        connection.set(state);
    }

    fn handle_frame(&self, frame: &str) {
        let mut model = self.model;
        let applied = model.write().apply_frame(frame);
        match applied {
            Ok(Applied::Users(_)) => {
                let mut last_update = self.last_update;
                last_update.set(Some(Local::now()));
            }
            Ok(Applied::LogLine | Applied::Ignored) => {}
            Err(e) => warn!("Keeping previous state: {}", e),
        }
    }
}

enum SessionEnd {
    Disconnected,
    Reconnect,
    Stopped,
}

enum Step {
    Frame(Option<Result<Message, gloo_net::websocket::WebSocketError>>),
    Command(Option<ChannelCommand>),
}

/// Coroutine body. Runs until the command channel is dropped with the page.
pub async fn run(
    mut commands: UnboundedReceiver<ChannelCommand>,
    socket_url: String,
    backoff: Backoff,
    state: LiveState,
) {
    let mut attempt: u32 = 0;
    let mut enabled = true;

    loop {
        if !enabled {
            match commands.next().await {
                Some(ChannelCommand::Reconnect) => {
                    enabled = true;
                    attempt = 0;
                }
                Some(ChannelCommand::Disconnect) => continue,
                None => break,
            }
        }

        state.set_connection(ConnectionState::Connecting);

        match run_session(&socket_url, &mut commands, &state, &mut attempt).await {
            Ok(SessionEnd::Disconnected) => {
                info!("Channel disconnected by operator");
                enabled = false;
                state.set_connection(ConnectionState::Disconnected);
            }
            Ok(SessionEnd::Reconnect) => attempt = 0,
            Ok(SessionEnd::Stopped) => break,
            Err(error) => {
                attempt = attempt.saturating_add(1);
                let delay = backoff.next_delay(attempt);
                warn!("{}; retrying in {:?}", error, delay);
                state.set_connection(ConnectionState::lost(
                    attempt,
                    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error.to_string(),
                ));

                let interrupted = {
                    let wait = sleep(delay).fuse();
                    let next_command = commands.next().fuse();
                    pin_mut!(wait, next_command);
                    select! {
                        _ = wait => None,
                        command = next_command => Some(command),
                    }
                };

                match interrupted {
                    None | Some(Some(ChannelCommand::Reconnect)) => {}
                    Some(Some(ChannelCommand::Disconnect)) => {
                        enabled = false;
                        state.set_connection(ConnectionState::Disconnected);
                    }
                    Some(None) => break,
                }
            }
        }
    }
}

async fn run_session(
    socket_url: &str,
    commands: &mut UnboundedReceiver<ChannelCommand>,
    state: &LiveState,
    attempt: &mut u32,
) -> Result<SessionEnd, Error> {
    let mut socket = WebSocket::open(socket_url).map_err(lost)?;

    greet(&mut socket, Message::Text).await?;

    info!("Connected to {}", socket_url);
    state.set_connection(ConnectionState::Connected);
    *attempt = 0;

    loop {
        let step = {
            let next_frame = socket.next().fuse();
            let next_command = commands.next().fuse();
            pin_mut!(next_frame, next_command);
            select! {
                frame = next_frame => Step::Frame(frame),
                command = next_command => Step::Command(command),
            }
        };

        match step {
            Step::Frame(Some(Ok(Message::Text(text)))) => state.handle_frame(&text),
            Step::Frame(Some(Ok(Message::Bytes(_)))) => debug!("Ignoring binary frame"),
            Step::Frame(Some(Err(e))) => return Err(lost(e)),
            Step::Frame(None) => return Err(Error::ConnectionLost("socket closed".to_string())),
            Step::Command(command) => {
                let end = match command {
                    Some(ChannelCommand::Disconnect) => SessionEnd::Disconnected,
                    Some(ChannelCommand::Reconnect) => SessionEnd::Reconnect,
                    None => SessionEnd::Stopped,
                };
                if let Err(e) = socket.close(None, None) {
                    debug!("Close failed: {}", e);
                }
                return Ok(end);
            }
        }
    }
}

fn lost(error: impl std::fmt::Display) -> Error {
    Error::ConnectionLost(error.to_string())
}
