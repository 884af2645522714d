//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::ConnectionSession,
    infrastructure::dto::websocket::ClientEvent,
    ui::state::AppState,
    usecase::{ConnectionLifecycleHandler, SessionError},
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drains this connection's outbound queue into its WebSocket sink until either side closes.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this connection to receive outbound frames
    let (tx, rx) = mpsc::unbounded_channel();
    let lifecycle = state.lifecycle.clone();
    let mut session = lifecycle.open(tx).await;

    let mut send_task = pusher_loop(rx, sender);

    loop {
        tokio::select! {
            frame = receiver.next() => match frame {
                Some(Ok(Message::Text(text))) => {
                    dispatch(&lifecycle, &mut session, text.as_str()).await;
                }
                Some(Ok(Message::Close(_))) => {
                    tracing::info!("Connection '{}' requested close", session.id());
                    break;
                }
                Some(Ok(Message::Ping(_))) => {
                    // Ping/pong is handled automatically by the WebSocket protocol
                    tracing::debug!("Received ping");
                }
                Some(Ok(_)) => {}
                Some(Err(e)) => {
                    tracing::warn!("WebSocket error on '{}': {}", session.id(), e);
                    break;
                }
                None => break,
            },
            _ = &mut send_task => {
                tracing::debug!("Pusher for '{}' stopped", session.id());
                break;
            }
        }
    }

    send_task.abort();
    lifecycle.close(&mut session).await;
}

/// 受信した 1 フレームを処理する
///
/// エラーはログに残すだけで、接続は開いたままにする。
async fn dispatch(
    lifecycle: &ConnectionLifecycleHandler,
    session: &mut ConnectionSession,
    text: &str,
) {
    let event = match serde_json::from_str::<ClientEvent>(text) {
        Ok(event) => event,
        Err(e) => {
            tracing::warn!("Dropped malformed frame on '{}': {}", session.id(), e);
            return;
        }
    };

    let result = match event {
        ClientEvent::Join { email, .. } => lifecycle.join(session, email).await,
        ClientEvent::Message { user, message } => lifecycle
            .relay_message(session, user, message)
            .await
            .map(|delivered| {
                tracing::debug!("Relayed message to {} connections", delivered);
            }),
        ClientEvent::Leave { email } => lifecycle.leave(session, email).await,
    };

    match result {
        Ok(()) => {}
        Err(e @ SessionError::Repository(_)) => {
            tracing::error!("Event on '{}' failed: {}", session.id(), e);
        }
        Err(e @ SessionError::InvalidUserId(_)) => {
            tracing::warn!("Dropped event on '{}': {}", session.id(), e);
        }
        Err(e) => {
            tracing::debug!("Dropped event on '{}': {}", session.id(), e);
        }
    }
}
