//! Shared helpers for the integration tests.

#![allow(dead_code)]

use std::{net::SocketAddr, sync::Arc, time::Duration};

use agora_server::{
    bootstrap::build_server, domain::UserRepository,
    infrastructure::repository::InMemoryUserRepository,
};
use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

pub type WsClient = WebSocketStream<MaybeTlsStream<TcpStream>>;

pub const EVENT_TIMEOUT: Duration = Duration::from_secs(5);

/// Starts a server on an ephemeral port and returns its address
pub async fn spawn_server_with(repository: Arc<dyn UserRepository>) -> SocketAddr {
    let app = build_server(repository).into_router();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

pub async fn spawn_server() -> SocketAddr {
    spawn_server_with(Arc::new(InMemoryUserRepository::new())).await
}

pub async fn register(addr: SocketAddr, name: &str, email: &str, password: &str, avatar: &str) -> Value {
    reqwest::Client::new()
        .post(format!("http://{}/register", addr))
        .json(&json!({
            "name": name,
            "email": email,
            "password": password,
            "avatar": avatar,
        }))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

pub async fn connect(addr: SocketAddr) -> WsClient {
    let (ws, _) = connect_async(format!("ws://{}/ws", addr)).await.unwrap();
    ws
}

pub async fn send(ws: &mut WsClient, event: Value) {
    ws.send(Message::Text(event.to_string().into())).await.unwrap();
}

/// Waits for the next JSON text frame
pub async fn next_event(ws: &mut WsClient) -> Value {
    loop {
        let frame = tokio::time::timeout(EVENT_TIMEOUT, ws.next())
            .await
            .expect("timed out waiting for an event")
            .expect("connection closed")
            .unwrap();
        if let Message::Text(text) = frame {
            return serde_json::from_str(text.as_str()).unwrap();
        }
    }
}

/// Asserts that no text frame arrives within a short window
pub async fn assert_silent(ws: &mut WsClient) {
    let result = tokio::time::timeout(Duration::from_millis(200), async {
        loop {
            match ws.next().await {
                Some(Ok(Message::Text(text))) => return Some(text.to_string()),
                Some(Ok(_)) => continue,
                _ => return None,
            }
        }
    })
    .await;
    if let Ok(Some(text)) = result {
        panic!("unexpected event: {}", text);
    }
}

pub fn users(names: &[(&str, &str)]) -> Value {
    json!({
        "type": "users",
        "users": names
            .iter()
            .map(|(name, avatar)| json!({"name": name, "avatar": avatar}))
            .collect::<Vec<_>>(),
    })
}
