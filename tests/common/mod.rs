//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use live_feed::client::LiveFeedClient;
use live_feed::feed::{ChannelSink, FeedEntry, Page, RenderOptions};
use live_feed::resilience::ReconnectState;
use tokio::net::TcpListener;
use tokio::sync::mpsc;
use url::Url;

#[derive(Clone)]
struct ServerState {
    frames: Arc<Vec<String>>,
    connections: Arc<AtomicU32>,
}

/// Start a mock dashboard socket at `ws://{addr}/ws`. Every connection is sent
/// `frames` in order and then closed by the server. Returns the connection counter.
pub async fn start_event_server(addr: SocketAddr, frames: Vec<String>) -> Arc<AtomicU32> {
    let connections = Arc::new(AtomicU32::new(0));
    let state = ServerState {
        frames: Arc::new(frames),
        connections: connections.clone(),
    };
    let app = Router::new()
        .route("/ws", get(ws_handler))
        .with_state(state);

    let listener = TcpListener::bind(addr).await.unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    connections
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<ServerState>) -> Response {
    state.connections.fetch_add(1, Ordering::SeqCst);
    ws.on_upgrade(move |socket| send_and_close(socket, state.frames))
}

async fn send_and_close(mut socket: WebSocket, frames: Arc<Vec<String>>) {
    for frame in frames.iter() {
        if socket.send(Message::Text(frame.clone().into())).await.is_err() {
            return;
        }
    }
    let _ = socket.send(Message::Close(None)).await;
}

/// A client with the default page, fast backoff and a channel sink.
#[allow(dead_code)]
pub fn test_client(
    endpoint: &str,
    reconnect: ReconnectState,
) -> (LiveFeedClient, mpsc::UnboundedReceiver<FeedEntry>) {
    let (sink, rx) = ChannelSink::new();
    let client = LiveFeedClient::new(
        Url::parse(endpoint).unwrap(),
        Page::new(["activity-feed", "message-table-body"], 50),
        reconnect,
        RenderOptions::default(),
    )
    .with_sink(sink);
    (client, rx)
}

/// Receive `n` entries or panic after `deadline`.
#[allow(dead_code)]
pub async fn collect_entries(
    rx: &mut mpsc::UnboundedReceiver<FeedEntry>,
    n: usize,
    deadline: Duration,
) -> Vec<FeedEntry> {
    tokio::time::timeout(deadline, async {
        let mut entries = Vec::with_capacity(n);
        while entries.len() < n {
            match rx.recv().await {
                Some(entry) => entries.push(entry),
                None => break,
            }
        }
        entries
    })
    .await
    .expect("timed out waiting for feed entries")
}

/// Poll until `counter` reaches `target` or panic after `deadline`.
#[allow(dead_code)]
pub async fn wait_for_count(counter: &AtomicU32, target: u32, deadline: Duration) {
    tokio::time::timeout(deadline, async {
        while counter.load(Ordering::SeqCst) < target {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("timed out waiting for connections");
}

/// A chat message frame.
#[allow(dead_code)]
pub fn message_frame(bot: &str, content: &str) -> String {
    serde_json::json!({
        "type": "message",
        "bot": bot,
        "content": content,
        "conversation_type": "bot-bot",
    })
    .to_string()
}
