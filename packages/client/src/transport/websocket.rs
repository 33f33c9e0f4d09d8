//! WebSocket を使った SocketTransport 実装
//!
//! ## 責務
//!
//! - WebSocket 接続の確立と切断
//! - 受信イベントのパースと単一の受信チャンネルへの転送
//! - 送信イベントのシリアライズと書き込み
//!
//! ## 設計ノート
//!
//! 受信チャンネル（`UnboundedSender`）は transport の生成時に 1 度だけ作られ、
//! 接続サイクルをまたいで再利用されます。これにより、再接続してもリスナーの
//! 二重登録は発生しません：
//! - 接続ごと: 読み取りタスクを起動し、同じチャンネルへ転送
//! - 切断後: チャンネルはそのまま残り、ストア側の購読も維持される

use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

use futures_util::{SinkExt, StreamExt, stream::SplitSink};
use tokio::{net::TcpStream, sync::Mutex, sync::mpsc};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async, tungstenite::protocol::Message,
};

use async_trait::async_trait;

use crate::{
    dto::{ClientEvent, ServerEvent},
    error::ClientError,
};

use super::SocketTransport;

type WsSink = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// tokio-tungstenite backed connection manager
pub struct WebSocketTransport {
    /// Base websocket URL (e.g. `ws://127.0.0.1:5000/socket`)
    url: String,
    /// Inbound event channel, created once and reused across connects
    inbound_tx: mpsc::UnboundedSender<ServerEvent>,
    /// Receiver half, handed out once via `take_event_stream`
    inbound_rx: Mutex<Option<mpsc::UnboundedReceiver<ServerEvent>>>,
    /// Write half of the current connection, if any
    writer: Mutex<Option<WsSink>>,
    /// Whether a connection is currently open
    open: Arc<AtomicBool>,
}

impl WebSocketTransport {
    /// Create a new transport for the given websocket URL.
    ///
    /// No connection is opened here; connection only starts on an explicit
    /// [`SocketTransport::connect`].
    pub fn new(url: String) -> Self {
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
        Self {
            url,
            inbound_tx,
            inbound_rx: Mutex::new(Some(inbound_rx)),
            writer: Mutex::new(None),
            open: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait]
impl SocketTransport for WebSocketTransport {
    async fn connect(&self, user_id: &str) -> Result<(), ClientError> {
        // Attach the user id as a query parameter
        let request_url = format!("{}?user_id={}", self.url, user_id);

        let (ws_stream, _response) = connect_async(&request_url)
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))?;

        tracing::info!("Connected to realtime channel as '{}'", user_id);

        let (write, mut read) = ws_stream.split();
        *self.writer.lock().await = Some(write);
        self.open.store(true, Ordering::SeqCst);

        // Spawn a task to parse incoming events and forward them into the
        // shared inbound channel
        let inbound_tx = self.inbound_tx.clone();
        let open = self.open.clone();
        tokio::spawn(async move {
            while let Some(message) = read.next().await {
                match message {
                    Ok(Message::Text(text)) => {
                        match serde_json::from_str::<ServerEvent>(&text) {
                            Ok(event) => {
                                if inbound_tx.send(event).is_err() {
                                    // Subscriber dropped, stop reading
                                    break;
                                }
                            }
                            Err(e) => {
                                tracing::warn!("Failed to parse server event: {}", e);
                            }
                        }
                    }
                    Ok(Message::Close(_)) => {
                        tracing::info!("Server closed the connection");
                        break;
                    }
                    Err(e) => {
                        tracing::warn!("WebSocket read error: {}", e);
                        break;
                    }
                    _ => {}
                }
            }

            open.store(false, Ordering::SeqCst);
        });

        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ClientError> {
        let mut writer = self.writer.lock().await;
        if let Some(mut write) = writer.take() {
            // Best effort close frame; the connection is dropped either way
            if let Err(e) = write.send(Message::Close(None)).await {
                tracing::debug!("Failed to send close frame: {}", e);
            }
        }
        self.open.store(false, Ordering::SeqCst);
        tracing::info!("Disconnected from realtime channel");
        Ok(())
    }

    async fn emit(&self, event: ClientEvent) -> Result<(), ClientError> {
        let json =
            serde_json::to_string(&event).map_err(|e| ClientError::Serialization(e.to_string()))?;

        let mut writer = self.writer.lock().await;
        let Some(write) = writer.as_mut() else {
            return Err(ClientError::NotConnected);
        };

        write
            .send(Message::Text(json.into()))
            .await
            .map_err(|e| ClientError::ConnectionFailed(e.to_string()))
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    async fn take_event_stream(&self) -> Option<mpsc::UnboundedReceiver<ServerEvent>> {
        self.inbound_rx.lock().await.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transport_starts_disconnected() {
        // テスト項目: 生成直後の transport は未接続
        // given (前提条件):
        let transport = WebSocketTransport::new("ws://127.0.0.1:9/socket".to_string());

        // when (操作):

        // then (期待する結果):
        assert!(!transport.is_open());
    }

    #[tokio::test]
    async fn test_emit_without_connection_fails() {
        // テスト項目: 未接続での emit は NotConnected エラーになる
        // given (前提条件):
        let transport = WebSocketTransport::new("ws://127.0.0.1:9/socket".to_string());

        // when (操作):
        let result = transport
            .emit(ClientEvent::UserConnected {
                user_id: "alice".to_string(),
            })
            .await;

        // then (期待する結果):
        assert_eq!(result, Err(ClientError::NotConnected));
    }

    #[tokio::test]
    async fn test_event_stream_is_handed_out_once() {
        // テスト項目: イベントストリームは 1 度だけ取得できる
        // given (前提条件):
        let transport = WebSocketTransport::new("ws://127.0.0.1:9/socket".to_string());

        // when (操作):
        let first = transport.take_event_stream().await;
        let second = transport.take_event_stream().await;

        // then (期待する結果):
        assert!(first.is_some());
        assert!(second.is_none());
    }

    #[tokio::test]
    async fn test_disconnect_without_connection_is_noop() {
        // テスト項目: 未接続での disconnect はエラーにならない（冪等性）
        // given (前提条件):
        let transport = WebSocketTransport::new("ws://127.0.0.1:9/socket".to_string());

        // when (操作):
        let result = transport.disconnect().await;

        // then (期待する結果):
        assert!(result.is_ok());
        assert!(!transport.is_open());
    }
}
