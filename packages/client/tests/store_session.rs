//! Store-level session test: a scripted transport pushes a realistic event
//! sequence through the inbound channel and the store's state is checked at
//! the end of the session.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, mpsc};

use hibiki_client::{
    api::ChatApi,
    domain::{Message, User},
    dto::{ClientEvent, ServerEvent},
    error::ClientError,
    store::ChatStore,
    transport::SocketTransport,
};

/// Transport double that replays a scripted server-side event sequence on
/// connect
struct ScriptedTransport {
    script: Mutex<Vec<ServerEvent>>,
    inbound_tx: mpsc::UnboundedSender<ServerEvent>,
    inbound_rx: Mutex<Option<mpsc::UnboundedReceiver<ServerEvent>>>,
    emitted: Mutex<Vec<ClientEvent>>,
    open: AtomicBool,
}

impl ScriptedTransport {
    fn new(script: Vec<ServerEvent>) -> Self {
        let (inbound_tx, inbound_rx) = mpsc::unbounded_channel();
        Self {
            script: Mutex::new(script),
            inbound_tx,
            inbound_rx: Mutex::new(Some(inbound_rx)),
            emitted: Mutex::new(Vec::new()),
            open: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl SocketTransport for ScriptedTransport {
    async fn connect(&self, _user_id: &str) -> Result<(), ClientError> {
        self.open.store(true, Ordering::SeqCst);
        for event in self.script.lock().await.drain(..) {
            self.inbound_tx.send(event).ok();
        }
        Ok(())
    }

    async fn disconnect(&self) -> Result<(), ClientError> {
        self.open.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn emit(&self, event: ClientEvent) -> Result<(), ClientError> {
        self.emitted.lock().await.push(event);
        Ok(())
    }

    fn is_open(&self) -> bool {
        self.open.load(Ordering::SeqCst)
    }

    async fn take_event_stream(&self) -> Option<mpsc::UnboundedReceiver<ServerEvent>> {
        self.inbound_rx.lock().await.take()
    }
}

/// API double returning a fixed roster
struct FixedApi {
    users: Vec<User>,
}

#[async_trait]
impl ChatApi for FixedApi {
    async fn fetch_users(&self) -> Result<Vec<User>, ClientError> {
        Ok(self.users.clone())
    }

    async fn fetch_messages(&self, _peer_id: &str) -> Result<Vec<Message>, ClientError> {
        Ok(vec![])
    }
}

fn user(id: &str, name: &str) -> User {
    User {
        id: id.to_string(),
        name: name.to_string(),
    }
}

fn message(id: &str, from: &str, to: &str, content: &str) -> Message {
    Message {
        id: id.to_string(),
        sender_id: from.to_string(),
        receiver_id: to.to_string(),
        content: content.to_string(),
        timestamp: 1700000000000,
    }
}

#[tokio::test]
async fn test_session_applies_scripted_events_in_order() {
    // テスト項目: 接続 → スナップショット受信 → 個別イベント反映の一連の流れ
    // given (前提条件): サーバーが接続直後にスナップショットと更新を送る
    let script = vec![
        ServerEvent::UsersOnline {
            user_ids: vec!["alice".to_string(), "bob".to_string()],
        },
        ServerEvent::Activities {
            activities: vec![("bob".to_string(), "Idle".to_string())],
        },
        ServerEvent::UserDisconnected {
            user_id: "bob".to_string(),
        },
        ServerEvent::ActivityUpdated {
            user_id: "bob".to_string(),
            activity: "Away".to_string(),
        },
        ServerEvent::ReceiveMessage {
            message: message("m1", "bob", "alice", "Hi!"),
        },
    ];
    let transport = Arc::new(ScriptedTransport::new(script));
    let api = Arc::new(FixedApi {
        users: vec![user("alice", "Alice"), user("bob", "Bob")],
    });
    let mut store = ChatStore::new(transport.clone(), api);
    let mut events = store.subscribe_events().await.expect("event stream");

    // when (操作): 接続してイベントを順に適用する
    store.init_socket("alice").await.unwrap();
    store.fetch_users().await;
    for _ in 0..5 {
        let event = events.recv().await.expect("scripted event");
        store.apply_event(event);
    }

    // then (期待する結果): スナップショットの後のイベントが順に反映されている
    let state = store.state();
    assert_eq!(state.users.len(), 2);
    assert!(state.online_users.contains("alice"));
    assert!(!state.online_users.contains("bob"));
    assert_eq!(state.user_activities.get("bob"), Some(&"Away".to_string()));
    assert_eq!(state.messages.len(), 1);
    assert_eq!(state.messages[0].content, "Hi!");

    // 接続時に user_connected が 1 度だけ送信されている
    let emitted = transport.emitted.lock().await;
    assert_eq!(
        *emitted,
        vec![ClientEvent::UserConnected {
            user_id: "alice".to_string()
        }]
    );
}

#[tokio::test]
async fn test_session_send_and_echo_updates_messages() {
    // テスト項目: send_message の後、エコーされた message_sent で履歴が伸びる
    // given (前提条件):
    let transport = Arc::new(ScriptedTransport::new(vec![]));
    let api = Arc::new(FixedApi { users: vec![] });
    let mut store = ChatStore::new(transport.clone(), api);
    store.init_socket("alice").await.unwrap();

    // when (操作): 送信し、サーバーのエコーを適用する
    store.send_message("bob", "alice", "Hello!").await.unwrap();
    store.apply_event(ServerEvent::MessageSent {
        message: message("m1", "alice", "bob", "Hello!"),
    });

    // then (期待する結果): 送信イベントが出ており、履歴はエコーで 1 件になる
    let emitted = transport.emitted.lock().await;
    assert_eq!(
        emitted.last(),
        Some(&ClientEvent::SendMessage {
            receiver_id: "bob".to_string(),
            sender_id: "alice".to_string(),
            content: "Hello!".to_string(),
        })
    );
    assert_eq!(store.state().messages.len(), 1);
}
