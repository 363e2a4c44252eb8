//! 聊天 WebSocket 客户端。
//!
//! 单连接、不重连；收到的消息同时进入有界历史（满了丢最旧）和有界接收队列（满了丢新帧）。

use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use anyhow::{Context, Result};
use futures_util::{SinkExt, StreamExt, stream::SplitSink};
use tokio::{
    net::TcpStream,
    sync::mpsc::{self, error::TrySendError},
    task::JoinHandle,
};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};
use tracing::{debug, info, warn};
use uuid::Uuid;
use wp_shared_protocol::ChatMessage;

/// 默认保留的历史消息条数。
pub const DEFAULT_CHAT_HISTORY: usize = 50;

type WsWriter = SplitSink<WebSocketStream<MaybeTlsStream<TcpStream>>, Message>;

/// 定长消息环形缓冲。
#[derive(Debug, Clone)]
pub struct ChatHistory {
    capacity: usize,
    messages: VecDeque<ChatMessage>,
}

impl ChatHistory {
    /// 容量至少为 1。
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            messages: VecDeque::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, message: ChatMessage) {
        if self.messages.len() == self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// 按到达顺序（旧 -> 新）复制一份。
    pub fn to_vec(&self) -> Vec<ChatMessage> {
        self.messages.iter().cloned().collect()
    }
}

/// 聊天连接句柄；drop 时停止读取任务。
pub struct ChatClient {
    session_id: String,
    writer: WsWriter,
    history: Arc<Mutex<ChatHistory>>,
    incoming: mpsc::Receiver<ChatMessage>,
    reader_task: JoinHandle<()>,
}

impl ChatClient {
    /// 建立连接并启动读取任务。
    pub async fn connect(url: &str, history_capacity: usize) -> Result<Self> {
        let session_id = Uuid::new_v4().to_string();
        info!("connecting chat session={session_id} url={url}");
        let (ws_stream, _) = connect_async(url)
            .await
            .with_context(|| format!("connect chat websocket: {url}"))?;
        info!("chat connected session={session_id}");

        let (writer, mut reader) = ws_stream.split();
        let history = Arc::new(Mutex::new(ChatHistory::new(history_capacity)));
        let (tx, incoming) = mpsc::channel::<ChatMessage>(history_capacity.max(1));

        let reader_history = Arc::clone(&history);
        let reader_session = session_id.clone();
        // reader_task 只处理文本帧，无法解析的帧记录后跳过。
        let reader_task = tokio::spawn(async move {
            while let Some(next) = reader.next().await {
                match next {
                    Ok(Message::Text(text)) => {
                        let message = match serde_json::from_str::<ChatMessage>(&text) {
                            Ok(message) => message,
                            Err(err) => {
                                warn!("chat frame ignored session={reader_session}: {err}");
                                continue;
                            }
                        };
                        reader_history
                            .lock()
                            .unwrap_or_else(|poisoned| poisoned.into_inner())
                            .push(message.clone());
                        // 队列满说明调用方没在读；帧仍留在历史里。
                        match tx.try_send(message) {
                            Ok(()) => {}
                            Err(TrySendError::Full(dropped)) => {
                                let sender = dropped.sender;
                                warn!(
                                    "chat queue full, dropped session={reader_session} sender={sender}"
                                );
                            }
                            Err(TrySendError::Closed(_)) => break,
                        }
                    }
                    Ok(Message::Close(_)) => {
                        info!("chat closed by server session={reader_session}");
                        break;
                    }
                    Ok(_) => {}
                    Err(err) => {
                        warn!("chat read error session={reader_session}: {err}");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            session_id,
            writer,
            history,
            incoming,
            reader_task,
        })
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub async fn send(&mut self, message: &ChatMessage) -> Result<()> {
        let raw = serde_json::to_string(message).context("serialize chat message")?;
        self.writer
            .send(Message::Text(raw.into()))
            .await
            .context("send chat message")?;
        debug!("chat message sent session={}", self.session_id);
        Ok(())
    }

    /// 等待下一条消息；连接结束后返回 `None`。
    pub async fn next_message(&mut self) -> Option<ChatMessage> {
        self.incoming.recv().await
    }

    /// 已接收但尚未被 `next_message` 取走的消息数。
    pub fn pending(&self) -> usize {
        self.incoming.len()
    }

    pub fn history(&self) -> Vec<ChatMessage> {
        self.history
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .to_vec()
    }

    /// 发送关闭帧并停止读取。
    pub async fn close(mut self) -> Result<()> {
        let result = self.writer.close().await.context("close chat websocket");
        self.reader_task.abort();
        info!("chat session closed session={}", self.session_id);
        result
    }
}

impl Drop for ChatClient {
    fn drop(&mut self) {
        self.reader_task.abort();
    }
}
