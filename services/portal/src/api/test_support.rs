//! 测试桩后端：本机随机端口上的 axum 服务，按固定状态码与响应体应答并记录请求。

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::to_bytes,
    extract::{Request, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// 桩后端记录到的一次请求。
#[derive(Debug, Clone)]
pub(crate) struct SeenRequest {
    pub(crate) method: String,
    pub(crate) path_and_query: String,
    pub(crate) transaction_id: Option<String>,
    pub(crate) authorization: Option<String>,
    pub(crate) content_type: Option<String>,
    pub(crate) body: String,
}

struct StubState {
    status: u16,
    body: &'static str,
    seen: Mutex<Vec<SeenRequest>>,
}

/// 运行中的桩后端。
pub(crate) struct StubBackend {
    pub(crate) base_url: String,
    state: Arc<StubState>,
}

impl StubBackend {
    /// 启动桩后端：任意路径都以 `status` + `body` 应答。
    pub(crate) async fn spawn(status: u16, body: &'static str) -> Self {
        let state = Arc::new(StubState {
            status,
            body,
            seen: Mutex::new(Vec::new()),
        });
        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&state));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub(crate) fn requests(&self) -> Vec<SeenRequest> {
        self.state.seen.lock().expect("stub lock").clone()
    }

    pub(crate) fn last_request(&self) -> SeenRequest {
        self.requests()
            .pop()
            .expect("stub should have received a request")
    }
}

async fn respond(State(state): State<Arc<StubState>>, request: Request) -> Response {
    let (parts, body) = request.into_parts();
    let header_value = |name: &str| {
        parts
            .headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
    };
    let seen = SeenRequest {
        method: parts.method.to_string(),
        path_and_query: parts
            .uri
            .path_and_query()
            .map(ToString::to_string)
            .unwrap_or_default(),
        transaction_id: header_value("transaction_id"),
        authorization: header_value("authorization"),
        content_type: header_value("content-type"),
        body: to_bytes(body, usize::MAX)
            .await
            .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
            .unwrap_or_default(),
    };
    state.seen.lock().expect("stub lock").push(seen);

    let status = StatusCode::from_u16(state.status).expect("valid stub status");
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        state.body,
    )
        .into_response()
}

/// 返回一个已关闭端口的 base URL，用于模拟连接失败。
pub(crate) async fn unreachable_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe local addr");
    drop(listener);
    format!("http://{addr}")
}
