//! 共享请求执行器：所有端点模块都通过 `ApiClient::execute` 发起调用。

use std::time::Duration;

use anyhow::Context;
use reqwest::header::CONTENT_TYPE;
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, warn};
use url::Url;
use wp_shared_protocol::CorrelationId;

use super::{
    classify::classify,
    endpoint::{Endpoint, Service},
    error::ApiResult,
    normalize::{CallFailure, CallState, normalize},
};
use crate::{config::PortalConfig, locale::Locale};

/// 追踪 ID 请求头名。
pub const TRANSACTION_ID_HEADER: &str = "transaction_id";

/// 后端 HTTP 客户端；可廉价克隆，内部共享连接池。
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    core_base: Url,
    transaction_base: Url,
    locale: Locale,
}

impl ApiClient {
    /// 使用默认 reqwest 客户端（无超时）构造。
    pub fn new(core_base: Url, transaction_base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            core_base,
            transaction_base,
            locale: Locale::default(),
        }
    }

    /// 从运行时配置构造；配置了超时时才启用请求超时。
    pub fn from_config(cfg: &PortalConfig) -> anyhow::Result<Self> {
        let core_base = Url::parse(&cfg.core_api_url)
            .with_context(|| format!("invalid core api url: {}", cfg.core_api_url))?;
        let transaction_base = Url::parse(&cfg.transaction_api_url).with_context(|| {
            format!("invalid transaction api url: {}", cfg.transaction_api_url)
        })?;
        let http = build_http_client(cfg.request_timeout)?;
        Ok(Self {
            http,
            core_base,
            transaction_base,
            locale: cfg.locale,
        })
    }

    /// 切换用户可见文案语言。
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// 执行一次调用：生成追踪 ID、发送、分类、归一化。只发一次，不重试。
    pub async fn execute<T, B>(&self, call: Call<'_, B>) -> ApiResult<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let transaction_id = CorrelationId::generate();
        let endpoint = call.endpoint;
        match self.send_and_classify(&call, &transaction_id).await {
            Ok(value) => {
                debug!(
                    endpoint = endpoint.name,
                    transaction_id = %transaction_id,
                    state = CallState::Succeeded.as_str(),
                    "call finished"
                );
                Ok(value)
            }
            Err(failure) => {
                let err = normalize(failure, &transaction_id, self.locale);
                debug!(
                    endpoint = endpoint.name,
                    transaction_id = %transaction_id,
                    state = CallState::of_error(&err).as_str(),
                    "call failed: {err}"
                );
                Err(err)
            }
        }
    }

    async fn send_and_classify<T, B>(
        &self,
        call: &Call<'_, B>,
        transaction_id: &CorrelationId,
    ) -> Result<T, CallFailure>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let endpoint = call.endpoint;
        let url = self.resolve_url(call).map_err(CallFailure::Build)?;
        debug!(
            endpoint = endpoint.name,
            method = endpoint.method.as_str(),
            url = %url,
            transaction_id = %transaction_id,
            state = CallState::Built.as_str(),
            "request built"
        );

        let mut request = self
            .http
            .request(endpoint.method.as_reqwest(), url)
            .header(CONTENT_TYPE, "application/json")
            .header(TRANSACTION_ID_HEADER, transaction_id.as_str());
        match call.token {
            Some(token) => request = request.bearer_auth(token),
            None if endpoint.requires_auth => {
                warn!("endpoint {} requires a token but none was supplied", endpoint.name);
            }
            None => {}
        }
        if let Some(body) = call.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(CallFailure::Transport)?;
        let status = response.status().as_u16();
        debug!(
            endpoint = endpoint.name,
            transaction_id = %transaction_id,
            state = CallState::Sent.as_str(),
            status,
            "response received"
        );
        let body = response.bytes().await.map_err(CallFailure::Transport)?;
        classify(endpoint, status, &body, transaction_id)
    }

    /// 拼接 base URL、固定路径、动态段与查询参数。
    fn resolve_url<B: ?Sized>(&self, call: &Call<'_, B>) -> Result<Url, String> {
        let base = match call.endpoint.service {
            Service::Core => &self.core_base,
            Service::Transaction => &self.transaction_base,
        };
        let raw = format!(
            "{}{}",
            base.as_str().trim_end_matches('/'),
            call.endpoint.path
        );
        let mut url = Url::parse(&raw).map_err(|err| format!("invalid endpoint url {raw}: {err}"))?;
        url.set_query(None);
        if !call.segments.is_empty() {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| format!("endpoint url cannot carry path segments: {raw}"))?;
            for segment in &call.segments {
                segments.push(segment);
            }
        }
        if !call.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &call.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

/// 构造底层 reqwest 客户端。
fn build_http_client(timeout: Option<Duration>) -> anyhow::Result<reqwest::Client> {
    let mut builder = reqwest::Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder.build().context("build http client failed")
}

/// 一次调用的参数：端点、动态路径段、查询参数、令牌与可选 JSON 体。
pub struct Call<'a, B: ?Sized = ()> {
    endpoint: &'a Endpoint,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
    token: Option<&'a str>,
    body: Option<&'a B>,
}

impl<'a> Call<'a, ()> {
    pub fn new(endpoint: &'a Endpoint) -> Self {
        Self {
            endpoint,
            segments: Vec::new(),
            query: Vec::new(),
            token: None,
            body: None,
        }
    }
}

impl<'a, B: ?Sized> Call<'a, B> {
    /// 追加一个路径段（自动转义）。
    pub fn segment(mut self, value: impl ToString) -> Self {
        self.segments.push(value.to_string());
        self
    }

    pub fn query(mut self, key: &'static str, value: impl ToString) -> Self {
        self.query.push((key, value.to_string()));
        self
    }

    /// 仅在有值时追加查询参数。
    pub fn query_opt<V: ToString>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(key, value),
            None => self,
        }
    }

    pub fn bearer(mut self, token: &'a str) -> Self {
        self.token = Some(token);
        self
    }

    /// 附带 JSON 请求体。
    pub fn json<C: Serialize + ?Sized>(self, body: &'a C) -> Call<'a, C> {
        Call {
            endpoint: self.endpoint,
            segments: self.segments,
            query: self.query,
            token: self.token,
            body: Some(body),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use url::Url;
    use wp_shared_protocol::ServerModel;

    use super::{ApiClient, Call};
    use crate::{
        api::{
            endpoint::{Endpoint, HttpMethod, Service},
            error::ApiError,
            test_support::{StubBackend, unreachable_base_url},
        },
        locale::Locale,
    };

    const LIST: Endpoint = Endpoint::new("list", Service::Core, HttpMethod::Get, "/api/list")
        .fallback("Could not load the list");
    const CREATE: Endpoint =
        Endpoint::new("create", Service::Transaction, HttpMethod::Post, "/api/items")
            .accepting(&[201])
            .authenticated()
            .empty();

    fn client_for(base: &str) -> ApiClient {
        let url = Url::parse(base).expect("stub url should parse");
        ApiClient::new(url.clone(), url)
    }

    #[test]
    fn urls_join_base_path_segments_and_query() {
        let client = ApiClient::new(
            Url::parse("http://core.local/core").expect("url"),
            Url::parse("http://tx.local/transaction/").expect("url"),
        );
        let call = Call::new(&LIST).segment("a b").query("page", 2).query_opt::<i64>("size", None);
        let url = client.resolve_url(&call).expect("url should resolve");
        assert_eq!(url.as_str(), "http://core.local/core/api/list/a%20b?page=2");

        let call = Call::new(&CREATE);
        let url = client.resolve_url(&call).expect("url should resolve");
        assert_eq!(url.as_str(), "http://tx.local/transaction/api/items");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn standard_headers_are_attached() {
        let stub = StubBackend::spawn(201, "").await;
        let client = client_for(&stub.base_url);
        let body = json!({"name": "item"});
        let result: Result<(), ApiError> = client
            .execute(Call::new(&CREATE).bearer("jwt-token").json(&body))
            .await;
        assert!(result.is_ok());

        let seen = stub.last_request();
        assert_eq!(seen.method, "POST");
        assert_eq!(seen.path_and_query, "/api/items");
        assert_eq!(seen.content_type.as_deref(), Some("application/json"));
        assert_eq!(seen.authorization.as_deref(), Some("Bearer jwt-token"));
        assert_eq!(seen.body, r#"{"name":"item"}"#);
        let transaction_id = seen.transaction_id.expect("transaction_id header");
        assert!(uuid::Uuid::parse_str(&transaction_id).is_ok());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn authorization_is_omitted_without_token() {
        let stub = StubBackend::spawn(200, r#"{"data":[]}"#).await;
        let client = client_for(&stub.base_url);
        let servers: Vec<ServerModel> = client.execute(Call::new(&LIST)).await.expect("ok");
        assert!(servers.is_empty());
        assert!(stub.last_request().authorization.is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn each_call_gets_a_fresh_transaction_id() {
        let stub = StubBackend::spawn(200, r#"{"data":[]}"#).await;
        let client = client_for(&stub.base_url);
        let _: Vec<ServerModel> = client.execute(Call::new(&LIST)).await.expect("ok");
        let _: Vec<ServerModel> = client.execute(Call::new(&LIST)).await.expect("ok");
        let requests = stub.requests();
        assert_eq!(requests.len(), 2);
        assert_ne!(requests[0].transaction_id, requests[1].transaction_id);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn rejection_carries_the_sent_transaction_id() {
        let stub = StubBackend::spawn(404, r#"{"message":"Not found"}"#).await;
        let client = client_for(&stub.base_url);
        let err = client
            .execute::<Vec<ServerModel>, ()>(Call::new(&LIST))
            .await
            .expect_err("404 must fail");
        assert_eq!(err.code(), Some(404));
        assert_eq!(err.message(), "Not found");
        assert_eq!(
            err.transaction_id(),
            stub.last_request().transaction_id.as_deref()
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn ok_status_outside_expected_set_fails() {
        let stub = StubBackend::spawn(200, "").await;
        let client = client_for(&stub.base_url);
        let err = client
            .execute::<(), ()>(Call::new(&CREATE).bearer("jwt"))
            .await
            .expect_err("200 on a 201-only endpoint must fail");
        assert!(matches!(err, ApiError::ServerRejected { code: 200, .. }));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn unexpected_error_embeds_the_sent_transaction_id() {
        let stub = StubBackend::spawn(200, r#"{"data":"not-a-list"}"#).await;
        let client = client_for(&stub.base_url).with_locale(Locale::En);
        let err = client
            .execute::<Vec<ServerModel>, ()>(Call::new(&LIST))
            .await
            .expect_err("undecodable body must fail");
        let sent = stub.last_request().transaction_id.expect("header sent");
        assert!(matches!(err, ApiError::Unexpected { .. }));
        assert!(err.message().contains(&sent));
        assert_eq!(err.transaction_id(), Some(sent.as_str()));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn connection_failure_is_service_unavailable() {
        let base = unreachable_base_url().await;
        let client = client_for(&base);
        let err = client
            .execute::<Vec<ServerModel>, ()>(Call::new(&LIST))
            .await
            .expect_err("closed port must fail");
        assert_eq!(
            err,
            ApiError::ServiceUnavailable {
                message: "Servicios no disponibles. Intenta más tarde.".to_string()
            }
        );
    }
}
