//! 端点声明：把每个后端接口的调用约定集中为常量，由共享执行器统一处理。

use reqwest::Method;

/// 默认失败文案（错误体缺少 message 且端点未声明时使用）。
const DEFAULT_FALLBACK_MESSAGE: &str = "The request could not be completed";

/// 后端服务分区：核心服务与交易服务使用不同 base URL。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Service {
    Core,
    Transaction,
}

/// 端点使用的 HTTP 方法。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// 转换为 reqwest 方法。
    pub(crate) fn as_reqwest(self) -> Method {
        match self {
            Self::Get => Method::GET,
            Self::Post => Method::POST,
            Self::Put => Method::PUT,
            Self::Patch => Method::PATCH,
            Self::Delete => Method::DELETE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

/// 成功响应体的形态。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadShape {
    /// `{ "data": ... }` 包裹，返回 `data`。
    Envelope,
    /// 裸 JSON（通常是数组），原样解码。
    Bare,
    /// 忽略响应体，返回 `()`。
    Empty,
}

/// 单个后端接口的调用约定。
#[derive(Debug, Clone, Copy)]
pub struct Endpoint {
    /// 日志中的端点名。
    pub name: &'static str,
    pub service: Service,
    pub method: HttpMethod,
    /// 以 `/` 开头的固定路径；动态段通过 `Call::segment` 追加。
    pub path: &'static str,
    /// 视为成功的状态码集合；必须同时落在 2xx 内。
    pub expected: &'static [u16],
    pub requires_auth: bool,
    /// 401/403 直接映射为固定文案，不解析响应体。
    pub auth_shortcuts: bool,
    pub payload: PayloadShape,
    /// 错误体缺少 message 时的兜底文案。
    pub fallback_message: &'static str,
}

impl Endpoint {
    /// 以最常见的约定构造端点：只接受 200、无鉴权、`data` 包裹。
    pub const fn new(
        name: &'static str,
        service: Service,
        method: HttpMethod,
        path: &'static str,
    ) -> Self {
        Self {
            name,
            service,
            method,
            path,
            expected: &[200],
            requires_auth: false,
            auth_shortcuts: false,
            payload: PayloadShape::Envelope,
            fallback_message: DEFAULT_FALLBACK_MESSAGE,
        }
    }

    /// 覆盖成功状态码集合。
    pub const fn accepting(mut self, codes: &'static [u16]) -> Self {
        self.expected = codes;
        self
    }

    /// 标记需要 Bearer 令牌。
    pub const fn authenticated(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    /// 启用 401/403 固定文案短路。
    pub const fn with_auth_shortcuts(mut self) -> Self {
        self.auth_shortcuts = true;
        self
    }

    pub const fn bare(mut self) -> Self {
        self.payload = PayloadShape::Bare;
        self
    }

    pub const fn empty(mut self) -> Self {
        self.payload = PayloadShape::Empty;
        self
    }

    pub const fn fallback(mut self, message: &'static str) -> Self {
        self.fallback_message = message;
        self
    }

    /// 严格成功判定：2xx 且命中声明的状态码。
    pub fn accepts(&self, status: u16) -> bool {
        (200..300).contains(&status) && self.expected.contains(&status)
    }
}

#[cfg(test)]
mod tests {
    use super::{Endpoint, HttpMethod, PayloadShape, Service};

    const READ: Endpoint = Endpoint::new("read", Service::Core, HttpMethod::Get, "/api/read");
    const DELETE: Endpoint = Endpoint::new("delete", Service::Core, HttpMethod::Delete, "/api/x")
        .accepting(&[200, 204])
        .authenticated()
        .with_auth_shortcuts()
        .empty();

    #[test]
    fn defaults_follow_read_convention() {
        assert_eq!(READ.expected, &[200]);
        assert!(!READ.requires_auth);
        assert!(!READ.auth_shortcuts);
        assert_eq!(READ.payload, PayloadShape::Envelope);
    }

    #[test]
    fn accepts_only_declared_success_codes() {
        assert!(READ.accepts(200));
        assert!(!READ.accepts(201));
        assert!(!READ.accepts(204));
        assert!(DELETE.accepts(204));
        assert!(DELETE.accepts(200));
        assert!(!DELETE.accepts(202));
    }

    #[test]
    fn non_success_codes_are_never_accepted() {
        const ODD: Endpoint =
            Endpoint::new("odd", Service::Core, HttpMethod::Get, "/odd").accepting(&[200, 302]);
        assert!(!ODD.accepts(302));
    }

    #[test]
    fn builder_flags_compose() {
        assert!(DELETE.requires_auth);
        assert!(DELETE.auth_shortcuts);
        assert_eq!(DELETE.payload, PayloadShape::Empty);
        assert_eq!(DELETE.method.as_str(), "DELETE");
    }

    #[test]
    fn every_endpoint_matches_its_backend_contract() {
        use super::{
            HttpMethod::{Delete, Get, Patch, Post, Put},
            PayloadShape::{Bare, Empty, Envelope},
            Service::{Core, Transaction},
        };

        use crate::api::{
            accounts, characters, dashboard, faqs, guilds, interstitial, mail, news,
            notifications, payment_methods, plans, promotions, realms, store, transactions, user,
        };

        type Row = (
            Endpoint,
            Service,
            HttpMethod,
            &'static str,
            &'static [u16],
            bool,
            bool,
            PayloadShape,
        );
        // 端点, 服务, 方法, 路径, 成功码, 鉴权, 短路, 负载形态
        #[rustfmt::skip]
        let table: &[Row] = &[
            (realms::GET_SERVERS, Core, Get, "/api/realm", &[200], false, false, Envelope),
            (realms::GET_REALM_VDP, Core, Get, "/api/realm/vdp", &[200], false, false, Envelope),
            (realms::CREATE_REALM, Core, Post, "/api/realm/create", &[201], true, true, Empty),
            (realms::UNLINK_REALM, Core, Delete, "/api/realm", &[200, 204], true, true, Empty),
            (user::LOGIN, Core, Post, "/api/auth/login", &[200], false, false, Envelope),
            (user::REFRESH_TOKEN, Core, Post, "/api/auth/refresh", &[200], false, false, Envelope),
            (user::REGISTER, Core, Post, "/api/account/web/create", &[201], false, false, Envelope),
            (user::GET_USER, Core, Get, "/api/account/web/user", &[200], true, true, Envelope),
            (user::UPDATE_LANGUAGE, Core, Patch, "/api/account/web/language", &[200], true, true, Empty),
            (user::RECOVER_PASSWORD, Core, Post, "/api/account/web/recovery", &[200], false, false, Empty),
            (accounts::GET_GAME_ACCOUNTS, Core, Get, "/api/account/game/available", &[200], true, true, Envelope),
            (accounts::GET_ACCOUNT_DETAIL, Core, Get, "/api/account/game/detail", &[200], true, true, Envelope),
            (accounts::CREATE_GAME_ACCOUNT, Core, Post, "/api/account/game/create", &[200, 201], true, false, Empty),
            (accounts::CHANGE_GAME_PASSWORD, Core, Put, "/api/account/game/password", &[200], true, false, Empty),
            (characters::GET_CHARACTERS, Core, Get, "/api/characters", &[200], true, false, Envelope),
            (characters::GET_ONLINE_CHARACTERS, Core, Get, "/api/characters/online", &[200], false, false, Bare),
            (guilds::GET_GUILDS, Core, Get, "/api/guilds", &[200], false, false, Envelope),
            (guilds::GET_GUILD, Core, Get, "/api/guilds/claim", &[200], false, false, Envelope),
            (guilds::ATTACH_GUILD, Core, Put, "/api/guilds/attach", &[200], true, false, Empty),
            (guilds::UNLINK_GUILD, Core, Delete, "/api/guilds/unlink", &[200, 204], true, false, Empty),
            (mail::GET_MAILS, Core, Get, "/api/characters/mails", &[200], true, false, Envelope),
            (notifications::GET_NOTIFICATIONS, Core, Get, "/api/notifications", &[200], true, false, Envelope),
            (notifications::CREATE_NOTIFICATION, Core, Post, "/api/notifications", &[201], true, true, Empty),
            (notifications::DELETE_NOTIFICATION, Core, Delete, "/api/notifications", &[200, 204], true, true, Empty),
            (payment_methods::GET_PAYMENT_METHODS, Transaction, Get, "/api/payment-methods", &[200], true, false, Envelope),
            (payment_methods::CREATE_PAYMENT_METHOD, Transaction, Post, "/api/payment-methods", &[201], true, true, Empty),
            (payment_methods::DELETE_PAYMENT_METHOD, Transaction, Delete, "/api/payment-methods", &[200, 204], true, true, Empty),
            (plans::GET_PLANS, Transaction, Get, "/api/plan", &[200], false, false, Bare),
            (store::GET_CATEGORIES, Core, Get, "/api/products/category", &[200], false, false, Envelope),
            (store::GET_PRODUCTS, Core, Get, "/api/products", &[200], false, false, Envelope),
            (store::GET_PRODUCT, Core, Get, "/api/products", &[200], false, false, Envelope),
            (store::BUY_PRODUCT, Transaction, Post, "/api/transaction/purchase", &[200], true, true, Envelope),
            (promotions::GET_PROMOTIONS, Core, Get, "/api/promotions", &[200], true, false, Envelope),
            (promotions::CLAIM_PROMOTION, Core, Post, "/api/promotions/claim", &[200], true, true, Empty),
            (transactions::GET_TRANSACTIONS, Transaction, Get, "/api/transaction", &[200], true, true, Envelope),
            (transactions::GET_SUBSCRIPTION_STATUS, Transaction, Get, "/api/subscription", &[200], true, true, Envelope),
            (news::GET_NEWS, Core, Get, "/api/news", &[200], false, false, Bare),
            (news::GET_NEWS_BY_ID, Core, Get, "/api/news", &[200], false, false, Envelope),
            (news::CREATE_NEWS, Core, Post, "/api/news", &[200, 201], true, true, Empty),
            (interstitial::GET_INTERSTITIAL, Core, Get, "/api/interstitial", &[200], false, false, Envelope),
            (interstitial::CREATE_INTERSTITIAL, Core, Post, "/api/interstitial", &[201], true, true, Empty),
            (dashboard::GET_DASHBOARD_METRICS, Core, Get, "/api/dashboard/metrics", &[200], true, true, Envelope),
            (faqs::GET_FAQS, Core, Get, "/api/faqs", &[200], false, false, Envelope),
        ];
        assert_eq!(table.len(), 43);

        for (endpoint, service, method, path, expected, auth, shortcuts, payload) in table {
            let name = endpoint.name;
            assert_eq!(endpoint.service, *service, "{name} service");
            assert_eq!(endpoint.method, *method, "{name} method");
            assert_eq!(endpoint.path, *path, "{name} path");
            assert_eq!(endpoint.expected, *expected, "{name} expected codes");
            assert_eq!(endpoint.requires_auth, *auth, "{name} auth");
            assert_eq!(endpoint.auth_shortcuts, *shortcuts, "{name} shortcuts");
            assert_eq!(endpoint.payload, *payload, "{name} payload");
            assert!(!endpoint.fallback_message.is_empty(), "{name} fallback");
        }

        let mut names: Vec<&str> = table.iter().map(|row| row.0.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), table.len(), "endpoint names must be unique");
    }
}
