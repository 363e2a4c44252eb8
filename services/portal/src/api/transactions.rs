//! 交易与订阅接口（交易服务）。

use wp_shared_protocol::{SubscriptionStatus, TransactionsPage};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_TRANSACTIONS: Endpoint =
    Endpoint::new("get_transactions", Service::Transaction, HttpMethod::Get, "/api/transaction")
        .authenticated()
        .with_auth_shortcuts()
        .fallback("Could not load your purchases");

pub const GET_SUBSCRIPTION_STATUS: Endpoint = Endpoint::new(
    "get_subscription_status",
    Service::Transaction,
    HttpMethod::Get,
    "/api/subscription",
)
.authenticated()
.with_auth_shortcuts()
.fallback("Could not load your subscription");

impl ApiClient {
    pub async fn get_transactions(
        &self,
        jwt: &str,
        page: u32,
        size: u32,
    ) -> ApiResult<TransactionsPage> {
        self.execute(
            Call::new(&GET_TRANSACTIONS)
                .bearer(jwt)
                .query("page", page)
                .query("size", size),
        )
        .await
    }

    pub async fn get_subscription_status(&self, jwt: &str) -> ApiResult<SubscriptionStatus> {
        self.execute(Call::new(&GET_SUBSCRIPTION_STATUS).bearer(jwt))
            .await
    }
}
