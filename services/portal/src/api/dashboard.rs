//! 管理面板指标接口。

use wp_shared_protocol::DashboardMetrics;

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_DASHBOARD_METRICS: Endpoint = Endpoint::new(
    "get_dashboard_metrics",
    Service::Core,
    HttpMethod::Get,
    "/api/dashboard/metrics",
)
.authenticated()
.with_auth_shortcuts()
.fallback("Could not load the dashboard");

impl ApiClient {
    pub async fn get_dashboard_metrics(
        &self,
        jwt: &str,
        server_id: i64,
    ) -> ApiResult<DashboardMetrics> {
        self.execute(
            Call::new(&GET_DASHBOARD_METRICS)
                .bearer(jwt)
                .query("server_id", server_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::api::{ApiClient, test_support::StubBackend};

    fn client_for(stub: &StubBackend) -> ApiClient {
        let url = Url::parse(&stub.base_url).expect("stub url");
        ApiClient::new(url.clone(), url)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn metrics_are_scoped_to_realm() {
        let stub = StubBackend::spawn(
            200,
            r#"{"data":{"total_users":120,"online_users":8,"total_guilds":3,"external_registrations":2,"characters_count":300}}"#,
        )
        .await;
        let metrics = client_for(&stub)
            .get_dashboard_metrics("jwt", 1)
            .await
            .expect("metrics");
        assert_eq!(metrics.online_users, 8);
        assert_eq!(metrics.characters_count, 300);
        assert_eq!(stub.last_request().path_and_query, "/api/dashboard/metrics?server_id=1");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn expired_token_uses_fixed_message() {
        let stub = StubBackend::spawn(401, r#"{"message":"ignored"}"#).await;
        let err = client_for(&stub)
            .get_dashboard_metrics("jwt", 1)
            .await
            .expect_err("401 must fail");
        assert_eq!(err.message(), "Token expiration");
        assert!(err.is_auth_expired());
    }
}
