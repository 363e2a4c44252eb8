//! 订阅计划接口（交易服务，裸数组返回）。

use wp_shared_protocol::Plan;

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_PLANS: Endpoint =
    Endpoint::new("get_plans", Service::Transaction, HttpMethod::Get, "/api/plan")
        .bare()
        .fallback("Could not load the subscription plans");

impl ApiClient {
    pub async fn get_plans(&self, language: &str) -> ApiResult<Vec<Plan>> {
        self.execute(Call::new(&GET_PLANS).query("language", language))
            .await
    }
}
