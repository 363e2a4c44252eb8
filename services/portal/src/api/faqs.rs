//! 常见问题接口。

use wp_shared_protocol::Faq;

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_FAQS: Endpoint =
    Endpoint::new("get_faqs", Service::Core, HttpMethod::Get, "/api/faqs")
        .fallback("Could not load the FAQ");

impl ApiClient {
    /// 按类别（`SUPPORT` / `SUBSCRIPTION` ...）与语言查询 FAQ。
    pub async fn get_faqs(&self, kind: &str, language: &str) -> ApiResult<Vec<Faq>> {
        self.execute(
            Call::new(&GET_FAQS)
                .query("type", kind)
                .query("language", language),
        )
        .await
    }
}
