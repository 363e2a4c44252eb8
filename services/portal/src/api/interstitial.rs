//! 首页插页广告接口。

use wp_shared_protocol::{CreateInterstitialRequest, Interstitial};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_INTERSTITIAL: Endpoint =
    Endpoint::new("get_interstitial", Service::Core, HttpMethod::Get, "/api/interstitial")
        .fallback("Could not load the announcement");

pub const CREATE_INTERSTITIAL: Endpoint =
    Endpoint::new("create_interstitial", Service::Core, HttpMethod::Post, "/api/interstitial")
        .accepting(&[201])
        .authenticated()
        .with_auth_shortcuts()
        .empty()
        .fallback("The announcement could not be created");

impl ApiClient {
    /// 当前语言下生效的插页广告；没有时返回 `None`。
    pub async fn get_interstitial(&self, language: &str) -> ApiResult<Option<Interstitial>> {
        self.execute(Call::new(&GET_INTERSTITIAL).query("language", language))
            .await
    }

    pub async fn create_interstitial(
        &self,
        jwt: &str,
        request: &CreateInterstitialRequest,
    ) -> ApiResult<()> {
        self.execute(Call::new(&CREATE_INTERSTITIAL).bearer(jwt).json(request))
            .await
    }
}
