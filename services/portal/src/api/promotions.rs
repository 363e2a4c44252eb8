//! 促销活动接口。

use wp_shared_protocol::{ClaimPromotionRequest, Promotion};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_PROMOTIONS: Endpoint =
    Endpoint::new("get_promotions", Service::Core, HttpMethod::Get, "/api/promotions")
        .authenticated()
        .fallback("Could not load the promotions");

pub const CLAIM_PROMOTION: Endpoint =
    Endpoint::new("claim_promotion", Service::Core, HttpMethod::Post, "/api/promotions/claim")
        .authenticated()
        .with_auth_shortcuts()
        .empty()
        .fallback("The promotion could not be claimed");

impl ApiClient {
    pub async fn get_promotions(
        &self,
        jwt: &str,
        server_id: i64,
        account_id: i64,
        character_id: i64,
        language: &str,
    ) -> ApiResult<Vec<Promotion>> {
        self.execute(
            Call::new(&GET_PROMOTIONS)
                .bearer(jwt)
                .query("server_id", server_id)
                .query("account_id", account_id)
                .query("character_id", character_id)
                .query("language", language),
        )
        .await
    }

    pub async fn claim_promotion(
        &self,
        jwt: &str,
        request: &ClaimPromotionRequest,
    ) -> ApiResult<()> {
        self.execute(Call::new(&CLAIM_PROMOTION).bearer(jwt).json(request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use url::Url;
    use wp_shared_protocol::ClaimPromotionRequest;

    use crate::api::{ApiClient, test_support::StubBackend};

    fn client_for(stub: &StubBackend) -> ApiClient {
        let url = Url::parse(&stub.base_url).expect("stub url");
        ApiClient::new(url.clone(), url)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn promotions_carry_character_scope() {
        let stub = StubBackend::spawn(
            200,
            r#"{"data":[{"id":1,"name":"Montura","type":"ITEM","min_level":10,"max_level":80}]}"#,
        )
        .await;
        let promotions = client_for(&stub)
            .get_promotions("jwt", 1, 2, 3, "es")
            .await
            .expect("promotions");
        assert_eq!(promotions[0].kind, "ITEM");
        assert_eq!(promotions[0].max_level, 80);
        assert_eq!(
            stub.last_request().path_and_query,
            "/api/promotions?server_id=1&account_id=2&character_id=3&language=es"
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn claim_expired_token_uses_fixed_message() {
        let stub = StubBackend::spawn(401, r#"{"message":"jwt expired"}"#).await;
        let err = client_for(&stub)
            .claim_promotion(
                "jwt",
                &ClaimPromotionRequest {
                    server_id: 1,
                    account_id: 2,
                    character_id: 3,
                    promotion_id: 4,
                    language: "es".to_string(),
                },
            )
            .await
            .expect_err("401 must fail");
        assert_eq!(err.message(), "Token expiration");
        assert!(err.is_auth_expired());
        assert_eq!(stub.last_request().method, "POST");
    }
}
