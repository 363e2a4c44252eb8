//! 支付方式接口（交易服务，管理端）。

use wp_shared_protocol::{CreatePaymentMethodRequest, PaymentMethod};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_PAYMENT_METHODS: Endpoint = Endpoint::new(
    "get_payment_methods",
    Service::Transaction,
    HttpMethod::Get,
    "/api/payment-methods",
)
.authenticated()
.fallback("Could not load the payment methods");

pub const CREATE_PAYMENT_METHOD: Endpoint = Endpoint::new(
    "create_payment_method",
    Service::Transaction,
    HttpMethod::Post,
    "/api/payment-methods",
)
.accepting(&[201])
.authenticated()
.with_auth_shortcuts()
.empty()
.fallback("The payment method could not be saved");

pub const DELETE_PAYMENT_METHOD: Endpoint = Endpoint::new(
    "delete_payment_method",
    Service::Transaction,
    HttpMethod::Delete,
    "/api/payment-methods",
)
.accepting(&[200, 204])
.authenticated()
.with_auth_shortcuts()
.empty()
.fallback("The payment method could not be deleted");

impl ApiClient {
    pub async fn get_payment_methods(&self, jwt: &str) -> ApiResult<Vec<PaymentMethod>> {
        self.execute(Call::new(&GET_PAYMENT_METHODS).bearer(jwt))
            .await
    }

    pub async fn create_payment_method(
        &self,
        jwt: &str,
        request: &CreatePaymentMethodRequest,
    ) -> ApiResult<()> {
        self.execute(Call::new(&CREATE_PAYMENT_METHOD).bearer(jwt).json(request))
            .await
    }

    pub async fn delete_payment_method(&self, jwt: &str, method_id: i64) -> ApiResult<()> {
        self.execute(
            Call::new(&DELETE_PAYMENT_METHOD)
                .bearer(jwt)
                .segment(method_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use url::Url;
    use wp_shared_protocol::CreatePaymentMethodRequest;

    use crate::api::{ApiClient, ApiError, test_support::StubBackend};

    #[tokio::test(flavor = "current_thread")]
    async fn payment_methods_use_transaction_base() {
        let core = StubBackend::spawn(200, r#"{"data":[]}"#).await;
        let transaction =
            StubBackend::spawn(200, r#"{"data":[{"id":1,"payment_type":"PAYU","name":"PayU"}]}"#)
                .await;
        let client = ApiClient::new(
            Url::parse(&core.base_url).expect("core url"),
            Url::parse(&transaction.base_url).expect("transaction url"),
        );
        let methods = client.get_payment_methods("jwt").await.expect("methods");
        assert_eq!(methods[0].payment_type, "PAYU");
        assert!(core.requests().is_empty());
        assert_eq!(transaction.requests().len(), 1);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn create_rejects_plain_ok_and_delete_accepts_no_content() {
        let ok = StubBackend::spawn(200, "").await;
        let url = Url::parse(&ok.base_url).expect("stub url");
        let err = ApiClient::new(url.clone(), url)
            .create_payment_method(
                "jwt",
                &CreatePaymentMethodRequest {
                    payment_type: "PAYU".to_string(),
                    name: "PayU".to_string(),
                    public_key: "pk".to_string(),
                    secret_key: "sk".to_string(),
                },
            )
            .await
            .expect_err("create expects 201");
        assert!(matches!(err, ApiError::ServerRejected { code: 200, .. }));

        let no_content = StubBackend::spawn(204, "").await;
        let url = Url::parse(&no_content.base_url).expect("stub url");
        ApiClient::new(url.clone(), url)
            .delete_payment_method("jwt", 3)
            .await
            .expect("204 is a success for delete");
        let seen = no_content.last_request();
        assert_eq!(seen.method, "DELETE");
        assert_eq!(seen.path_and_query, "/api/payment-methods/3");
    }
}
