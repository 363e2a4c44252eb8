//! 站内通知接口。

use wp_shared_protocol::{CreateNotificationRequest, Notification};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_NOTIFICATIONS: Endpoint =
    Endpoint::new("get_notifications", Service::Core, HttpMethod::Get, "/api/notifications")
        .authenticated()
        .fallback("Could not load the notifications");

pub const CREATE_NOTIFICATION: Endpoint = Endpoint::new(
    "create_notification",
    Service::Core,
    HttpMethod::Post,
    "/api/notifications",
)
.accepting(&[201])
.authenticated()
.with_auth_shortcuts()
.empty()
.fallback("The notification could not be created");

pub const DELETE_NOTIFICATION: Endpoint = Endpoint::new(
    "delete_notification",
    Service::Core,
    HttpMethod::Delete,
    "/api/notifications",
)
.accepting(&[200, 204])
.authenticated()
.with_auth_shortcuts()
.empty()
.fallback("The notification could not be deleted");

impl ApiClient {
    pub async fn get_notifications(
        &self,
        jwt: &str,
        page: u32,
        size: u32,
    ) -> ApiResult<Vec<Notification>> {
        self.execute(
            Call::new(&GET_NOTIFICATIONS)
                .bearer(jwt)
                .query("page", page)
                .query("size", size),
        )
        .await
    }

    pub async fn create_notification(
        &self,
        jwt: &str,
        request: &CreateNotificationRequest,
    ) -> ApiResult<()> {
        self.execute(Call::new(&CREATE_NOTIFICATION).bearer(jwt).json(request))
            .await
    }

    pub async fn delete_notification(&self, jwt: &str, notification_id: i64) -> ApiResult<()> {
        self.execute(
            Call::new(&DELETE_NOTIFICATION)
                .bearer(jwt)
                .segment(notification_id),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use url::Url;
    use wp_shared_protocol::CreateNotificationRequest;

    use crate::api::{ApiClient, ApiError, test_support::StubBackend};

    fn client_for(stub: &StubBackend) -> ApiClient {
        let url = Url::parse(&stub.base_url).expect("stub url");
        ApiClient::new(url.clone(), url)
    }

    fn request() -> CreateNotificationRequest {
        CreateNotificationRequest {
            title: "Mantenimiento".to_string(),
            message: "El reino se reinicia a las 03:00".to_string(),
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn notifications_page_is_unwrapped() {
        let stub = StubBackend::spawn(
            200,
            r#"{"data":[{"id":4,"title":"Hola","message":"Bienvenido","read":false}]}"#,
        )
        .await;
        let notifications = client_for(&stub)
            .get_notifications("jwt", 0, 10)
            .await
            .expect("notifications");
        assert_eq!(notifications[0].title, "Hola");
        assert_eq!(stub.last_request().path_and_query, "/api/notifications?page=0&size=10");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn create_notification_requires_created() {
        let stub = StubBackend::spawn(200, r#"{"data":null}"#).await;
        let err = client_for(&stub)
            .create_notification("jwt", &request())
            .await
            .expect_err("create expects 201");
        assert!(matches!(err, ApiError::ServerRejected { code: 200, .. }));
        assert_eq!(err.message(), "The notification could not be created");

        let created = StubBackend::spawn(201, "").await;
        client_for(&created)
            .create_notification("jwt", &request())
            .await
            .expect("201 is a success");
        let body: serde_json::Value =
            serde_json::from_str(&created.last_request().body).expect("json body");
        assert_eq!(body["title"], "Mantenimiento");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn delete_notification_accepts_no_content() {
        let stub = StubBackend::spawn(204, "").await;
        client_for(&stub)
            .delete_notification("jwt", 12)
            .await
            .expect("204 is a success for delete");
        let seen = stub.last_request();
        assert_eq!(seen.method, "DELETE");
        assert_eq!(seen.path_and_query, "/api/notifications/12");
    }
}
