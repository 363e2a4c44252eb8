//! 角色邮箱接口。

use wp_shared_protocol::MailsModel;

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_MAILS: Endpoint =
    Endpoint::new("get_mails", Service::Core, HttpMethod::Get, "/api/characters/mails")
        .authenticated()
        .fallback("Could not load the mailbox");

impl ApiClient {
    pub async fn get_mails(
        &self,
        jwt: &str,
        account_id: i64,
        character_id: i64,
        server_id: i64,
    ) -> ApiResult<MailsModel> {
        self.execute(
            Call::new(&GET_MAILS)
                .bearer(jwt)
                .query("account_id", account_id)
                .query("character_id", character_id)
                .query("server_id", server_id),
        )
        .await
    }
}
