//! 游戏账号接口。

use wp_shared_protocol::{
    AccountDetail, AccountsPage, ChangePasswordRequest, CreateGameAccountRequest,
};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const GET_GAME_ACCOUNTS: Endpoint = Endpoint::new(
    "get_game_accounts",
    Service::Core,
    HttpMethod::Get,
    "/api/account/game/available",
)
.authenticated()
.with_auth_shortcuts()
.fallback("Could not load your game accounts");

pub const GET_ACCOUNT_DETAIL: Endpoint = Endpoint::new(
    "get_account_detail",
    Service::Core,
    HttpMethod::Get,
    "/api/account/game/detail",
)
.authenticated()
.with_auth_shortcuts()
.fallback("Could not load the account detail");

pub const CREATE_GAME_ACCOUNT: Endpoint = Endpoint::new(
    "create_game_account",
    Service::Core,
    HttpMethod::Post,
    "/api/account/game/create",
)
.accepting(&[200, 201])
.authenticated()
.empty()
.fallback("The game account could not be created");

pub const CHANGE_GAME_PASSWORD: Endpoint = Endpoint::new(
    "change_game_password",
    Service::Core,
    HttpMethod::Put,
    "/api/account/game/password",
)
.authenticated()
.empty()
.fallback("The password could not be changed");

impl ApiClient {
    /// 分页查询游戏账号；`server_id` 为空时返回全部服务器。
    pub async fn get_game_accounts(
        &self,
        jwt: &str,
        page: u32,
        size: u32,
        server_id: Option<i64>,
    ) -> ApiResult<AccountsPage> {
        self.execute(
            Call::new(&GET_GAME_ACCOUNTS)
                .bearer(jwt)
                .query("page", page)
                .query("size", size)
                .query_opt("server_id", server_id),
        )
        .await
    }

    pub async fn get_account_detail(
        &self,
        jwt: &str,
        account_id: i64,
        server_id: i64,
    ) -> ApiResult<AccountDetail> {
        self.execute(
            Call::new(&GET_ACCOUNT_DETAIL)
                .bearer(jwt)
                .segment(account_id)
                .query("server_id", server_id),
        )
        .await
    }

    pub async fn create_game_account(
        &self,
        jwt: &str,
        request: &CreateGameAccountRequest,
    ) -> ApiResult<()> {
        self.execute(Call::new(&CREATE_GAME_ACCOUNT).bearer(jwt).json(request))
            .await
    }

    pub async fn change_game_password(
        &self,
        jwt: &str,
        request: &ChangePasswordRequest,
    ) -> ApiResult<()> {
        self.execute(Call::new(&CHANGE_GAME_PASSWORD).bearer(jwt).json(request))
            .await
    }
}

#[cfg(test)]
mod tests {
    use url::Url;
    use wp_shared_protocol::CreateGameAccountRequest;

    use crate::api::{ApiClient, test_support::StubBackend};

    fn client_for(stub: &StubBackend) -> ApiClient {
        let url = Url::parse(&stub.base_url).expect("stub url");
        ApiClient::new(url.clone(), url)
    }

    #[tokio::test(flavor = "current_thread")]
    async fn accounts_page_sends_pagination_query() {
        let stub = StubBackend::spawn(
            200,
            r#"{"data":{"accounts":[{"id":9,"username":"thrall","realm":"Realm1","server_id":1}],"size":1}}"#,
        )
        .await;
        let page = client_for(&stub)
            .get_game_accounts("jwt", 0, 10, Some(1))
            .await
            .expect("accounts");
        assert_eq!(page.size, 1);
        assert_eq!(page.accounts[0].username, "thrall");
        assert_eq!(
            stub.last_request().path_and_query,
            "/api/account/game/available?page=0&size=10&server_id=1"
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn create_accepts_both_200_and_201() {
        let request = CreateGameAccountRequest {
            username: "jaina".to_string(),
            password: "proudmoore1".to_string(),
            server_id: 1,
        };
        for status in [200, 201] {
            let stub = StubBackend::spawn(status, "").await;
            client_for(&stub)
                .create_game_account("jwt", &request)
                .await
                .expect("create should succeed");
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn detail_path_carries_account_id() {
        let stub = StubBackend::spawn(200, r#"{"data":{"id":3,"username":"uther","server":"Realm1"}}"#)
            .await;
        let detail = client_for(&stub)
            .get_account_detail("jwt", 3, 1)
            .await
            .expect("detail");
        assert_eq!(detail.username, "uther");
        assert_eq!(
            stub.last_request().path_and_query,
            "/api/account/game/detail/3?server_id=1"
        );
    }
}
