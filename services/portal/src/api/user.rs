//! Web 用户与认证接口。

use wp_shared_protocol::{
    CreateUserRequest, LoginData, LoginRequest, RecoverPasswordRequest, RefreshTokenRequest,
    UpdateLanguageRequest, UserDetail,
};

use super::{ApiClient, ApiResult, Call, Endpoint, HttpMethod, Service};

pub const LOGIN: Endpoint =
    Endpoint::new("login", Service::Core, HttpMethod::Post, "/api/auth/login")
        .fallback("Invalid username or password");

pub const REFRESH_TOKEN: Endpoint =
    Endpoint::new("refresh_token", Service::Core, HttpMethod::Post, "/api/auth/refresh")
        .fallback("Your session could not be renewed");

pub const REGISTER: Endpoint =
    Endpoint::new("register", Service::Core, HttpMethod::Post, "/api/account/web/create")
        .accepting(&[201])
        .fallback("The account could not be created");

pub const GET_USER: Endpoint =
    Endpoint::new("get_user", Service::Core, HttpMethod::Get, "/api/account/web/user")
        .authenticated()
        .with_auth_shortcuts()
        .fallback("Could not load your profile");

pub const UPDATE_LANGUAGE: Endpoint = Endpoint::new(
    "update_language",
    Service::Core,
    HttpMethod::Patch,
    "/api/account/web/language",
)
.authenticated()
.with_auth_shortcuts()
.empty()
.fallback("Could not update the language");

pub const RECOVER_PASSWORD: Endpoint = Endpoint::new(
    "recover_password",
    Service::Core,
    HttpMethod::Post,
    "/api/account/web/recovery",
)
.empty()
.fallback("Could not start the password recovery");

impl ApiClient {
    /// 用户名密码登录，返回令牌与资料摘要。
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginData> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.execute(Call::new(&LOGIN).json(&request)).await
    }

    /// 用刷新令牌换取新的访问令牌。
    pub async fn refresh_token(&self, refresh_token: &str) -> ApiResult<LoginData> {
        let request = RefreshTokenRequest {
            refresh_token: refresh_token.to_string(),
        };
        self.execute(Call::new(&REFRESH_TOKEN).json(&request)).await
    }

    /// 注册 Web 账号；调用前应已通过 `portal::validation` 校验。
    pub async fn register(&self, request: &CreateUserRequest) -> ApiResult<LoginData> {
        self.execute(Call::new(&REGISTER).json(request)).await
    }

    pub async fn get_user(&self, jwt: &str) -> ApiResult<UserDetail> {
        self.execute(Call::new(&GET_USER).bearer(jwt)).await
    }

    pub async fn update_language(&self, jwt: &str, language: &str) -> ApiResult<()> {
        let request = UpdateLanguageRequest {
            language: language.to_string(),
        };
        self.execute(Call::new(&UPDATE_LANGUAGE).bearer(jwt).json(&request))
            .await
    }

    pub async fn recover_password(&self, email: &str) -> ApiResult<()> {
        let request = RecoverPasswordRequest {
            email: email.to_string(),
        };
        self.execute(Call::new(&RECOVER_PASSWORD).json(&request))
            .await
    }
}
