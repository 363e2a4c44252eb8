//! 领域资源：与后端 JSON 一一对应的扁平结构。
//!
//! 客户端只持有快照，不做跨实体一致性校验；响应结构统一 `#[serde(default)]`，
//! 后端新增或缺失字段都不影响解析。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// 服务器（realm）
// ---------------------------------------------------------------------------

/// 可用服务器摘要。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerModel {
    pub id: i64,
    pub name: String,
    // 资料片名称（Classic / WotLK ...）。
    pub exp_name: String,
    pub avatar: Option<String>,
    pub web_site: Option<String>,
    pub realmlist: Option<String>,
    // 是否在线。
    pub status: bool,
}

/// 服务器详情落地页（VDP）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RealmVdp {
    pub id: i64,
    pub name: String,
    pub title: String,
    pub sub_title: String,
    pub description: String,
    pub logo: Option<String>,
    pub header_left: Option<String>,
    pub header_center: Option<String>,
    pub header_right: Option<String>,
    pub youtube_url: Option<String>,
    pub realmlist: Option<String>,
    // 卖点列表。
    pub information: Vec<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// 管理端创建服务器请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateRealmRequest {
    pub name: String,
    pub host: String,
    pub port: u16,
    pub realmlist: String,
    pub web_site: String,
    pub expansion_id: i64,
    pub api_key: String,
}

// ---------------------------------------------------------------------------
// 游戏账号
// ---------------------------------------------------------------------------

/// 游戏账号列表项。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountGame {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub realm: String,
    pub server_id: i64,
    pub expansion: Option<String>,
    pub status: bool,
}

/// 游戏账号分页结果。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountsPage {
    pub accounts: Vec<AccountGame>,
    // 总条数。
    pub size: i64,
}

/// 游戏账号详情。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountDetail {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub expansion: String,
    pub online: bool,
    pub failed_logins: i64,
    pub join_date: Option<String>,
    pub last_ip: Option<String>,
    pub last_login: Option<String>,
    pub mute: bool,
    pub mute_reason: Option<String>,
    pub mute_by: Option<String>,
    pub os: Option<String>,
    pub server: String,
}

/// 创建游戏账号请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateGameAccountRequest {
    pub username: String,
    pub password: String,
    pub server_id: i64,
}

/// 修改游戏账号密码请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChangePasswordRequest {
    pub server_id: i64,
    pub account_id: i64,
    pub password: String,
    pub new_password: String,
}

// ---------------------------------------------------------------------------
// Web 用户与认证
// ---------------------------------------------------------------------------

/// 登录请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// 刷新令牌请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// 登录/注册/刷新成功后的令牌与资料摘要。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginData {
    pub user_id: i64,
    pub jwt: String,
    pub refresh_token: String,
    // 服务端签发的过期时间（RFC3339）；缺失时从 JWT `exp` 推导。
    pub expiration_date: Option<String>,
    pub avatar_url: Option<String>,
    pub language: Option<String>,
    pub pending_validation: bool,
    pub admin: bool,
}

/// Web 账号注册请求。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: NaiveDate,
    pub country: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cell_phone: Option<String>,
}

/// 当前登录用户详情。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetail {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<String>,
    pub country: String,
    pub language: String,
    pub avatar_url: Option<String>,
    pub cell_phone: Option<String>,
    pub admin: bool,
    pub verified: bool,
}

/// 语言偏好修改请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateLanguageRequest {
    pub language: String,
}

/// 找回密码请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecoverPasswordRequest {
    pub email: String,
}

// ---------------------------------------------------------------------------
// 角色、公会、邮件
// ---------------------------------------------------------------------------

/// 账号下的角色。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Character {
    pub id: i64,
    pub name: String,
    pub race_id: i64,
    pub class_id: i64,
    pub gender: i64,
    pub level: i64,
    pub xp: i64,
    pub money: i64,
    pub guild_name: Option<String>,
    pub online: bool,
}

/// 在线角色（公开接口，裸数组返回）。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnlineCharacter {
    pub id: i64,
    pub name: String,
    pub level: i64,
    pub race_id: i64,
    pub class_id: i64,
    pub gender: i64,
    pub guild_name: Option<String>,
}

/// 公会信息。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Guild {
    pub id: i64,
    pub name: String,
    pub leader_name: String,
    pub info: Option<String>,
    pub motd: Option<String>,
    pub create_date: Option<String>,
    pub bank_money: i64,
    pub members: i64,
    // 是否允许公开加入。
    pub public_access: bool,
    pub discord: Option<String>,
    pub server_name: Option<String>,
}

/// 公会分页结果。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuildsPage {
    pub guilds: Vec<Guild>,
    pub total_elements: i64,
}

/// 角色加入公会请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AttachGuildRequest {
    pub server_id: i64,
    pub guild_id: i64,
    pub account_id: i64,
    pub character_id: i64,
}

/// 角色邮箱。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MailsModel {
    pub mails: Vec<Mail>,
    pub size: i64,
}

/// 单封游戏内邮件。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Mail {
    pub id: i64,
    pub message_type: i64,
    pub sender_name: Option<String>,
    pub subject: String,
    pub body: String,
    pub money: i64,
    pub expire_time: Option<String>,
    pub deliver_time: Option<String>,
    pub has_items: bool,
}

// ---------------------------------------------------------------------------
// 通知、新闻、插页广告、FAQ
// ---------------------------------------------------------------------------

/// 站内通知。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Notification {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub created_at: Option<String>,
    pub read: bool,
}

/// 创建通知请求（管理端）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNotificationRequest {
    pub title: String,
    pub message: String,
}

/// 新闻条目。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct News {
    pub id: i64,
    pub title: String,
    pub summary: String,
    pub img_url: Option<String>,
    pub author: String,
    pub content: Option<String>,
    pub created_at: Option<String>,
}

/// 发布新闻请求（管理端）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateNewsRequest {
    pub title: String,
    pub summary: String,
    pub img_url: String,
    pub author: String,
    pub content: String,
}

/// 首页插页广告。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interstitial {
    pub id: i64,
    pub url_img: String,
    pub redirect_url: String,
    pub language: String,
    pub active: bool,
}

/// 创建插页广告请求（管理端）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateInterstitialRequest {
    pub url_img: String,
    pub redirect_url: String,
    pub language: String,
    pub active: bool,
}

/// 常见问题。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Faq {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub language: String,
    #[serde(rename = "type")]
    pub kind: String,
}

// ---------------------------------------------------------------------------
// 商店、订阅、支付
// ---------------------------------------------------------------------------

/// 支付方式（管理端配置）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentMethod {
    pub id: i64,
    pub payment_type: String,
    pub name: String,
    pub created_at: Option<String>,
}

/// 新增支付方式请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatePaymentMethodRequest {
    pub payment_type: String,
    pub name: String,
    pub public_key: String,
    pub secret_key: String,
}

/// 订阅计划。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub discount: i64,
    pub discounted_price: f64,
    pub currency: String,
    pub frequency_type: String,
    pub frequency_value: i64,
    pub features: Vec<String>,
}

/// 商品分类。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCategory {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub disclaimer: Option<String>,
}

/// 商品。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub disclaimer: Option<String>,
    pub price: f64,
    pub discount: i64,
    pub discount_price: f64,
    // 是否以积分支付。
    pub use_points: bool,
    pub image_url: Option<String>,
    pub partner: Option<String>,
    pub reference_number: String,
    pub language: String,
}

/// 购买请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuyProductRequest {
    pub reference_number: String,
    pub server_id: i64,
    pub account_id: i64,
    pub payment_type: String,
}

/// 购买结果：支付网关跳转信息。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuyRedirect {
    pub redirect: String,
    // false 表示积分购买已直接完成，无需跳转。
    pub is_payment: bool,
}

/// 促销活动。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Promotion {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub img: Option<String>,
    pub btn_text: Option<String>,
    pub reference: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub min_level: i64,
    pub max_level: i64,
    pub send_item: bool,
}

/// 领取促销请求。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClaimPromotionRequest {
    pub server_id: i64,
    pub account_id: i64,
    pub character_id: i64,
    pub promotion_id: i64,
    pub language: String,
}

/// 交易记录。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transaction {
    pub id: i64,
    pub product_name: Option<String>,
    pub reference_number: String,
    pub price: f64,
    pub currency: String,
    pub status: String,
    pub creation_date: Option<String>,
    pub credit_points: bool,
    pub send: bool,
}

/// 交易分页结果。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionsPage {
    pub transactions: Vec<Transaction>,
    pub size: i64,
}

/// 当前用户订阅状态。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubscriptionStatus {
    pub active: bool,
    pub plan_name: Option<String>,
    pub next_invoice_date: Option<String>,
}

// ---------------------------------------------------------------------------
// 管理面板
// ---------------------------------------------------------------------------

/// 服务器运营指标。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardMetrics {
    pub total_users: i64,
    pub online_users: i64,
    pub total_guilds: i64,
    pub external_registrations: i64,
    pub characters_count: i64,
}
