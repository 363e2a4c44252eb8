//! 后端 API 客户端。
//!
//! 每个业务模块只声明端点约定（`Endpoint` 常量）并提供薄封装方法，
//! 请求构造、状态码判定与错误归一化全部由 `client` 统一完成。

mod classify;
mod client;
mod endpoint;
mod error;
mod normalize;
#[cfg(test)]
mod test_support;

pub mod accounts;
pub mod characters;
pub mod dashboard;
pub mod faqs;
pub mod guilds;
pub mod interstitial;
pub mod mail;
pub mod news;
pub mod notifications;
pub mod payment_methods;
pub mod plans;
pub mod promotions;
pub mod realms;
pub mod store;
pub mod transactions;
pub mod user;

pub use client::{ApiClient, Call, TRANSACTION_ID_HEADER};
pub use endpoint::{Endpoint, HttpMethod, PayloadShape, Service};
pub use error::{ApiError, ApiResult, ROLE_NOT_AUTHORIZED_MESSAGE, TOKEN_EXPIRATION_MESSAGE};
pub use normalize::CallState;
