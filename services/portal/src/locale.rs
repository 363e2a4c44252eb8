//! 用户可见固定文案（es / en）。

use wp_shared_protocol::normalize_language;

/// 界面语言；默认西班牙语。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Es,
    En,
}

impl Locale {
    /// 从语言标签解析（`en-US` -> En），未知语言回退 Es。
    pub fn from_tag(raw: &str) -> Self {
        match normalize_language(raw).as_str() {
            "en" => Self::En,
            _ => Self::Es,
        }
    }

    /// 返回后端约定的两位语言码。
    pub fn tag(self) -> &'static str {
        match self {
            Self::Es => "es",
            Self::En => "en",
        }
    }

    /// 网络层失败时的提示，不暴露技术细节。
    pub fn service_unavailable(self) -> &'static str {
        match self {
            Self::Es => "Servicios no disponibles. Intenta más tarde.",
            Self::En => "Services unavailable. Please try again later.",
        }
    }

    /// 未归类失败的提示，内嵌追踪 ID 便于客服检索。
    pub fn unexpected_error(self, transaction_id: &str) -> String {
        match self {
            Self::Es => format!("Ocurrió un error inesperado. TransactionId: {transaction_id}"),
            Self::En => format!("An unexpected error occurred. TransactionId: {transaction_id}"),
        }
    }
}
