//! 注册表单的客户端校验；校验失败不会发起任何请求。

use chrono::{Months, NaiveDate};
use thiserror::Error;
use wp_shared_protocol::{CreateUserRequest, normalize_language};

use crate::locale::Locale;

pub const USERNAME_MIN_LEN: usize = 5;
pub const USERNAME_MAX_LEN: usize = 20;
pub const PASSWORD_MIN_LEN: usize = 8;
pub const PASSWORD_MAX_LEN: usize = 30;
/// 注册最低年龄（周岁）。
pub const MINIMUM_AGE_YEARS: u32 = 13;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("field `{0}` is required")]
    Required(&'static str),
    #[error("username must be between 5 and 20 characters")]
    UsernameLength,
    #[error("username may only contain letters, digits and underscores")]
    UsernameCharset,
    #[error("password must be between 8 and 30 characters")]
    PasswordLength,
    #[error("passwords do not match")]
    PasswordMismatch,
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("you must be at least 13 years old")]
    Underage,
}

impl ValidationError {
    /// 面向用户的本地化文案；英文与 `Display` 一致。
    pub fn localized(&self, locale: Locale) -> String {
        match locale {
            Locale::En => self.to_string(),
            Locale::Es => match self {
                Self::Required(field) => format!("El campo `{field}` es obligatorio"),
                Self::UsernameLength => format!(
                    "El usuario debe tener entre {USERNAME_MIN_LEN} y {USERNAME_MAX_LEN} caracteres"
                ),
                Self::UsernameCharset => {
                    "El usuario solo puede contener letras, números y guiones bajos".to_string()
                }
                Self::PasswordLength => format!(
                    "La contraseña debe tener entre {PASSWORD_MIN_LEN} y {PASSWORD_MAX_LEN} caracteres"
                ),
                Self::PasswordMismatch => "Las contraseñas no coinciden".to_string(),
                Self::InvalidEmail => "El correo electrónico no es válido".to_string(),
                Self::Underage => format!("Debes tener al menos {MINIMUM_AGE_YEARS} años"),
            },
        }
    }
}

pub fn validate_username(raw: &str) -> Result<(), ValidationError> {
    let length = raw.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&length) {
        return Err(ValidationError::UsernameLength);
    }
    if !raw.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(ValidationError::UsernameCharset);
    }
    Ok(())
}

pub fn validate_password(password: &str, confirmation: &str) -> Result<(), ValidationError> {
    let length = password.chars().count();
    if !(PASSWORD_MIN_LEN..=PASSWORD_MAX_LEN).contains(&length) {
        return Err(ValidationError::PasswordLength);
    }
    if password != confirmation {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

/// 形如 `local@domain.tld`；不做 RFC 级别校验。
pub fn validate_email(raw: &str) -> Result<(), ValidationError> {
    if raw.chars().any(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }
    let Some((local, domain)) = raw.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    let labels_ok = domain.contains('.') && domain.split('.').all(|label| !label.is_empty());
    if local.is_empty() || domain.contains('@') || !labels_ok {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

/// 第 13 个生日当天或之后才允许注册；2 月 29 日出生者在平年按 2 月 28 日计。
pub fn meets_minimum_age(birth: NaiveDate, today: NaiveDate) -> bool {
    birth
        .checked_add_months(Months::new(MINIMUM_AGE_YEARS * 12))
        .is_some_and(|birthday| birthday <= today)
}

/// 注册表单原始输入。
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub country: String,
    pub language: String,
    pub cell_phone: Option<String>,
}

impl RegistrationForm {
    /// 按表单顺序校验，返回第一个错误；通过后生成注册请求体。
    pub fn validate(&self, today: NaiveDate) -> Result<CreateUserRequest, ValidationError> {
        let username = self.username.trim();
        let email = self.email.trim();
        validate_username(username)?;
        validate_email(email)?;
        validate_password(&self.password, &self.confirm_password)?;

        let first_name = required("first_name", &self.first_name)?;
        let last_name = required("last_name", &self.last_name)?;
        let country = required("country", &self.country)?;
        let date_of_birth = self
            .date_of_birth
            .ok_or(ValidationError::Required("date_of_birth"))?;
        if !meets_minimum_age(date_of_birth, today) {
            return Err(ValidationError::Underage);
        }

        Ok(CreateUserRequest {
            username: username.to_string(),
            email: email.to_string(),
            password: self.password.clone(),
            first_name,
            last_name,
            date_of_birth,
            country,
            language: normalize_language(&self.language),
            cell_phone: self
                .cell_phone
                .as_deref()
                .map(str::trim)
                .filter(|phone| !phone.is_empty())
                .map(str::to_string),
        })
    }
}

fn required(field: &'static str, raw: &str) -> Result<String, ValidationError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::Required(field));
    }
    Ok(value.to_string())
}
