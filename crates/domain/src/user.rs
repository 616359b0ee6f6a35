//! # ユーザー
//!
//! ユーザーエンティティとメールアドレス値オブジェクトを定義する。
//! パスワードハッシュは認証の関心事のため、このエンティティには含めない。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::DomainError;

define_serial_id! {
    /// ユーザー ID
    pub struct UserId;
}

/// メールアドレス（値オブジェクト）
///
/// 生成時に形式を検証する。比較のため小文字に正規化して保持する。
/// JSON から読む場合も [`Email::new`] の検証を通る。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// メールアドレスを作成する
    ///
    /// # バリデーション
    ///
    /// - 空文字列ではない
    /// - `local@domain` の形式（両側が空でない）
    /// - 最大 255 文字
    pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into().trim().to_lowercase();

        if value.is_empty() {
            return Err(DomainError::Validation("email is required".to_string()));
        }

        let Some((local, domain)) = value.split_once('@') else {
            return Err(DomainError::Validation("email format is invalid".to_string()));
        };
        if local.is_empty() || domain.is_empty() || domain.contains('@') {
            return Err(DomainError::Validation("email format is invalid".to_string()));
        }

        if value.chars().count() > 255 {
            return Err(DomainError::Validation(
                "email must be at most 255 characters".to_string(),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// ユーザー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id:              UserId,
    pub email:           Email,
    pub username:        String,
    pub full_name:       String,
    pub phone:           Option<String>,
    pub profile_picture: Option<String>,
    pub registered_at:   DateTime<Utc>,
}

/// プロフィール更新内容
///
/// `None` のフィールドは変更しない。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileChanges {
    pub full_name:       Option<String>,
    pub phone:           Option<String>,
    pub profile_picture: Option<String>,
}

impl User {
    /// 新規ユーザーを作成する
    ///
    /// ユーザー名と氏名は前後の空白を除いたうえで必須。
    pub fn new(
        id: UserId,
        email: Email,
        username: &str,
        full_name: &str,
        phone: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id,
            email,
            username: required("username", username)?,
            full_name: required("fullName", full_name)?,
            phone,
            profile_picture: None,
            registered_at: now,
        })
    }

    /// プロフィールを更新した新しいユーザーを返す
    pub fn with_profile(self, changes: ProfileChanges) -> Result<Self, DomainError> {
        let full_name = match changes.full_name {
            Some(name) => required("fullName", &name)?,
            None => self.full_name,
        };

        Ok(Self {
            full_name,
            phone: changes.phone.or(self.phone),
            profile_picture: changes.profile_picture.or(self.profile_picture),
            ..self
        })
    }
}

fn required(field: &str, value: &str) -> Result<String, DomainError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(DomainError::Validation(format!("{field} is required")));
    }
    Ok(value.to_string())
}
