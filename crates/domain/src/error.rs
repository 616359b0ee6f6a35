//! # ドメイン層エラー定義
//!
//! ビジネスルール違反やドメイン固有の例外状態を表現するエラー型。
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `Unauthorized` | 401 Unauthorized | 認証情報の不一致 |
//! | `NotFound` | 404 Not Found | エンティティが存在しない |
//! | `Conflict` | 409 Conflict | 一意制約の違反 |
//!
//! メッセージはそのままクライアントに返るため、内部情報を含めないこと。

use thiserror::Error;

/// ドメイン層で発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// 入力値がビジネスルールに違反している
    #[error("{0}")]
    Validation(String),

    /// 認証情報が正しくない
    #[error("{0}")]
    Unauthorized(String),

    /// エンティティが存在しない
    #[error("{entity_type} not found")]
    NotFound {
        entity_type: &'static str,
        id:          String,
    },

    /// 既存データと衝突する
    #[error("{0}")]
    Conflict(String),
}

impl DomainError {
    /// `NotFound` を ID 付きで作成する
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_not_foundのメッセージにidを含めない() {
        let error = DomainError::not_found("cart", 42);

        assert_eq!(error.to_string(), "cart not found");
        assert_eq!(
            error,
            DomainError::NotFound {
                entity_type: "cart",
                id:          "42".to_string(),
            }
        );
    }
}
