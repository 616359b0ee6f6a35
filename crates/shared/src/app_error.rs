//! # AppError（構造化エラー）
//!
//! クライアントに返してよい失敗を表す構造体。
//!
//! ## 設計
//!
//! - `AppError` は純粋なデータ構造（`Serialize` / `Deserialize` のみ）
//! - axum の `IntoResponse` 変換は API クレートの責務（shared に axum 依存を入れない）
//! - よく使うステータスは便利コンストラクタで提供する
//! - `code` は任意のエラータグ。`None` の場合は JSON に出力しない
//!
//! JSON 形状:
//!
//! ```json
//! { "statusCode": 404, "message": "endpoint not found" }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 構造化エラー
///
/// ハンドラ・ユースケース層が生成するか、レスポンダーが非構造化の失敗から合成する。
/// 生成後は変更しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(rename_all = "camelCase")]
#[error("{message} (status: {status_code})")]
pub struct AppError {
    pub status_code: u16,
    pub message:     String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code:        Option<String>,
}

impl AppError {
    /// 汎用コンストラクタ
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            code: None,
        }
    }

    /// エラータグを付与する
    pub fn with_code(self, code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..self
        }
    }

    /// 400 Bad Request
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message)
    }

    /// 401 Unauthorized
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(401, message)
    }

    /// 403 Forbidden
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(403, message)
    }

    /// 404 Not Found
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message)
    }

    /// 409 Conflict
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message)
    }

    /// 500 Internal Server Error
    ///
    /// メッセージは呼び出し側が既に包んだものだけを渡すこと。
    pub fn internal_server_error(message: impl Into<String>) -> Self {
        Self::new(500, message)
    }
}
