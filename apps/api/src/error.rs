//! # エラーハンドリング
//!
//! 下位層の失敗を [`AppError`] に正規化し、JSON レスポンスとして書き出す。
//!
//! ## 失敗の分類
//!
//! 失敗はすべて閉じた列挙型 [`Failure`] で表現する。各層が明示的に構築するため、
//! 実行時の型判定は行わない。正規化の優先順位は宣言順のとおり:
//!
//! | Failure | HTTP Status | message |
//! |---------|-------------|---------|
//! | `App` | AppError 自身の値 | AppError 自身の値 |
//! | `Generic` | 500 | エラーの表示文字列（原因の連鎖を `: ` で連結） |
//! | `Message` | 500 | 文字列そのもの |
//! | `Opaque` | 500 | `"Internal Error"` |
//!
//! ## エントリポイント
//!
//! - [`respond_error`]: ログ出力 → 正規化 → JSON 出力
//! - [`abort_with_error`]: 型付きの `AppError` をそのまま JSON 出力（分類もログもしない）
//!
//! ハンドラは `Result<Response, Failure>` を返せばよい。`Failure` の `IntoResponse` が
//! `respond_error` に委譲する。

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sushee_domain::DomainError;
use sushee_shared::AppError;
use thiserror::Error;

/// ハンドラ・ユースケースから返る失敗
#[derive(Debug, Error)]
pub enum Failure {
    /// 構造化済みのエラー。ステータスとメッセージをそのまま返す
    #[error(transparent)]
    App(#[from] AppError),

    /// 一般的なエラー値。原因の連鎖を含むメッセージを 500 で包む
    #[error(transparent)]
    Generic(anyhow::Error),

    /// 文字列だけの失敗。500 で包む
    #[error("{0}")]
    Message(String),

    /// 形の分からない失敗（panic など）
    #[error("opaque failure")]
    Opaque,
}

impl Failure {
    /// ログ用の分類名
    pub fn kind(&self) -> &'static str {
        match self {
            Failure::App(_) => "app",
            Failure::Generic(_) => "generic",
            Failure::Message(_) => "message",
            Failure::Opaque => "opaque",
        }
    }

    /// `AppError` に正規化する
    ///
    /// この変換自体は失敗しない。
    pub fn into_app_error(self) -> AppError {
        match self {
            Failure::App(error) => error,
            Failure::Generic(error) => AppError::internal_server_error(format!("{error:#}")),
            Failure::Message(message) => AppError::internal_server_error(message),
            Failure::Opaque => AppError::internal_server_error("Internal Error"),
        }
    }
}

/// `AppError` を包んだ値は構築時に取り出し、`App` として扱う
impl From<anyhow::Error> for Failure {
    fn from(error: anyhow::Error) -> Self {
        match error.downcast::<AppError>() {
            Ok(app_error) => Failure::App(app_error),
            Err(error) => Failure::Generic(error),
        }
    }
}

impl From<String> for Failure {
    fn from(message: String) -> Self {
        Failure::Message(message)
    }
}

impl From<&str> for Failure {
    fn from(message: &str) -> Self {
        Failure::Message(message.to_string())
    }
}

impl From<DomainError> for Failure {
    fn from(error: DomainError) -> Self {
        let app_error = match &error {
            DomainError::Validation(_) => AppError::bad_request(error.to_string()),
            DomainError::Unauthorized(_) => AppError::unauthorized(error.to_string()),
            DomainError::NotFound { .. } => AppError::not_found(error.to_string()),
            DomainError::Conflict(_) => AppError::conflict(error.to_string()),
        };
        Failure::App(app_error)
    }
}

impl From<JsonRejection> for Failure {
    fn from(rejection: JsonRejection) -> Self {
        Failure::App(AppError::bad_request(rejection.body_text()))
    }
}

impl From<PathRejection> for Failure {
    fn from(rejection: PathRejection) -> Self {
        Failure::App(AppError::bad_request(rejection.body_text()))
    }
}

impl From<QueryRejection> for Failure {
    fn from(rejection: QueryRejection) -> Self {
        Failure::App(AppError::bad_request(rejection.body_text()))
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        respond_error(self)
    }
}

/// 失敗を正規化してエラーレスポンスを返す
///
/// 元の値を ERROR レベルで 1 回だけ記録してから正規化する。
/// 戻り値のレスポンスでリクエストは終端する。
pub fn respond_error(failure: impl Into<Failure>) -> Response {
    let failure = failure.into();

    tracing::error!(
        error.kind = failure.kind(),
        "Internal Error: {:?}",
        failure
    );

    abort_with_error(failure.into_app_error())
}

/// 型付きの `AppError` をそのまま JSON で返す
///
/// 分類とログ出力は行わない。`status_code` が HTTP ステータスとして不正な場合は
/// メッセージを保ったまま 500 に置き換える。
pub fn abort_with_error(error: AppError) -> Response {
    let Ok(status) = StatusCode::from_u16(error.status_code) else {
        return abort_with_error(AppError::internal_server_error(error.message));
    };

    (status, Json(error)).into_response()
}
