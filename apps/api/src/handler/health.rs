//! # 稼働確認と未定義エンドポイント
//!
//! - `GET /ping`: Liveness Check（常に `{"data":"pong!"}`）
//! - フォールバック: どのルートにも一致しないリクエストへの 404

use axum::response::Response;
use sushee_shared::AppError;

use crate::{error::respond_error, response::success_data};

/// Liveness Check
pub async fn ping() -> Response {
    success_data("pong!")
}

/// 未定義のメソッド・パスへの応答
pub async fn endpoint_not_found() -> Response {
    respond_error(AppError::not_found("endpoint not found"))
}
