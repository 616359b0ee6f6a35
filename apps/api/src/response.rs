//! # 成功レスポンス
//!
//! 成功時のボディは 3 種類に固定する。いずれも HTTP 200 を返す。
//!
//! - [`success_data`]: `{ "data": ... }` で包む
//! - [`success_json`]: 呼び出し側が組み立てたエンベロープをそのまま返す
//! - [`success_no_content`]: 空ボディ

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sushee_shared::ApiResponse;

/// ペイロードを `{ "data": ... }` で包んで返す
pub fn success_data<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(ApiResponse::new(data))).into_response()
}

/// 呼び出し側のエンベロープをそのまま返す
pub fn success_json<T: Serialize>(envelope: T) -> Response {
    (StatusCode::OK, Json(envelope)).into_response()
}

/// ステータスのみを返す
pub fn success_no_content() -> Response {
    StatusCode::OK.into_response()
}
