//! # API レスポンスエンベロープ
//!
//! 成功レスポンスの統一形式 `{ "data": T }` を提供する。

use serde::{Deserialize, Serialize};

/// 成功レスポンスの統一型
///
/// ペイロードを `data` フィールドで包む。エラー時は [`crate::AppError`] の形になるため、
/// この型と `AppError` 以外のボディがクライアントに返ることはない。
///
/// ## 使用例
///
/// ```
/// use sushee_shared::ApiResponse;
///
/// let response = ApiResponse::new("pong!");
/// assert_eq!(response.data, "pong!");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    /// 新しい `ApiResponse` を作成する
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
