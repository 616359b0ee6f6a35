//! # 認証ユーティリティ
//!
//! 認証ゲートが使うトークン検証の抽象と、検証済みユーザーの抽出を提供する。
//! トークンの発行・失効の仕組みは実装側（[`crate::usecase::SessionAuthUtil`] など）の責務。

use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use sushee_domain::user::UserId;
use sushee_shared::AppError;

use crate::error::Failure;

/// 認証ゲートを通過したユーザー
///
/// 認証ゲートがリクエスト extensions に格納し、ハンドラが引数で受け取る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id:      UserId,
    pub access_token: String,
}

/// アクセストークンを検証するトレイト
#[async_trait]
pub trait AuthUtil: Send + Sync {
    /// トークンを検証し、対応するユーザーを返す
    ///
    /// 検証に失敗した場合は 401 系の `AppError` を返すこと。
    async fn verify(&self, access_token: &str) -> Result<AuthUser, AppError>;
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::unauthorized("authentication required").into())
    }
}
