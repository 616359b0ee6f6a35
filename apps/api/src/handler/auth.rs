//! # 認証ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /api/v1/login` - ログイン（公開）
//! - `POST /api/v1/register` - ユーザー登録（公開）
//! - `POST /api/v1/logout` - ログアウト
//! - `POST /api/v1/refresh` - トークン更新

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};

use crate::{
    auth_util::AuthUser,
    error::Failure,
    response::{success_data, success_no_content},
    usecase::{AuthUseCase, LoginInput, RefreshInput, RegisterInput},
};

/// 認証 API の共有状態
pub struct AuthState {
    pub auth_usecase: Arc<dyn AuthUseCase>,
}

/// ログイン
#[tracing::instrument(skip_all)]
pub async fn login(
    State(state): State<Arc<AuthState>>,
    body: Result<Json<LoginInput>, JsonRejection>,
) -> Result<Response, Failure> {
    let Json(input) = body?;
    let tokens = state.auth_usecase.login(input).await?;
    Ok(success_data(tokens))
}

/// ユーザー登録
#[tracing::instrument(skip_all)]
pub async fn register(
    State(state): State<Arc<AuthState>>,
    body: Result<Json<RegisterInput>, JsonRejection>,
) -> Result<Response, Failure> {
    let Json(input) = body?;
    let user = state.auth_usecase.register(input).await?;
    Ok(success_data(user))
}

/// ログアウト
#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn logout(
    State(state): State<Arc<AuthState>>,
    user: AuthUser,
) -> Result<Response, Failure> {
    state.auth_usecase.logout(&user).await?;
    Ok(success_no_content())
}

/// トークン更新
#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn refresh(
    State(state): State<Arc<AuthState>>,
    user: AuthUser,
    body: Result<Json<RefreshInput>, JsonRejection>,
) -> Result<Response, Failure> {
    let Json(input) = body?;
    let tokens = state.auth_usecase.refresh(&user, input).await?;
    Ok(success_data(tokens))
}
