//! # プロフィールハンドラ
//!
//! - `GET /api/v1/users/me` - 自分のプロフィール
//! - `POST /api/v1/users/me` - プロフィール更新

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::Response,
};

use crate::{
    auth_util::AuthUser,
    error::Failure,
    response::success_data,
    usecase::{UpdateProfileInput, UserUseCase},
};

/// プロフィール API の共有状態
pub struct UserState {
    pub user_usecase: Arc<dyn UserUseCase>,
}

pub async fn show_profile(
    State(state): State<Arc<UserState>>,
    user: AuthUser,
) -> Result<Response, Failure> {
    let profile = state.user_usecase.get_profile(&user).await?;
    Ok(success_data(profile))
}

#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn update_profile(
    State(state): State<Arc<UserState>>,
    user: AuthUser,
    body: Result<Json<UpdateProfileInput>, JsonRejection>,
) -> Result<Response, Failure> {
    let Json(input) = body?;
    let profile = state.user_usecase.update_profile(&user, input).await?;
    Ok(success_data(profile))
}
