//! # カタログハンドラ
//!
//! - `GET /api/v1/menus` - メニュー一覧（`search` / `category` で絞り込み、公開）
//! - `GET /api/v1/promotions` - 開催中のプロモーション（公開）
//! - `GET /api/v1/orders/payment` - 支払い方法一覧

use std::sync::Arc;

use axum::{
    extract::{Query, State, rejection::QueryRejection},
    response::Response,
};

use crate::{
    auth_util::AuthUser,
    error::Failure,
    response::success_data,
    usecase::{MenuQuery, MenuUseCase, PaymentUseCase, PromotionUseCase},
};

pub struct MenuState {
    pub menu_usecase: Arc<dyn MenuUseCase>,
}

pub struct PromotionState {
    pub promotion_usecase: Arc<dyn PromotionUseCase>,
}

pub struct PaymentState {
    pub payment_usecase: Arc<dyn PaymentUseCase>,
}

#[tracing::instrument(skip_all)]
pub async fn list_menus(
    State(state): State<Arc<MenuState>>,
    query: Result<Query<MenuQuery>, QueryRejection>,
) -> Result<Response, Failure> {
    let Query(query) = query?;
    let menus = state.menu_usecase.list_menus(query).await?;
    Ok(success_data(menus))
}

#[tracing::instrument(skip_all)]
pub async fn list_promotions(
    State(state): State<Arc<PromotionState>>,
) -> Result<Response, Failure> {
    let promotions = state.promotion_usecase.list_promotions().await?;
    Ok(success_data(promotions))
}

/// 支払い方法一覧（認証必須）
#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn list_payment_options(
    State(state): State<Arc<PaymentState>>,
    user: AuthUser,
) -> Result<Response, Failure> {
    let options = state.payment_usecase.list_payment_options().await?;
    Ok(success_data(options))
}
