//! # 注文ハンドラ
//!
//! - `GET /api/v1/orders` - 注文履歴
//! - `POST /api/v1/orders` - カート明細から注文

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
    usecase::{CreateOrderInput, OrderUseCase},
};

/// 注文 API の共有状態
pub struct OrderState {
    pub order_usecase: Arc<dyn OrderUseCase>,
}

pub async fn list_orders(
    State(state): State<Arc<OrderState>>,
    user: AuthUser,
) -> Result<Response, Failure> {
    let orders = state.order_usecase.list_orders(&user).await?;
    Ok(success_data(orders))
}

#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn create_order(
    State(state): State<Arc<OrderState>>,
    user: AuthUser,
    body: Result<Json<CreateOrderInput>, JsonRejection>,
) -> Result<Response, Failure> {
    let Json(input) = body?;
    let order = state.order_usecase.create_order(&user, input).await?;
    Ok(success_data(order))
}
