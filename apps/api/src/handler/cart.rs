//! # カートハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/v1/carts` - カート一覧
//! - `POST /api/v1/carts` - カートに追加
//! - `DELETE /api/v1/carts` - カートを空にする
//! - `POST /api/v1/carts/{cartId}` - 数量変更
//! - `DELETE /api/v1/carts/{cartId}` - 明細削除

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    response::Response,
};
use sushee_domain::cart::CartId;

use crate::{
    auth_util::AuthUser,
    error::Failure,
    response::{success_data, success_no_content},
    usecase::{AddCartInput, CartUseCase, UpdateCartInput},
};

/// カート API の共有状態
pub struct CartState {
    pub cart_usecase: Arc<dyn CartUseCase>,
}

#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn show_cart(
    State(state): State<Arc<CartState>>,
    user: AuthUser,
) -> Result<Response, Failure> {
    let items = state.cart_usecase.list_cart(&user).await?;
    Ok(success_data(items))
}

#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn add_cart(
    State(state): State<Arc<CartState>>,
    user: AuthUser,
    body: Result<Json<AddCartInput>, JsonRejection>,
) -> Result<Response, Failure> {
    let Json(input) = body?;
    let item = state.cart_usecase.add_cart(&user, input).await?;
    Ok(success_data(item))
}

#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn update_cart(
    State(state): State<Arc<CartState>>,
    user: AuthUser,
    cart_id: Result<Path<i64>, PathRejection>,
    body: Result<Json<UpdateCartInput>, JsonRejection>,
) -> Result<Response, Failure> {
    let Path(cart_id) = cart_id?;
    let Json(input) = body?;
    let item = state
        .cart_usecase
        .update_cart(&user, CartId::new(cart_id), input)
        .await?;
    Ok(success_data(item))
}

#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn delete_carts(
    State(state): State<Arc<CartState>>,
    user: AuthUser,
) -> Result<Response, Failure> {
    state.cart_usecase.delete_carts(&user).await?;
    Ok(success_no_content())
}

#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn delete_cart(
    State(state): State<Arc<CartState>>,
    user: AuthUser,
    cart_id: Result<Path<i64>, PathRejection>,
) -> Result<Response, Failure> {
    let Path(cart_id) = cart_id?;
    state
        .cart_usecase
        .delete_cart(&user, CartId::new(cart_id))
        .await?;
    Ok(success_no_content())
}
