//! # レビューハンドラ
//!
//! - `POST /api/v1/orders/reviews` - 注文したメニューへのレビュー投稿

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
    usecase::{CreateReviewInput, ReviewUseCase},
};

pub struct ReviewState {
    pub review_usecase: Arc<dyn ReviewUseCase>,
}

#[tracing::instrument(skip_all, fields(user_id = %user.user_id))]
pub async fn create_review(
    State(state): State<Arc<ReviewState>>,
    user: AuthUser,
    body: Result<Json<CreateReviewInput>, JsonRejection>,
) -> Result<Response, Failure> {
    let Json(input) = body?;
    let review = state.review_usecase.create_review(&user, input).await?;
    Ok(success_data(review))
}
