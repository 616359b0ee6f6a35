//! レビューユースケース

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use sushee_domain::{
    DomainError,
    clock::Clock,
    menu::MenuId,
    order::OrderId,
    review::{Rating, Review},
};

use super::store::{OrderStore, ReviewStore};
use crate::{auth_util::AuthUser, error::Failure};

/// レビュー投稿の入力
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewInput {
    pub order_id: OrderId,
    pub menu_id:  MenuId,
    pub rating:   u8,
    #[serde(default)]
    pub comment:  String,
}

/// レビューユースケース
#[async_trait]
pub trait ReviewUseCase: Send + Sync {
    async fn create_review(
        &self,
        user: &AuthUser,
        input: CreateReviewInput,
    ) -> Result<Review, Failure>;
}

pub struct ReviewUseCaseImpl {
    orders:  Arc<OrderStore>,
    reviews: Arc<ReviewStore>,
    clock:   Arc<dyn Clock>,
}

impl ReviewUseCaseImpl {
    pub fn new(orders: Arc<OrderStore>, reviews: Arc<ReviewStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            orders,
            reviews,
            clock,
        }
    }
}

#[async_trait]
impl ReviewUseCase for ReviewUseCaseImpl {
    /// 注文したメニューにレビューを投稿する
    ///
    /// 1. 評価値を検証
    /// 2. 自分の注文であること、注文にメニューが含まれることを検証
    /// 3. 保存（同じ注文・メニューへの 2 回目は Conflict）
    async fn create_review(
        &self,
        user: &AuthUser,
        input: CreateReviewInput,
    ) -> Result<Review, Failure> {
        let rating = Rating::new(input.rating)?;

        let order = self
            .orders
            .find(input.order_id)
            .await
            .filter(|order| order.is_owned_by(user.user_id))
            .ok_or_else(|| DomainError::not_found("order", input.order_id))?;

        if !order.contains_menu(input.menu_id) {
            return Err(DomainError::Validation("menu is not part of the order".to_string()).into());
        }

        let review = Review {
            id: self.reviews.next_id(),
            user_id: user.user_id,
            order_id: order.id,
            menu_id: input.menu_id,
            rating,
            comment: input.comment.trim().to_string(),
            reviewed_at: self.clock.now(),
        };

        Ok(self.reviews.insert(review).await?)
    }
}
