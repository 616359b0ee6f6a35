//! 注文ユースケース

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use sushee_domain::{
    DomainError,
    cart::CartId,
    clock::Clock,
    order::{Order, OrderItem},
    payment::PaymentOptionId,
    promotion::PromotionId,
};

use super::store::{CartStore, Catalog, OrderStore};
use crate::{auth_util::AuthUser, error::Failure};

/// 注文作成の入力
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderInput {
    pub cart_ids:          Vec<CartId>,
    pub payment_option_id: PaymentOptionId,
    #[serde(default)]
    pub promotion_id:      Option<PromotionId>,
}

/// 注文ユースケース
#[async_trait]
pub trait OrderUseCase: Send + Sync {
    async fn list_orders(&self, user: &AuthUser) -> Result<Vec<Order>, Failure>;

    async fn create_order(
        &self,
        user: &AuthUser,
        input: CreateOrderInput,
    ) -> Result<Order, Failure>;
}

pub struct OrderUseCaseImpl {
    catalog: Arc<Catalog>,
    carts:   Arc<CartStore>,
    orders:  Arc<OrderStore>,
    clock:   Arc<dyn Clock>,
}

impl OrderUseCaseImpl {
    pub fn new(
        catalog: Arc<Catalog>,
        carts: Arc<CartStore>,
        orders: Arc<OrderStore>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            catalog,
            carts,
            orders,
            clock,
        }
    }
}

#[async_trait]
impl OrderUseCase for OrderUseCaseImpl {
    async fn list_orders(&self, user: &AuthUser) -> Result<Vec<Order>, Failure> {
        Ok(self.orders.list(user.user_id).await)
    }

    /// カート明細から注文を作成する
    ///
    /// 1. カート ID が 1 件以上あることを検証
    /// 2. 支払い方法・プロモーションの存在を検証
    /// 3. 自分のカート明細を取り出して注文を確定（失敗時はカートを残す）
    /// 4. 注文を保存
    async fn create_order(
        &self,
        user: &AuthUser,
        input: CreateOrderInput,
    ) -> Result<Order, Failure> {
        if input.cart_ids.is_empty() {
            return Err(DomainError::Validation("cartIds must not be empty".to_string()).into());
        }

        let payment_option = self
            .catalog
            .find_payment_option(input.payment_option_id)
            .ok_or_else(|| DomainError::not_found("payment option", input.payment_option_id))?;

        let promotion = input
            .promotion_id
            .map(|id| {
                self.catalog
                    .find_promotion(id)
                    .ok_or_else(|| DomainError::not_found("promotion", id))
            })
            .transpose()?;

        let order_id = self.orders.next_id();
        let now = self.clock.now();
        let catalog = &self.catalog;

        let order = self
            .carts
            .checkout(user.user_id, &input.cart_ids, |cart_items| {
                let items = cart_items
                    .iter()
                    .map(|cart_item| {
                        catalog
                            .find_menu(cart_item.menu_id)
                            .map(|menu| OrderItem::from_menu(menu, cart_item.quantity))
                            .ok_or_else(|| DomainError::not_found("menu", cart_item.menu_id))
                    })
                    .collect::<Result<Vec<_>, _>>()?;

                Order::place(order_id, user.user_id, items, payment_option.id, promotion, now)
            })
            .await?;

        let order = self.orders.insert(order).await;
        tracing::info!(order_id = %order.id, total = order.total, "注文を作成しました");
        Ok(order)
    }
}
