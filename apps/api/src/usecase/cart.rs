//! カートユースケース

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use sushee_domain::{
    DomainError,
    cart::{CartId, CartItem, Quantity},
    clock::Clock,
    menu::MenuId,
};

use super::store::{CartStore, Catalog};
use crate::{auth_util::AuthUser, error::Failure};

/// カート追加の入力
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCartInput {
    pub menu_id:  MenuId,
    pub quantity: u32,
}

/// カート数量変更の入力
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartInput {
    pub quantity: u32,
}

/// カートユースケース
#[async_trait]
pub trait CartUseCase: Send + Sync {
    async fn list_cart(&self, user: &AuthUser) -> Result<Vec<CartItem>, Failure>;

    async fn add_cart(&self, user: &AuthUser, input: AddCartInput) -> Result<CartItem, Failure>;

    async fn update_cart(
        &self,
        user: &AuthUser,
        cart_id: CartId,
        input: UpdateCartInput,
    ) -> Result<CartItem, Failure>;

    /// 自分のカートを空にする
    async fn delete_carts(&self, user: &AuthUser) -> Result<(), Failure>;

    async fn delete_cart(&self, user: &AuthUser, cart_id: CartId) -> Result<(), Failure>;
}

pub struct CartUseCaseImpl {
    catalog: Arc<Catalog>,
    carts:   Arc<CartStore>,
    clock:   Arc<dyn Clock>,
}

impl CartUseCaseImpl {
    pub fn new(catalog: Arc<Catalog>, carts: Arc<CartStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            catalog,
            carts,
            clock,
        }
    }
}

#[async_trait]
impl CartUseCase for CartUseCaseImpl {
    async fn list_cart(&self, user: &AuthUser) -> Result<Vec<CartItem>, Failure> {
        Ok(self.carts.list(user.user_id).await)
    }

    /// メニューをカートに追加する
    ///
    /// 1. 数量を検証
    /// 2. メニューが存在し、注文可能であることを検証
    /// 3. 既存明細があれば数量を加算、なければ新規作成
    async fn add_cart(&self, user: &AuthUser, input: AddCartInput) -> Result<CartItem, Failure> {
        let quantity = Quantity::new(input.quantity)?;

        let menu = self
            .catalog
            .find_menu(input.menu_id)
            .ok_or_else(|| DomainError::not_found("menu", input.menu_id))?;
        if !menu.available {
            return Err(DomainError::Validation("menu is not available".to_string()).into());
        }

        let item = self
            .carts
            .add(user.user_id, menu.id, quantity, self.clock.now())
            .await?;
        Ok(item)
    }

    async fn update_cart(
        &self,
        user: &AuthUser,
        cart_id: CartId,
        input: UpdateCartInput,
    ) -> Result<CartItem, Failure> {
        let quantity = Quantity::new(input.quantity)?;
        Ok(self.carts.update(user.user_id, cart_id, quantity).await?)
    }

    async fn delete_carts(&self, user: &AuthUser) -> Result<(), Failure> {
        self.carts.remove_all(user.user_id).await;
        Ok(())
    }

    async fn delete_cart(&self, user: &AuthUser, cart_id: CartId) -> Result<(), Failure> {
        Ok(self.carts.remove(user.user_id, cart_id).await?)
    }
}
