//! # カタログ参照ユースケース
//!
//! メニュー・プロモーション・支払い方法の一覧。いずれも読み取り専用。

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use sushee_domain::{clock::Clock, menu::Menu, payment::PaymentOption, promotion::Promotion};

use super::store::Catalog;
use crate::error::Failure;

/// メニュー一覧の絞り込み条件
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuQuery {
    #[serde(default)]
    pub search:   Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

/// メニューユースケース
#[async_trait]
pub trait MenuUseCase: Send + Sync {
    async fn list_menus(&self, query: MenuQuery) -> Result<Vec<Menu>, Failure>;
}

/// プロモーションユースケース
#[async_trait]
pub trait PromotionUseCase: Send + Sync {
    /// 現在開催中のプロモーションを返す
    async fn list_promotions(&self) -> Result<Vec<Promotion>, Failure>;
}

/// 支払い方法ユースケース
#[async_trait]
pub trait PaymentUseCase: Send + Sync {
    async fn list_payment_options(&self) -> Result<Vec<PaymentOption>, Failure>;
}

pub struct MenuUseCaseImpl {
    catalog: Arc<Catalog>,
}

impl MenuUseCaseImpl {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl MenuUseCase for MenuUseCaseImpl {
    async fn list_menus(&self, query: MenuQuery) -> Result<Vec<Menu>, Failure> {
        Ok(self
            .catalog
            .menus()
            .iter()
            .filter(|menu| menu.matches(query.search.as_deref(), query.category.as_deref()))
            .cloned()
            .collect())
    }
}

pub struct PromotionUseCaseImpl {
    catalog: Arc<Catalog>,
    clock:   Arc<dyn Clock>,
}

impl PromotionUseCaseImpl {
    pub fn new(catalog: Arc<Catalog>, clock: Arc<dyn Clock>) -> Self {
        Self { catalog, clock }
    }
}

#[async_trait]
impl PromotionUseCase for PromotionUseCaseImpl {
    async fn list_promotions(&self) -> Result<Vec<Promotion>, Failure> {
        let now = self.clock.now();
        Ok(self
            .catalog
            .promotions()
            .iter()
            .filter(|promotion| promotion.is_active(now))
            .cloned()
            .collect())
    }
}

pub struct PaymentUseCaseImpl {
    catalog: Arc<Catalog>,
}

impl PaymentUseCaseImpl {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl PaymentUseCase for PaymentUseCaseImpl {
    async fn list_payment_options(&self) -> Result<Vec<PaymentOption>, Failure> {
        Ok(self.catalog.payment_options().to_vec())
    }
}
