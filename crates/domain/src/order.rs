//! # 注文
//!
//! カート明細から確定した注文。明細は注文時点のメニュー名と単価を保持する。

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{
    DomainError,
    cart::Quantity,
    menu::{Menu, MenuId},
    payment::PaymentOptionId,
    promotion::{Promotion, PromotionId},
    user::UserId,
};

define_serial_id! {
    /// 注文 ID
    pub struct OrderId;
}

/// 注文明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_id:    MenuId,
    pub menu_name:  String,
    pub unit_price: i64,
    pub quantity:   Quantity,
    pub subtotal:   i64,
}

impl OrderItem {
    pub fn from_menu(menu: &Menu, quantity: Quantity) -> Self {
        Self {
            menu_id: menu.id,
            menu_name: menu.name.clone(),
            unit_price: menu.price,
            quantity,
            subtotal: menu.price * i64::from(quantity.value()),
        }
    }
}

/// 注文
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id:                OrderId,
    pub user_id:           UserId,
    pub items:             Vec<OrderItem>,
    pub payment_option_id: PaymentOptionId,
    pub promotion_id:      Option<PromotionId>,
    pub subtotal:          i64,
    pub discount:          i64,
    pub total:             i64,
    pub ordered_at:        DateTime<Utc>,
}

impl Order {
    /// 注文を確定する
    ///
    /// 1. 明細が 1 件以上あることを検証
    /// 2. プロモーションが指定されていれば注文時刻に有効であることを検証
    /// 3. 小計・割引・合計を計算
    pub fn place(
        id: OrderId,
        user_id: UserId,
        items: Vec<OrderItem>,
        payment_option_id: PaymentOptionId,
        promotion: Option<&Promotion>,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if items.is_empty() {
            return Err(DomainError::Validation(
                "order must contain at least one item".to_string(),
            ));
        }

        if promotion.is_some_and(|p| !p.is_active(now)) {
            return Err(DomainError::Validation(
                "promotion is not active".to_string(),
            ));
        }

        let subtotal: i64 = items.iter().map(|item| item.subtotal).sum();
        let discount = promotion.map_or(0, |p| p.discount_for(subtotal));

        Ok(Self {
            id,
            user_id,
            items,
            payment_option_id,
            promotion_id: promotion.map(|p| p.id),
            subtotal,
            discount,
            total: subtotal - discount,
            ordered_at: now,
        })
    }

    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }

    pub fn contains_menu(&self, menu_id: MenuId) -> bool {
        self.items.iter().any(|item| item.menu_id == menu_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use pretty_assertions::assert_eq;

    use super::*;

    fn menu(id: i64, price: i64) -> Menu {
        Menu {
            id: MenuId::new(id),
            name: format!("menu-{id}"),
            category: "Nigiri".to_string(),
            price,
            description: String::new(),
            available: true,
        }
    }

    fn promotion(now: DateTime<Utc>, ends_in: Duration) -> Promotion {
        Promotion {
            id:               PromotionId::new(1),
            name:             "Ten Off".to_string(),
            description:      String::new(),
            discount_percent: 10,
            min_spend:        0,
            starts_at:        now - Duration::days(1),
            ends_at:          now + ends_in,
        }
    }

    fn items() -> Vec<OrderItem> {
        vec![
            OrderItem::from_menu(&menu(1, 300), Quantity::new(2).unwrap()),
            OrderItem::from_menu(&menu(2, 450), Quantity::new(1).unwrap()),
        ]
    }

    #[test]
    fn test_合計は明細の小計の和() {
        let now = Utc::now();

        let order = Order::place(
            OrderId::new(1),
            UserId::new(1),
            items(),
            PaymentOptionId::new(1),
            None,
            now,
        )
        .unwrap();

        assert_eq!(order.subtotal, 1050);
        assert_eq!(order.discount, 0);
        assert_eq!(order.total, 1050);
    }

    #[test]
    fn test_有効なプロモーションで割引される() {
        let now = Utc::now();
        let promotion = promotion(now, Duration::days(1));

        let order = Order::place(
            OrderId::new(1),
            UserId::new(1),
            items(),
            PaymentOptionId::new(1),
            Some(&promotion),
            now,
        )
        .unwrap();

        assert_eq!(order.discount, 105);
        assert_eq!(order.total, 945);
        assert_eq!(order.promotion_id, Some(PromotionId::new(1)));
    }

    #[test]
    fn test_期限切れのプロモーションは拒否される() {
        let now = Utc::now();
        let promotion = promotion(now, -Duration::hours(1));

        let result = Order::place(
            OrderId::new(1),
            UserId::new(1),
            items(),
            PaymentOptionId::new(1),
            Some(&promotion),
            now,
        );

        assert_eq!(
            result,
            Err(DomainError::Validation("promotion is not active".to_string()))
        );
    }

    #[test]
    fn test_明細なしの注文は拒否される() {
        let result = Order::place(
            OrderId::new(1),
            UserId::new(1),
            Vec::new(),
            PaymentOptionId::new(1),
            None,
            Utc::now(),
        );

        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_contains_menu() {
        let order = Order::place(
            OrderId::new(1),
            UserId::new(1),
            items(),
            PaymentOptionId::new(1),
            None,
            Utc::now(),
        )
        .unwrap();

        assert!(order.contains_menu(MenuId::new(2)));
        assert!(!order.contains_menu(MenuId::new(3)));
    }
}
