//! # カート
//!
//! ユーザーが注文前に積んでおくメニューと数量。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, menu::MenuId, user::UserId};

define_serial_id! {
    /// カート明細 ID
    pub struct CartId;
}

/// 1 明細あたりの最大数量
pub const MAX_QUANTITY: u32 = 99;

/// 数量（値オブジェクト）
///
/// 1 以上 [`MAX_QUANTITY`] 以下。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    pub fn new(value: u32) -> Result<Self, DomainError> {
        if value == 0 || value > MAX_QUANTITY {
            return Err(DomainError::Validation(format!(
                "quantity must be between 1 and {MAX_QUANTITY}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u32 {
        self.0
    }

    /// 加算した数量を返す。上限を超える場合はバリデーションエラー
    pub fn add(self, other: Quantity) -> Result<Self, DomainError> {
        Self::new(self.0 + other.0)
    }
}

impl TryFrom<u32> for Quantity {
    type Error = DomainError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

/// カート明細
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id:       CartId,
    pub user_id:  UserId,
    pub menu_id:  MenuId,
    pub quantity: Quantity,
    pub added_at: DateTime<Utc>,
}

impl CartItem {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0)]
    #[case(100)]
    fn test_範囲外の数量はバリデーションエラー(#[case] value: u32) {
        assert!(matches!(
            Quantity::new(value),
            Err(DomainError::Validation(_))
        ));
    }

    #[rstest]
    #[case(1)]
    #[case(99)]
    fn test_境界値の数量は作成できる(#[case] value: u32) {
        assert_eq!(Quantity::new(value).unwrap().value(), value);
    }

    #[test]
    fn test_加算で上限を超えるとエラー() {
        let a = Quantity::new(60).unwrap();
        let b = Quantity::new(40).unwrap();

        assert!(a.add(b).is_err());
        assert_eq!(a.add(Quantity::new(39).unwrap()).unwrap().value(), 99);
    }

    #[test]
    fn test_jsonの0はデシリアライズで拒否される() {
        let result: Result<Quantity, _> = serde_json::from_str("0");

        assert!(result.is_err());
    }
}
