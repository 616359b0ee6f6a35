//! # レビュー
//!
//! 注文したメニューに対する評価。1 注文の 1 メニューにつき 1 件まで。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{DomainError, menu::MenuId, order::OrderId, user::UserId};

define_serial_id! {
    /// レビュー ID
    pub struct ReviewId;
}

/// 評価（1〜5）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(1..=5).contains(&value) {
            return Err(DomainError::Validation(
                "rating must be between 1 and 5".to_string(),
            ));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Rating {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rating> for u8 {
    fn from(rating: Rating) -> Self {
        rating.0
    }
}

/// レビュー
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id:          ReviewId,
    pub user_id:     UserId,
    pub order_id:    OrderId,
    pub menu_id:     MenuId,
    pub rating:      Rating,
    pub comment:     String,
    pub reviewed_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, false)]
    #[case(1, true)]
    #[case(5, true)]
    #[case(6, false)]
    fn test_rating_の範囲(#[case] value: u8, #[case] valid: bool) {
        assert_eq!(Rating::new(value).is_ok(), valid);
    }

    #[test]
    fn test_ratingは数値としてシリアライズされる() {
        let json = serde_json::to_value(Rating::new(4).unwrap()).unwrap();

        assert_eq!(json, serde_json::json!(4));
    }
}
