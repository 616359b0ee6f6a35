//! # プロモーション
//!
//! 期間限定の割引。注文小計が `min_spend` 以上のとき、割引率を適用する。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

define_serial_id! {
    /// プロモーション ID
    pub struct PromotionId;
}

/// プロモーション
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Promotion {
    pub id:               PromotionId,
    pub name:             String,
    pub description:      String,
    /// 割引率（%）
    pub discount_percent: u8,
    /// 適用に必要な最低小計（円）
    pub min_spend:        i64,
    pub starts_at:        DateTime<Utc>,
    pub ends_at:          DateTime<Utc>,
}

impl Promotion {
    /// 指定時刻に有効か（開始は含み、終了は含まない）
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.starts_at <= now && now < self.ends_at
    }

    /// 小計に対する割引額を返す（円未満切り捨て）
    pub fn discount_for(&self, subtotal: i64) -> i64 {
        if subtotal < self.min_spend {
            return 0;
        }
        subtotal * i64::from(self.discount_percent.min(100)) / 100
    }
}
