//! # 支払い方法

use serde::{Deserialize, Serialize};

define_serial_id! {
    /// 支払い方法 ID
    pub struct PaymentOptionId;
}

/// 支払い方法
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOption {
    pub id:   PaymentOptionId,
    pub name: String,
}
