//! # 時刻プロバイダ
//!
//! 注文時刻・カート追加時刻・プロモーションの開催判定はすべてこのトレイト経由で
//! 現在時刻を得る。テストでは [`FixedClock`] で時刻を固定する。

use chrono::{DateTime, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// システム時刻
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 常に同じ時刻を返す
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self(now)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::promotion::{Promotion, PromotionId};

    #[test]
    fn test_system_clockは呼び出し前後の間の時刻を返す() {
        let before = Utc::now();
        let now = SystemClock.now();

        assert!(before <= now && now <= Utc::now());
    }

    #[test]
    fn test_fixed_clockでプロモーション終了時刻の判定を固定できる() {
        let ends_at = Utc.with_ymd_and_hms(2026, 3, 31, 23, 59, 59).unwrap();
        let promotion = Promotion {
            id:               PromotionId::new(1),
            name:             "Spring".to_string(),
            description:      String::new(),
            discount_percent: 15,
            min_spend:        0,
            starts_at:        ends_at - Duration::days(30),
            ends_at,
        };

        let just_before = FixedClock::new(ends_at - Duration::seconds(1));
        let at_end = FixedClock::new(ends_at);

        assert!(promotion.is_active(just_before.now()));
        assert!(!promotion.is_active(at_end.now()));
        assert_eq!(at_end.now(), at_end.now());
    }
}
