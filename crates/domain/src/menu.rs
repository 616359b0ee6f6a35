//! # メニュー

use serde::{Deserialize, Serialize};

define_serial_id! {
    /// メニュー ID
    pub struct MenuId;
}

/// メニュー
///
/// 価格は税込の円単位。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    pub id:          MenuId,
    pub name:        String,
    pub category:    String,
    pub price:       i64,
    pub description: String,
    pub available:   bool,
}

impl Menu {
    /// 名前またはカテゴリの部分一致で絞り込む（大文字小文字は区別しない）
    pub fn matches(&self, search: Option<&str>, category: Option<&str>) -> bool {
        let search_ok = search.is_none_or(|s| {
            self.name
                .to_lowercase()
                .contains(&s.trim().to_lowercase())
        });
        let category_ok = category.is_none_or(|c| self.category.eq_ignore_ascii_case(c.trim()));
        search_ok && category_ok
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn salmon() -> Menu {
        Menu {
            id:          MenuId::new(1),
            name:        "Salmon Nigiri".to_string(),
            category:    "Nigiri".to_string(),
            price:       320,
            description: String::new(),
            available:   true,
        }
    }

    #[rstest]
    #[case(None, None, true)]
    #[case(Some("salmon"), None, true)]
    #[case(Some("tuna"), None, false)]
    #[case(None, Some("nigiri"), true)]
    #[case(None, Some("roll"), false)]
    #[case(Some("nigiri"), Some("NIGIRI"), true)]
    fn test_matches(
        #[case] search: Option<&str>,
        #[case] category: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(salmon().matches(search, category), expected);
    }
}
