/// 連番（`i64`）ベースの ID 型を定義する宣言型マクロ
///
/// 以下のボイラープレートを一括生成する:
/// - Newtype 構造体（`i64` をラップ、JSON では素の数値）
/// - `derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, Serialize, Deserialize, Display)`
/// - `new()`: 値から ID を作成
/// - `as_i64()`: 内部値の取得
///
/// # 使用例
///
/// ```rust
/// use sushee_domain::cart::CartId;
///
/// let id = CartId::new(42);
/// assert_eq!(id.as_i64(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
macro_rules! define_serial_id {
    (
        $(#[$meta:meta])*
        $vis:vis struct $Name:ident;
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord,
            serde::Serialize, serde::Deserialize,
            derive_more::Display,
        )]
        #[serde(transparent)]
        #[display("{_0}")]
        $vis struct $Name(i64);

        impl $Name {
            /// 値から ID を作成する
            pub const fn new(value: i64) -> Self {
                Self(value)
            }

            /// 内部の値を取得する
            pub const fn as_i64(self) -> i64 {
                self.0
            }
        }
    };
}
