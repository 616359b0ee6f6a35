//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、ここで re-export する
//! - ハンドラは薄く保ち、処理はユースケースに委譲する
//! - 戻り値は `Result<Response, Failure>`。成功は [`crate::response`]、
//!   失敗は `Failure` の `IntoResponse` でエラーレスポンスになる
//!
//! ## モジュール構成
//!
//! ```text
//! handler.rs
//! └── handler/
//!     ├── health.rs     # /ping と未定義エンドポイント
//!     ├── auth.rs       # ログイン、登録、ログアウト、トークン更新
//!     ├── user.rs       # プロフィール
//!     ├── catalog.rs    # メニュー、プロモーション、支払い方法
//!     ├── cart.rs       # カート
//!     ├── order.rs      # 注文
//!     └── review.rs     # レビュー
//! ```

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod health;
pub mod order;
pub mod review;
pub mod user;

pub use auth::{AuthState, login, logout, refresh, register};
pub use cart::{CartState, add_cart, delete_cart, delete_carts, show_cart, update_cart};
pub use catalog::{
    MenuState,
    PaymentState,
    PromotionState,
    list_menus,
    list_payment_options,
    list_promotions,
};
pub use health::{endpoint_not_found, ping};
pub use order::{OrderState, create_order, list_orders};
pub use review::{ReviewState, create_review};
pub use user::{UserState, show_profile, update_profile};
