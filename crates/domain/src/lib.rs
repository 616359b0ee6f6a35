//! # Sushee ドメイン層
//!
//! 注文アプリのエンティティと値オブジェクトを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → domain
//!  └──→ shared
//! ```
//!
//! ドメイン層は HTTP やストレージに依存しない。
//! エラーは [`DomainError`] で表現し、API 層が HTTP ステータスへ変換する。
//!
//! ## モジュール構成
//!
//! - [`user`] - ユーザーとメールアドレス
//! - [`menu`] - メニュー
//! - [`promotion`] - プロモーション（割引）
//! - [`cart`] - カートと数量
//! - [`order`] - 注文と注文明細
//! - [`payment`] - 支払い方法
//! - [`review`] - レビューと評価
//! - [`clock`] - 時刻プロバイダ

#[macro_use]
mod macros;

pub mod cart;
pub mod clock;
pub mod error;
pub mod menu;
pub mod order;
pub mod payment;
pub mod promotion;
pub mod review;
pub mod user;

pub use error::DomainError;
