//! # Sushee 共有ユーティリティ
//!
//! API サーバーとドメイン層の双方から使われる共通型を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋なユーティリティのみを配置
//! - axum への依存は持たない（HTTP レスポンスへの変換は API 側の責務）
//! - トレーシング初期化は `observability` feature でのみ有効化する

pub mod api_response;
pub mod app_error;
pub mod observability;

pub use api_response::ApiResponse;
pub use app_error::AppError;
