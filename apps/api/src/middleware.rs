//! # ミドルウェア
//!
//! ルート登録時に組み込むリクエスト処理段を提供する。

mod authenticate;

pub use authenticate::{AuthGateState, authenticate, extract_bearer_token};
