//! # Sushee API サーバー
//!
//! 注文アプリの HTTP ルーティングとエラーレスポンス層。
//!
//! ## アーキテクチャ
//!
//! ```text
//! request ─▶ router ─┬─ (未定義) ──────────────▶ 404 AppError
//!                    ├─ 公開ルート ─────────────▶ handler ─▶ usecase
//!                    └─ 認証ルート ─▶ auth gate ─▶ handler ─▶ usecase
//!                                      │ 401            │ Err(Failure)
//!                                      ▼                ▼
//!                                  AppError JSON ◀── respond_error
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - `Failure` の正規化とエラーレスポンス出力
//! - [`response`] - 成功レスポンスの出力
//! - [`auth_util`] - 認証ユーティリティのトレイトと認証済みユーザー
//! - [`middleware`] - 認証ゲート
//! - [`handler`] - HTTP ハンドラ
//! - [`usecase`] - ユースケーストレイトとインメモリ実装
//! - [`router`] - ルートテーブルの構築
//! - [`app_builder`] - インメモリ実装による依存関係の組み立て
//! - [`config`] - 環境変数からの設定読み込み

pub mod app_builder;
pub mod auth_util;
pub mod config;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod response;
pub mod router;
pub mod usecase;
