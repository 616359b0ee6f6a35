//! # Sushee API サーバー
//!
//! 注文アプリの HTTP API。永続化はインメモリで、再起動するとデータは失われる。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | **Yes** | ポート番号 |
//! | `LOG_FORMAT` | No | `json` / `pretty`（デフォルト: `pretty`） |
//!
//! ## 起動方法
//!
//! ```bash
//! API_PORT=8080 cargo run --bin sushee-api
//! ```

use std::sync::Arc;

use sushee_api::{app_builder::in_memory_router_config, config::ApiConfig, router::create_router};
use sushee_domain::clock::SystemClock;
use sushee_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

/// API サーバーのエントリーポイント
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. 設定の読み込み
/// 4. 依存関係とルーターの構築
/// 5. HTTP サーバーの起動（Ctrl-C で graceful shutdown）
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    let tracing_config = TracingConfig::from_env("sushee-api");
    init_tracing(&tracing_config)?;
    let _tracing_guard =
        tracing::info_span!("app", service = %tracing_config.service_name).entered();

    let config = ApiConfig::from_env()?;

    let app = create_router(in_memory_router_config(Arc::new(SystemClock)));

    let listener = TcpListener::bind(config.bind_address()).await?;
    tracing::info!("API サーバーが起動しました: {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("API サーバーを停止しました");
    Ok(())
}

/// Ctrl-C を待つ
///
/// シグナルハンドラを登録できなかった場合は停止要求を出さずに待ち続ける。
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("シグナルハンドラの登録に失敗しました: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("停止シグナルを受信しました");
}
