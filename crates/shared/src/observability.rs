//! # Observability 基盤
//!
//! ログ出力の初期化と、HTTP リクエストへの Request ID 付与を提供する。
//!
//! | 環境変数 | 既定値 | 内容 |
//! |----------|--------|------|
//! | `LOG_FORMAT` | `pretty` | `json` / `pretty`（大文字小文字・前後空白は無視） |
//! | `RUST_LOG` | [`DEFAULT_LOG_FILTER`] | `EnvFilter` のディレクティブ |
//!
//! 初期化・Request ID まわりは `observability` feature で有効になる。

use std::str::FromStr;

use thiserror::Error;

/// Request ID を載せる HTTP ヘッダー名
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// `RUST_LOG` 未設定時のフィルタ
pub const DEFAULT_LOG_FILTER: &str = "info,sushee=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// 1 行 1 JSON（本番向け）
    Json,
    /// 人間向けの整形出力（開発向け）
    #[default]
    Pretty,
}

/// 未知の `LOG_FORMAT` 値
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown LOG_FORMAT={0:?}")]
pub struct UnknownLogFormat(pub String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            _ => Err(UnknownLogFormat(s.to_string())),
        }
    }
}

impl LogFormat {
    /// 値を解釈する。未知の値は stderr に警告して [`LogFormat::Pretty`] にする
    ///
    /// トレーシング初期化前に呼ばれるため、警告は `tracing` ではなく stderr に出す。
    pub fn parse_or_default(value: Option<&str>) -> Self {
        match value.map(str::parse::<Self>) {
            None => Self::default(),
            Some(Ok(format)) => format,
            Some(Err(e)) => {
                eprintln!("WARNING: {e}, falling back to pretty");
                Self::default()
            }
        }
    }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// サービス名（起動スパンの `service` に使う）
    pub service_name: String,
    pub log_format:   LogFormat,
}

impl TracingConfig {
    pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
        Self {
            service_name: service_name.into(),
            log_format,
        }
    }

    /// `LOG_FORMAT` から出力形式を決める
    pub fn from_env(service_name: impl Into<String>) -> Self {
        let raw = std::env::var("LOG_FORMAT").ok();
        Self::new(service_name, LogFormat::parse_or_default(raw.as_deref()))
    }
}

/// グローバルなトレーシングサブスクライバを登録する
///
/// 既に登録済みの場合はエラーを返す。
#[cfg(feature = "observability")]
pub fn init_tracing(
    config: &TracingConfig,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());

    let fmt_layer = match config.log_format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
}

/// UUID v7 の Request ID を採番する
///
/// `SetRequestIdLayer` に渡す。クライアントが `x-request-id` を送ってきた場合は
/// レイヤー側がそちらを優先する。
#[cfg(feature = "observability")]
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeRequestUuidV7;

#[cfg(feature = "observability")]
impl tower_http::request_id::MakeRequestId for MakeRequestUuidV7 {
    fn make_request_id<B>(
        &mut self,
        _request: &http::Request<B>,
    ) -> Option<tower_http::request_id::RequestId> {
        let id = uuid::Uuid::now_v7().to_string();
        http::HeaderValue::from_str(&id)
            .ok()
            .map(tower_http::request_id::RequestId::new)
    }
}

/// リクエスト単位のスパン
///
/// `TraceLayer::make_span_with` に渡す。リクエスト中のログすべてに `request_id` が付く。
#[cfg(feature = "observability")]
pub fn make_request_span<B>(request: &http::Request<B>) -> tracing::Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-");

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        request_id = %request_id,
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_log_formatは大文字小文字と空白を無視して解釈する() {
        assert_eq!(" JSON ".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("Pretty".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    }

    #[test]
    fn test_未知の形式はエラーに元の値を含める() {
        let error = "yaml".parse::<LogFormat>().unwrap_err();

        assert_eq!(error.to_string(), r#"unknown LOG_FORMAT="yaml""#);
    }

    #[test]
    fn test_未設定と未知の値はprettyになる() {
        assert_eq!(LogFormat::parse_or_default(None), LogFormat::Pretty);
        assert_eq!(LogFormat::parse_or_default(Some("")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse_or_default(Some("yaml")), LogFormat::Pretty);
        assert_eq!(LogFormat::parse_or_default(Some("json")), LogFormat::Json);
    }
}

#[cfg(all(test, feature = "observability"))]
mod request_id_tests {
    use pretty_assertions::assert_eq;
    use tower_http::request_id::MakeRequestId as _;

    use super::*;

    #[test]
    fn test_make_request_uuid_v7はバージョン7のuuidを返す() {
        let request = http::Request::builder().body(()).unwrap();

        let request_id = MakeRequestUuidV7.make_request_id(&request).unwrap();
        let value = request_id.header_value().to_str().unwrap();

        let parsed = uuid::Uuid::parse_str(value).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }
}
