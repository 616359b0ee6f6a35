//! # アプリケーション設定
//!
//! 環境変数から API サーバーの設定を読み込む。開発環境では `.env` ファイルの値も使う
//! （読み込みは `main` で `dotenvy` が行う）。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `API_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `API_PORT` | **Yes** | - | ポート番号 |
//! | `LOG_FORMAT` | No | `pretty` | ログ形式（`json` / `pretty`） |
//! | `RUST_LOG` | No | `info,sushee=debug` | ログフィルタ |

use std::env;

use thiserror::Error;

/// デフォルトのバインドアドレス
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// 設定読み込みのエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    #[error("{name} は有効なポート番号である必要があります: {value}")]
    InvalidPort { name: &'static str, value: String },
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// テストで環境変数を書き換えずに済むよう、値の取得を差し替えられる。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let host = lookup("API_HOST")
            .filter(|host| !host.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let raw_port = lookup("API_PORT").ok_or(ConfigError::Missing("API_PORT"))?;
        let port = raw_port
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidPort {
                name:  "API_PORT",
                value: raw_port.clone(),
            })?;

        Ok(Self { host, port })
    }

    /// バインド先の `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_ホストとポートを読み込む() {
        let config =
            ApiConfig::from_lookup(lookup_from(&[("API_HOST", "127.0.0.1"), ("API_PORT", "8080")]))
                .unwrap();

        assert_eq!(
            config,
            ApiConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            }
        );
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }

    #[test]
    fn test_ホスト未設定ならデフォルト() {
        let config = ApiConfig::from_lookup(lookup_from(&[("API_PORT", "8080")])).unwrap();

        assert_eq!(config.host, DEFAULT_HOST);
    }

    #[test]
    fn test_ポート未設定はエラー() {
        let result = ApiConfig::from_lookup(lookup_from(&[]));

        assert_eq!(result, Err(ConfigError::Missing("API_PORT")));
    }

    #[rstest]
    #[case("abc")]
    #[case("70000")]
    #[case("")]
    fn test_不正なポートはエラー(#[case] value: &str) {
        let result = ApiConfig::from_lookup(lookup_from(&[("API_PORT", value)]));

        assert_eq!(
            result,
            Err(ConfigError::InvalidPort {
                name:  "API_PORT",
                value: value.to_string(),
            })
        );
    }
}
