//! 検出サービスの接続設定

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 検出エンドポイントのパス
pub const DETECT_PATH: &str = "/detect-defects";

/// 接続先未指定時のベースURL
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ServiceConfig {
    /// ベースURLから設定を作る
    ///
    /// `http://` か `https://` で始まりホスト名があること。末尾の `/` は除去する。
    /// 末尾が `/detect-defects` ならエンドポイントURLとみなして取り除く。
    pub fn from_base_url(url: &str) -> Result<Self> {
        let trimmed = url.trim().trim_end_matches('/');
        let trimmed = trimmed.strip_suffix(DETECT_PATH).unwrap_or(trimmed);

        let rest = trimmed
            .strip_prefix("http://")
            .or_else(|| trimmed.strip_prefix("https://"))
            .ok_or_else(|| Error::Config(format!("http(s) URL expected: {}", url)))?;

        let host = rest.split('/').next().unwrap_or_default();
        if host.is_empty() {
            return Err(Error::Config(format!("host missing: {}", url)));
        }

        Ok(Self {
            base_url: trimmed.to_string(),
        })
    }

    /// POST先のURL
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url, DETECT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        assert_eq!(
            ServiceConfig::default().endpoint(),
            "http://127.0.0.1:8000/detect-defects"
        );
    }

    #[test]
    fn test_from_base_url_trims_slash() {
        let config = ServiceConfig::from_base_url("http://192.168.30.132:8000/").unwrap();
        assert_eq!(config.base_url, "http://192.168.30.132:8000");
        assert_eq!(config.endpoint(), "http://192.168.30.132:8000/detect-defects");
    }

    #[test]
    fn test_from_full_endpoint_url() {
        let config = ServiceConfig::from_base_url("https://api.example.com/v1/detect-defects").unwrap();
        assert_eq!(config.endpoint(), "https://api.example.com/v1/detect-defects");
    }

    #[test]
    fn test_rejects_missing_scheme() {
        let result = ServiceConfig::from_base_url("192.168.30.132:8000");
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_rejects_missing_host() {
        assert!(ServiceConfig::from_base_url("http://").is_err());
        assert!(ServiceConfig::from_base_url("   ").is_err());
    }

    #[test]
    fn test_config_json() {
        let config: ServiceConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:9000"}"#).expect("デシリアライズ失敗");
        assert_eq!(config.endpoint(), "http://localhost:9000/detect-defects");
    }
}
