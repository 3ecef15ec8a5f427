//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// 取得失敗（通信エラーまたは非2xxステータス）
    #[error("Network error ({resource}): {detail}")]
    Network { resource: String, detail: String },

    /// JSONが不正、または期待する形ではない
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub fn network(resource: impl Into<String>, detail: impl Into<String>) -> Self {
        Error::Network {
            resource: resource.into(),
            detail: detail.into(),
        }
    }

    /// 非成功ステータスのレスポンス
    pub fn http_status(resource: impl Into<String>, status: u16) -> Self {
        Error::network(resource, format!("HTTP error! status: {}", status))
    }

    pub fn is_network(&self) -> bool {
        matches!(self, Error::Network { .. })
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
