use crate::error::{PortfolioError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// 既定ソースを上書きする環境変数
pub const SOURCE_ENV: &str = "PORTFOLIO_SOURCE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_source: Option<String>,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_source: None,
            timeout_seconds: 30,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| PortfolioError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("art-portfolio").join("config.json"))
    }

    /// 引数 > 環境変数 > 設定ファイル > カレントディレクトリ
    pub fn resolve_source(&self, arg: Option<&str>) -> String {
        self.resolve_source_with(arg, std::env::var(SOURCE_ENV).ok())
    }

    fn resolve_source_with(&self, arg: Option<&str>, env: Option<String>) -> String {
        arg.map(str::to_string)
            .or(env.filter(|s| !s.trim().is_empty()))
            .or_else(|| self.default_source.clone())
            .unwrap_or_else(|| ".".to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}
