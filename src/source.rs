//! ドキュメントの取得元（ローカルフォルダ / HTTP）

use crate::error::{PortfolioError, Result};
use portfolio_common::{check_status, load_page, Error as CommonError, PageLoad};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub enum Source {
    /// サイトのルートフォルダ（`site-data.json` と `images/` を含む）
    Dir(PathBuf),
    /// サイトのベースURL
    Url { base: String, client: reqwest::Client },
}

impl Source {
    /// `http://` / `https://` で始まればURL、それ以外はフォルダ
    pub fn parse(value: &str, timeout: Duration) -> Result<Self> {
        let value = value.trim();
        if value.is_empty() {
            return Err(PortfolioError::InvalidSource("空のソース".into()));
        }

        if value.starts_with("http://") || value.starts_with("https://") {
            let client = reqwest::Client::builder().timeout(timeout).build()?;
            return Ok(Source::Url {
                base: value.trim_end_matches('/').to_string(),
                client,
            });
        }

        let path = PathBuf::from(value);
        if !path.is_dir() {
            return Err(PortfolioError::FolderNotFound(path.display().to_string()));
        }
        Ok(Source::Dir(path))
    }

    /// ローカルフォルダなら画像検証に使う
    pub fn root_dir(&self) -> Option<&Path> {
        match self {
            Source::Dir(path) => Some(path.as_path()),
            Source::Url { .. } => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            Source::Dir(path) => path.display().to_string(),
            Source::Url { base, .. } => base.clone(),
        }
    }

    /// 1ドキュメントを取得
    ///
    /// 読めない・非2xx・タイムアウトはすべて NetworkError。
    pub async fn fetch(&self, path: &str) -> std::result::Result<String, CommonError> {
        match self {
            Source::Dir(root) => {
                let file = root.join(path);
                tracing::debug!("読込: {}", file.display());
                tokio::fs::read_to_string(&file)
                    .await
                    .map_err(|e| CommonError::network(path, e.to_string()))
            }
            Source::Url { base, client } => {
                let url = format!("{}/{}", base, path);
                tracing::debug!("取得: {}", url);
                let response = client
                    .get(&url)
                    .send()
                    .await
                    .map_err(|e| CommonError::network(path, describe_reqwest(&e)))?;
                check_status(path, response.status().as_u16())?;
                response
                    .text()
                    .await
                    .map_err(|e| CommonError::network(path, describe_reqwest(&e)))
            }
        }
    }

    /// ページと同じ規則でロードし、失敗をログに残す
    pub async fn load(&self) -> PageLoad {
        let load = load_page(|path| self.fetch(path)).await;

        if let Some(e) = &load.site_error {
            tracing::warn!("Could not load site data: {}", e);
        }
        if let Err(e) = &load.gallery {
            tracing::error!("Could not load gallery data: {}", e);
        }

        load
    }
}

fn describe_reqwest(e: &reqwest::Error) -> String {
    if e.is_timeout() {
        "request timed out".to_string()
    } else {
        e.to_string()
    }
}
