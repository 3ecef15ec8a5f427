//! ページデータのロード
//!
//! サイトメタデータ → ギャラリーデータの順に逐次取得する。
//! 取得方法（ブラウザfetch / ファイル / HTTP）は呼び出し側が渡す。

use std::future::Future;
use crate::error::{Error, Result};
use crate::gallery::Gallery;
use crate::types::SiteData;

pub const SITE_DATA_PATH: &str = "site-data.json";
pub const GALLERY_DATA_PATH: &str = "gallery-data.json";

/// ロード結果
///
/// サイトメタデータの失敗は `site_error` に残すだけで、ギャラリーには影響しない。
#[derive(Debug)]
pub struct PageLoad {
    pub site: Option<SiteData>,
    pub site_error: Option<Error>,
    pub gallery: Result<Gallery>,
}

impl PageLoad {
    /// 取得できなかった場合は空欄のメタデータ
    pub fn site_or_default(&self) -> SiteData {
        self.site.clone().unwrap_or_default()
    }
}

/// 2xx 以外は NetworkError
pub fn check_status(resource: &str, status: u16) -> Result<()> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(Error::http_status(resource, status))
    }
}

/// 2つのドキュメントを順番に取得・パースする
///
/// サイトメタデータの取得が（成否にかかわらず）終わってからギャラリーを取得する。
pub async fn load_page<F, Fut>(fetch: F) -> PageLoad
where
    F: Fn(&'static str) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let (site, site_error) = match fetch(SITE_DATA_PATH)
        .await
        .and_then(|body| SiteData::from_json(&body))
    {
        Ok(site) => (Some(site), None),
        Err(e) => (None, Some(e)),
    };

    let gallery = fetch(GALLERY_DATA_PATH)
        .await
        .and_then(|body| Gallery::from_json(&body));

    PageLoad {
        site,
        site_error,
        gallery,
    }
}
