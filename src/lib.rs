//! アートポートフォリオ CLI
//!
//! ページと同じ規則で `site-data.json` / `gallery-data.json` を読み込み、
//! 確認・一覧・ライトボックス閲覧を端末で行う。

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod source;
pub mod check;
pub mod listing;
pub mod browse;
