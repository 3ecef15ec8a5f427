//! ページデータの取得

pub mod fetch;
