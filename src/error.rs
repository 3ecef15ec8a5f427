use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    #[error(transparent)]
    Common(#[from] portfolio_common::Error),

    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ソース指定が不正: {0}")]
    InvalidSource(String),

    #[error("フォルダが見つかりません: {0}")]
    FolderNotFound(String),

    #[error("HTTPクライアントエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("ギャラリーを読み込めません: {0}")]
    GalleryUnavailable(String),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;
