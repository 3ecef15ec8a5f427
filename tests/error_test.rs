//! エラーケーステスト
//!
//! 各種エラー条件でのエラーハンドリングを検証

use art_portfolio::error::PortfolioError;
use art_portfolio::source::Source;
use std::time::Duration;

/// 存在しないフォルダをソースに指定した場合
#[test]
fn test_source_nonexistent_folder() {
    let result = Source::parse("/nonexistent/path/12345", Duration::from_secs(1));
    assert!(matches!(result, Err(PortfolioError::FolderNotFound(_))));
}

/// PortfolioErrorのDisplay実装確認
#[test]
fn test_error_display() {
    let errors = vec![
        PortfolioError::Config("テスト設定エラー".to_string()),
        PortfolioError::InvalidSource("ftp://x".to_string()),
        PortfolioError::FolderNotFound("/path/to/folder".to_string()),
        PortfolioError::Prompt("入力中断".to_string()),
        PortfolioError::GalleryUnavailable("HTTP error! status: 404".to_string()),
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty(), "エラーメッセージが空: {:?}", err);
    }
}

/// IOエラーからの変換
#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: PortfolioError = io_err.into();

    assert!(matches!(err, PortfolioError::Io(_)));
    assert!(format!("{}", err).contains("IO"));
}

/// JSONエラーからの変換
#[test]
fn test_json_error_conversion() {
    let json_err = serde_json::from_str::<serde_json::Value>("{ invalid }").unwrap_err();
    let err: PortfolioError = json_err.into();

    assert!(matches!(err, PortfolioError::JsonParse(_)));
}

/// common::Errorからの変換（透過的）
#[test]
fn test_common_error_transparent() {
    let common_err = portfolio_common::Error::http_status("gallery-data.json", 404);
    let err: PortfolioError = common_err.into();

    assert!(matches!(err, PortfolioError::Common(_)));
    let display = format!("{}", err);
    assert!(display.contains("gallery-data.json"));
    assert!(display.contains("404"));
}
