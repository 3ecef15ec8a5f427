//! 端末ライトボックス
//!
//! ページと同じ状態機械を、行入力をキー操作に見立てて動かす。

use crate::error::{PortfolioError, Result};
use dialoguer::Input;
use portfolio_common::{Gallery, InputEvent, Key, Lightbox};

/// 行入力 → 入力イベント
///
/// 空行と `n` は→、`p` は←、`q` はEscape、数字はそのサムネイルのクリック。
pub fn parse_command(line: &str) -> Option<InputEvent> {
    let trimmed = line.trim();
    match trimmed {
        "" | "n" | "next" | ">" => Some(InputEvent::KeyDown(Key::ArrowRight)),
        "p" | "prev" | "<" => Some(InputEvent::KeyDown(Key::ArrowLeft)),
        "q" | "Q" | "quit" | "esc" => Some(InputEvent::KeyDown(Key::Escape)),
        _ => trimmed.parse().ok().map(InputEvent::ThumbnailClick),
    }
}

/// 表示中の1枚を説明する行
pub fn describe_frame(gallery: &Gallery, lightbox: &Lightbox) -> Option<String> {
    let frame = lightbox.frame(gallery)?;
    let collection = gallery
        .section_of(frame.index)
        .map(|s| s.name.as_str())
        .unwrap_or_default();

    let mut line = format!(
        "[{}] {} / {}  {}",
        frame.position_label(gallery.len()),
        collection,
        frame.painting.title,
        frame.src
    );
    if let Some(caption) = frame.painting.caption() {
        line.push_str(&format!("\n    {}", caption));
    }
    Some(line)
}

/// 対話ループ。Escape（q）で閉じたら終了
pub fn run_browse(gallery: &Gallery, start: usize) -> Result<()> {
    if gallery.is_empty() {
        println!("作品がありません");
        return Ok(());
    }

    let mut lightbox = Lightbox::for_gallery(gallery);
    lightbox.handle(InputEvent::ThumbnailClick(start));
    if !lightbox.is_shown() {
        return Err(PortfolioError::Prompt(format!(
            "開始インデックスが範囲外です: {} (0-{})",
            start,
            gallery.len() - 1
        )));
    }

    println!("操作: [Enter/n]次へ [p]前へ [数字]その作品へ [q]閉じる");
    println!("---");

    while let Some(line) = describe_frame(gallery, &lightbox) {
        println!("{}", line);

        let input: String = Input::new()
            .with_prompt(">")
            .allow_empty(true)
            .interact_text()
            .map_err(|e| PortfolioError::Prompt(e.to_string()))?;

        match parse_command(&input) {
            Some(event) => {
                let before = lightbox.state();
                if lightbox.handle(event) == Some(before) {
                    tracing::debug!("状態変化なし: {:?}", event);
                }
            }
            None => println!("  不明な操作: {}", input.trim()),
        }
    }

    Ok(())
}
