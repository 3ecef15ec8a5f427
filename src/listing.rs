//! ギャラリーのテキスト一覧

use portfolio_common::{render_gallery, Gallery};

/// ページと同じ描画結果（見出し・説明・サムネイル）をテキストにする
pub fn format_listing(gallery: &Gallery) -> String {
    let view = render_gallery(gallery);
    let width = gallery.len().saturating_sub(1).to_string().len();
    let mut out = String::new();

    for section in &view.sections {
        out.push_str(&format!("■ {} ({}点)\n", section.title, section.items.len()));
        if let Some(description) = &section.description {
            out.push_str(&format!("  {}\n", description));
        }
        for item in &section.items {
            out.push_str(&format!(
                "  [{:>width$}] {}  {}\n",
                item.index,
                item.alt,
                item.src,
                width = width
            ));
        }
    }

    out
}
