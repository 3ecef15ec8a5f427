//! ギャラリー描画用のビューモデル
//!
//! DOM/端末に依存しない。Webクレートはこれを要素に、CLIはテキストに変換する。

use crate::error::Result;
use crate::gallery::Gallery;

/// ギャラリー取得失敗時に表示する文言
pub const GALLERY_ERROR_MESSAGE: &str = "Could not load gallery. Please try again later.";

const IMAGE_DIR: &str = "images";

/// サムネイル・原寸共通の画像パス
pub fn image_src(file: &str) -> String {
    format!("{}/{}", IMAGE_DIR, file)
}

/// サムネイル1件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailView {
    /// 平坦化シーケンス内の位置
    pub index: usize,
    pub src: String,
    pub alt: String,
}

/// コレクション1件（見出し・説明・グリッド）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionView {
    pub title: String,
    pub description: Option<String>,
    pub items: Vec<ThumbnailView>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryView {
    pub sections: Vec<SectionView>,
}

impl GalleryView {
    pub fn thumbnail_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

/// ギャラリー全体を描画
///
/// 同じ入力からは常に同じインデックス割り当てになる。
pub fn render_gallery(gallery: &Gallery) -> GalleryView {
    let sections = gallery
        .sections()
        .iter()
        .map(|section| SectionView {
            title: section.name.clone(),
            description: section.description().map(str::to_string),
            items: gallery
                .section_paintings(section)
                .map(|(index, painting)| ThumbnailView {
                    index,
                    src: image_src(&painting.file),
                    alt: painting.title.clone(),
                })
                .collect(),
        })
        .collect();

    GalleryView { sections }
}

/// ギャラリー領域の表示状態
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GalleryPane {
    #[default]
    Loading,
    Ready(GalleryView),
    /// エラーメッセージ1件のみ、サムネイルなし
    Failed(String),
}

impl GalleryPane {
    pub fn from_load(gallery: &Result<Gallery>) -> Self {
        match gallery {
            Ok(gallery) => GalleryPane::Ready(render_gallery(gallery)),
            Err(_) => GalleryPane::Failed(GALLERY_ERROR_MESSAGE.to_string()),
        }
    }

    pub fn thumbnail_count(&self) -> usize {
        match self {
            GalleryPane::Ready(view) => view.thumbnail_count(),
            _ => 0,
        }
    }
}
