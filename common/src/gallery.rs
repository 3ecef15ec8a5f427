//! ギャラリースナップショット
//!
//! ロード時に一度だけ構築し、以降は読み取り専用。
//! コレクションを走査する同じパスでフラットインデックスを割り当てる。

use std::collections::HashMap;
use std::ops::Range;
use crate::error::Result;
use crate::types::{parse_collections, Collection, Painting};

/// コレクション1件分（作品本体は `Gallery::paintings` に平坦化して保持）
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub name: String,
    description: Option<String>,
    range: Range<usize>,
}

impl Section {
    /// 空文字列の説明は「説明なし」として扱う（空白のみは表示する）
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.is_empty())
    }

    /// このコレクションが占めるフラットインデックスの範囲
    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn len(&self) -> usize {
        self.range.len()
    }

    pub fn is_empty(&self) -> bool {
        self.range.is_empty()
    }
}

/// 平坦化済みギャラリー
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Gallery {
    sections: Vec<Section>,
    paintings: Vec<Painting>,
    index_by_file: HashMap<String, usize>,
}

impl Gallery {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::from_collections(parse_collections(json)?))
    }

    pub fn from_collections(collections: Vec<Collection>) -> Self {
        let mut gallery = Gallery::default();

        for collection in collections {
            let start = gallery.paintings.len();
            for painting in collection.paintings {
                let index = gallery.paintings.len();
                // 同じファイルが複数回現れた場合は最初の位置を採用
                gallery.index_by_file.entry(painting.file.clone()).or_insert(index);
                gallery.paintings.push(painting);
            }
            gallery.sections.push(Section {
                name: collection.name,
                description: collection.description,
                range: start..gallery.paintings.len(),
            });
        }

        gallery
    }

    /// 平坦化シーケンスの長さ（N）
    pub fn len(&self) -> usize {
        self.paintings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paintings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Painting> {
        self.paintings.get(index)
    }

    /// 平坦化シーケンス
    pub fn paintings(&self) -> &[Painting] {
        &self.paintings
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// コレクション内の作品を (フラットインデックス, 作品) で列挙
    pub fn section_paintings<'a>(
        &'a self,
        section: &Section,
    ) -> impl Iterator<Item = (usize, &'a Painting)> + 'a {
        // 別のギャラリーのセクションなら何も返さない
        let range = section.range();
        let paintings = self.paintings.get(range.clone()).unwrap_or_default();
        range.zip(paintings.iter())
    }

    pub fn index_of(&self, file: &str) -> Option<usize> {
        self.index_by_file.get(file).copied()
    }

    /// フラットインデックスが属するコレクション
    pub fn section_of(&self, index: usize) -> Option<&Section> {
        self.sections.iter().find(|s| s.range.contains(&index))
    }

    /// 複数回登録されているファイル名（初出順）
    pub fn duplicate_files(&self) -> Vec<&str> {
        let mut duplicates = Vec::new();
        for (index, painting) in self.paintings.iter().enumerate() {
            let first = self.index_of(&painting.file);
            if first != Some(index) && !duplicates.contains(&painting.file.as_str()) {
                duplicates.push(painting.file.as_str());
            }
        }
        duplicates
    }
}
