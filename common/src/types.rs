//! JSONドキュメントの型定義
//!
//! - SiteData: `site-data.json`（アーティスト情報・イベント情報）
//! - Collection / Painting: `gallery-data.json`（コレクション名 → 作品リスト）

use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::linkify::{self, NoteSegment};

/// サイトメタデータ
///
/// 欠けているフィールドは空文字列として扱う（ページは空欄のまま表示を続ける）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteData {
    pub artist_name: String,
    pub contact_email: String,
    pub intro_title: String,
    pub intro_subtitle: String,
    pub location: String,
    pub date: String,
    pub time: String,
    pub note: String,
}

impl SiteData {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `"<artist_name> - <intro_subtitle>"`
    pub fn page_title(&self) -> String {
        format!("{} - {}", self.artist_name, self.intro_subtitle)
    }

    pub fn contact_href(&self) -> String {
        linkify::mailto(&self.contact_email)
    }

    /// メールアドレスをリンク化したノート
    pub fn note_segments(&self) -> Vec<NoteSegment> {
        linkify::linkify_emails(&self.note)
    }
}

/// 作品
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Painting {
    pub file: String,
    pub title: String,

    /// 技法・サイズ（例: "Oil on canvas, 50x70cm"）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
}

impl Painting {
    /// ライトボックスのキャプション行（meta と price のうち空でないもの）
    pub fn caption(&self) -> Option<String> {
        let parts: Vec<&str> = [self.meta.as_deref(), self.price.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" · "))
        }
    }
}

/// コレクション（名前付きの作品グループ）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collection {
    pub name: String,
    pub description: Option<String>,
    pub paintings: Vec<Painting>,
}

/// `gallery-data.json` のコレクション本体
#[derive(Debug, Deserialize)]
struct CollectionBody {
    #[serde(default)]
    description: Option<String>,
    paintings: Vec<Painting>,
}

/// ギャラリードキュメントをパース
///
/// コレクションの順序はJSONオブジェクトのキー順を保持する。
/// 一つでも形が不正なコレクションがあればドキュメント全体をエラーとする。
pub fn parse_collections(json: &str) -> Result<Vec<Collection>> {
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

    map.into_iter()
        .map(|(name, value)| {
            let body: CollectionBody = serde_json::from_value(value)?;
            Ok(Collection {
                name,
                description: body.description,
                paintings: body.paintings,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_data_deserialize() {
        let json = r#"{
            "artist_name": "Jane Doe",
            "contact_email": "jane@example.com",
            "intro_title": "Paintings",
            "intro_subtitle": "Art Sale 2025",
            "location": "Town Hall",
            "date": "May 3",
            "time": "10am - 4pm",
            "note": "Questions? jane@example.com"
        }"#;

        let site = SiteData::from_json(json).expect("デシリアライズ失敗");
        assert_eq!(site.artist_name, "Jane Doe");
        assert_eq!(site.page_title(), "Jane Doe - Art Sale 2025");
        assert_eq!(site.contact_href(), "mailto:jane@example.com");
        assert_eq!(site.note_segments().len(), 2);
    }

    #[test]
    fn test_site_data_missing_fields() {
        let site = SiteData::from_json(r#"{"artist_name": "Jane"}"#).expect("デシリアライズ失敗");
        assert_eq!(site.artist_name, "Jane");
        assert_eq!(site.location, "");
        assert_eq!(site.page_title(), "Jane - ");
    }

    #[test]
    fn test_site_data_not_an_object() {
        assert!(SiteData::from_json("[1, 2]").is_err());
        assert!(SiteData::from_json("<html>").is_err());
    }

    #[test]
    fn test_parse_collections_keeps_key_order() {
        let json = r#"{
            "Zebra": {"paintings": [{"file": "z.jpg", "title": "Z"}]},
            "Apple": {"description": "Fruit", "paintings": []},
            "Mango": {"paintings": [{"file": "m.jpg", "title": "M"}]}
        }"#;

        let collections = parse_collections(json).unwrap();
        let names: Vec<&str> = collections.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
        assert_eq!(collections[1].description.as_deref(), Some("Fruit"));
        assert!(collections[0].description.is_none());
    }

    #[test]
    fn test_parse_collections_extra_fields() {
        let json = r#"{"Landscapes": {"description": "", "paintings": [
            {"file": "landscapes/a.jpg", "title": "A", "meta": "Oil, 40x50", "price": "$200", "sold": true}
        ]}}"#;

        let collections = parse_collections(json).unwrap();
        let painting = &collections[0].paintings[0];
        assert_eq!(painting.meta.as_deref(), Some("Oil, 40x50"));
        assert_eq!(painting.caption().as_deref(), Some("Oil, 40x50 · $200"));
    }

    #[test]
    fn test_parse_collections_structural_failure() {
        // 作品のtitle欠落
        let missing_title = r#"{"A": {"paintings": [{"file": "a.jpg"}]}}"#;
        assert!(parse_collections(missing_title).is_err());

        // paintings欠落
        let missing_paintings = r#"{"A": {"description": "x"}}"#;
        assert!(parse_collections(missing_paintings).is_err());

        assert!(parse_collections("[]").is_err());
        assert!(parse_collections("not json").is_err());
    }

    #[test]
    fn test_parse_collections_empty() {
        assert!(parse_collections("{}").unwrap().is_empty());
    }

    #[test]
    fn test_caption_skips_blank_parts() {
        let painting = Painting {
            file: "a.jpg".to_string(),
            title: "A".to_string(),
            meta: Some("  ".to_string()),
            price: Some("$TBD".to_string()),
        };
        assert_eq!(painting.caption().as_deref(), Some("$TBD"));

        let bare = Painting {
            file: "b.jpg".to_string(),
            title: "B".to_string(),
            ..Default::default()
        };
        assert!(bare.caption().is_none());
    }
}
