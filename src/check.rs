//! 画像アセットの検証
//!
//! 各作品の `images/<file>` が存在し画像として読めるか、
//! どの作品からも参照されていない画像がないかを調べる。

use indicatif::{ProgressBar, ProgressStyle};
use portfolio_common::{image_src, Gallery};
use std::path::Path;
use walkdir::WalkDir;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Default, PartialEq)]
pub struct AssetReport {
    /// ファイルが存在しない作品（`images/` からの相対パス）
    pub missing: Vec<String>,
    /// 画像として読めない作品と理由
    pub unreadable: Vec<(String, String)>,
    /// どの作品からも参照されていない画像
    pub unreferenced: Vec<String>,
}

impl AssetReport {
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.unreadable.is_empty() && self.unreferenced.is_empty()
    }
}

pub fn verify_assets(root: &Path, gallery: &Gallery, show_progress: bool) -> AssetReport {
    let mut report = AssetReport::default();

    let pb = if show_progress {
        let pb = ProgressBar::new(gallery.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {msg}") {
            pb.set_style(style);
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    for painting in gallery.paintings() {
        pb.set_message(painting.file.clone());
        let path = root.join(image_src(&painting.file));

        if !path.is_file() {
            report.missing.push(painting.file.clone());
        } else if let Err(e) = image::image_dimensions(&path) {
            report.unreadable.push((painting.file.clone(), e.to_string()));
        } else {
            tracing::debug!("OK: {}", path.display());
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    report.unreferenced = find_unreferenced(&root.join("images"), gallery);
    report
}

/// `images/` 以下の画像で、どの作品の file とも一致しないもの
fn find_unreferenced(images_dir: &Path, gallery: &Gallery) -> Vec<String> {
    if !images_dir.is_dir() {
        return Vec::new();
    }

    let mut unreferenced: Vec<String> = WalkDir::new(images_dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_string_lossy().to_lowercase().as_str()))
                .unwrap_or(false)
        })
        .filter_map(|e| {
            let relative = e.path().strip_prefix(images_dir).ok()?;
            let file = relative
                .components()
                .map(|c| c.as_os_str().to_string_lossy())
                .collect::<Vec<_>>()
                .join("/");
            gallery.index_of(&file).is_none().then_some(file)
        })
        .collect();

    unreferenced.sort();
    unreferenced
}
