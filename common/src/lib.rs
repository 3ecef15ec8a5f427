//! Art Portfolio Common Library
//!
//! Web(WASM)とCLIで共有されるギャラリーモデル・ライトボックス・ローダー

pub mod error;
pub mod types;
pub mod gallery;
pub mod render;
pub mod lightbox;
pub mod input;
pub mod linkify;
pub mod loader;

pub use error::{Error, Result};
pub use types::{Collection, Painting, SiteData, parse_collections};
pub use gallery::{Gallery, Section};
pub use render::{GalleryPane, GalleryView, SectionView, ThumbnailView, image_src, render_gallery, GALLERY_ERROR_MESSAGE};
pub use lightbox::{Lightbox, LightboxFrame, LightboxState};
pub use input::{Command, InputEvent, Key, dispatch};
pub use linkify::{NoteSegment, linkify_emails, mailto};
pub use loader::{PageLoad, check_status, load_page, GALLERY_DATA_PATH, SITE_DATA_PATH};
