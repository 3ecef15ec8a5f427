//! ページ構成コンポーネント

pub mod header;
pub mod event_details;
pub mod gallery;
pub mod lightbox;
