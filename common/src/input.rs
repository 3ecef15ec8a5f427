//! 入力イベント → ライトボックスコマンドの変換
//!
//! DOMへのバインドと遷移ロジックを分離する。

use crate::lightbox::{Lightbox, LightboxState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    Escape,
    Other,
}

impl Key {
    /// `KeyboardEvent.key` の値から
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowLeft" => Key::ArrowLeft,
            "ArrowRight" => Key::ArrowRight,
            "Escape" | "Esc" => Key::Escape,
            _ => Key::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// サムネイルのクリック（フラットインデックス付き）
    ThumbnailClick(usize),
    CloseClick,
    NextClick,
    PrevClick,
    /// オーバーレイ上のクリック。`on_background` は画像の外側かどうか
    OverlayClick { on_background: bool },
    KeyDown(Key),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show(usize),
    Next,
    Prev,
    Hide,
}

/// イベントをコマンドに変換。キー操作はライトボックス表示中のみ有効
pub fn dispatch(event: InputEvent, shown: bool) -> Option<Command> {
    match event {
        InputEvent::ThumbnailClick(index) => Some(Command::Show(index)),
        InputEvent::CloseClick => Some(Command::Hide),
        InputEvent::NextClick => Some(Command::Next),
        InputEvent::PrevClick => Some(Command::Prev),
        InputEvent::OverlayClick { on_background: true } => Some(Command::Hide),
        InputEvent::OverlayClick { on_background: false } => None,
        InputEvent::KeyDown(key) if shown => match key {
            Key::ArrowRight => Some(Command::Next),
            Key::ArrowLeft => Some(Command::Prev),
            Key::Escape => Some(Command::Hide),
            Key::Other => None,
        },
        InputEvent::KeyDown(_) => None,
    }
}

impl Lightbox {
    /// イベントを処理し、遷移があれば新しい状態を返す
    pub fn handle(&mut self, event: InputEvent) -> Option<LightboxState> {
        let command = dispatch(event, self.is_shown())?;
        Some(self.apply(command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_name() {
        assert_eq!(Key::from_key_name("ArrowLeft"), Key::ArrowLeft);
        assert_eq!(Key::from_key_name("ArrowRight"), Key::ArrowRight);
        assert_eq!(Key::from_key_name("Escape"), Key::Escape);
        assert_eq!(Key::from_key_name("Enter"), Key::Other);
        assert_eq!(Key::from_key_name("a"), Key::Other);
    }

    #[test]
    fn test_pointer_events() {
        assert_eq!(dispatch(InputEvent::ThumbnailClick(4), false), Some(Command::Show(4)));
        assert_eq!(dispatch(InputEvent::CloseClick, true), Some(Command::Hide));
        assert_eq!(dispatch(InputEvent::NextClick, true), Some(Command::Next));
        assert_eq!(dispatch(InputEvent::PrevClick, true), Some(Command::Prev));
    }

    #[test]
    fn test_overlay_click_only_on_background() {
        assert_eq!(
            dispatch(InputEvent::OverlayClick { on_background: true }, true),
            Some(Command::Hide)
        );
        assert_eq!(dispatch(InputEvent::OverlayClick { on_background: false }, true), None);
    }

    #[test]
    fn test_keys_ignored_while_hidden() {
        for key in [Key::ArrowLeft, Key::ArrowRight, Key::Escape, Key::Other] {
            assert_eq!(dispatch(InputEvent::KeyDown(key), false), None);
        }
    }

    #[test]
    fn test_keys_while_shown() {
        assert_eq!(dispatch(InputEvent::KeyDown(Key::ArrowRight), true), Some(Command::Next));
        assert_eq!(dispatch(InputEvent::KeyDown(Key::ArrowLeft), true), Some(Command::Prev));
        assert_eq!(dispatch(InputEvent::KeyDown(Key::Escape), true), Some(Command::Hide));
        assert_eq!(dispatch(InputEvent::KeyDown(Key::Other), true), None);
    }

    #[test]
    fn test_handle_sequence() {
        let mut lightbox = Lightbox::new(3);

        assert_eq!(lightbox.handle(InputEvent::KeyDown(Key::ArrowRight)), None);
        assert_eq!(
            lightbox.handle(InputEvent::ThumbnailClick(2)),
            Some(LightboxState::Shown(2))
        );
        assert_eq!(
            lightbox.handle(InputEvent::KeyDown(Key::ArrowRight)),
            Some(LightboxState::Shown(0))
        );
        assert_eq!(lightbox.handle(InputEvent::OverlayClick { on_background: false }), None);
        assert_eq!(
            lightbox.handle(InputEvent::KeyDown(Key::Escape)),
            Some(LightboxState::Hidden)
        );
        assert!(!lightbox.is_shown());
    }
}
