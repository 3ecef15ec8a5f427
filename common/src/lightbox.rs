//! ライトボックス状態機械
//!
//! `Hidden` と `Shown(index)` の2状態。表示画像・オーバーレイ・スクロール抑止は
//! 状態から導出する。

use crate::gallery::Gallery;
use crate::input::Command;
use crate::render::image_src;
use crate::types::Painting;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LightboxState {
    #[default]
    Hidden,
    Shown(usize),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    state: LightboxState,
}

/// 表示中の1枚
#[derive(Debug, Clone, PartialEq)]
pub struct LightboxFrame<'a> {
    pub index: usize,
    pub painting: &'a Painting,
    pub src: String,
}

impl LightboxFrame<'_> {
    /// "2 / 5"
    pub fn position_label(&self, total: usize) -> String {
        format!("{} / {}", self.index + 1, total)
    }
}

impl Lightbox {
    /// `len` は平坦化シーケンスの長さ
    pub fn new(len: usize) -> Self {
        Self {
            len,
            state: LightboxState::Hidden,
        }
    }

    pub fn for_gallery(gallery: &Gallery) -> Self {
        Self::new(gallery.len())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn state(&self) -> LightboxState {
        self.state
    }

    pub fn current(&self) -> Option<usize> {
        match self.state {
            LightboxState::Shown(index) => Some(index),
            LightboxState::Hidden => None,
        }
    }

    pub fn is_shown(&self) -> bool {
        self.current().is_some()
    }

    /// 表示中はページのスクロールを止める
    pub fn scroll_locked(&self) -> bool {
        self.is_shown()
    }

    /// 範囲外のインデックスは無視する
    pub fn show(&mut self, index: usize) -> LightboxState {
        if index < self.len {
            self.state = LightboxState::Shown(index);
        }
        self.state
    }

    /// 末尾から先頭へ折り返す
    pub fn next(&mut self) -> LightboxState {
        if let Some(index) = self.current() {
            self.state = LightboxState::Shown((index + 1) % self.len);
        }
        self.state
    }

    /// 先頭から末尾へ折り返す
    pub fn prev(&mut self) -> LightboxState {
        if let Some(index) = self.current() {
            self.state = LightboxState::Shown((index + self.len - 1) % self.len);
        }
        self.state
    }

    pub fn hide(&mut self) -> LightboxState {
        self.state = LightboxState::Hidden;
        self.state
    }

    pub fn apply(&mut self, command: Command) -> LightboxState {
        match command {
            Command::Show(index) => self.show(index),
            Command::Next => self.next(),
            Command::Prev => self.prev(),
            Command::Hide => self.hide(),
        }
    }

    pub fn frame<'a>(&self, gallery: &'a Gallery) -> Option<LightboxFrame<'a>> {
        let index = self.current()?;
        let painting = gallery.get(index)?;
        Some(LightboxFrame {
            index,
            painting,
            src: image_src(&painting.file),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"{
        "Landscapes": {"paintings": [{"file": "a.jpg", "title": "A"}, {"file": "b.jpg", "title": "B"}]},
        "Portraits": {"paintings": [{"file": "c.jpg", "title": "C"}]}
    }"#;

    #[test]
    fn test_initial_state_hidden() {
        let lightbox = Lightbox::new(3);
        assert_eq!(lightbox.state(), LightboxState::Hidden);
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn test_scenario_wraps_to_start() {
        let gallery = Gallery::from_json(SCENARIO).unwrap();
        let mut lightbox = Lightbox::for_gallery(&gallery);

        lightbox.show(0);
        lightbox.next();
        assert_eq!(lightbox.next(), LightboxState::Shown(2));
        assert_eq!(lightbox.frame(&gallery).unwrap().painting.title, "C");

        assert_eq!(lightbox.next(), LightboxState::Shown(0));
        let frame = lightbox.frame(&gallery).unwrap();
        assert_eq!(frame.painting.title, "A");
        assert_eq!(frame.src, "images/a.jpg");
        assert_eq!(frame.position_label(gallery.len()), "1 / 3");
    }

    #[test]
    fn test_prev_wraps_to_end() {
        let mut lightbox = Lightbox::new(3);
        lightbox.show(0);
        assert_eq!(lightbox.prev(), LightboxState::Shown(2));
    }

    #[test]
    fn test_next_n_times_is_identity() {
        for n in 1..=7 {
            for start in 0..n {
                let mut lightbox = Lightbox::new(n);
                lightbox.show(start);
                for _ in 0..n {
                    lightbox.next();
                }
                assert_eq!(lightbox.current(), Some(start), "n={} start={}", n, start);
            }
        }
    }

    #[test]
    fn test_prev_is_inverse_of_next() {
        for n in 1..=6 {
            for i in 0..n {
                let mut lightbox = Lightbox::new(n);
                lightbox.show(i);
                lightbox.next();
                lightbox.prev();
                assert_eq!(lightbox.current(), Some(i));

                lightbox.prev();
                lightbox.next();
                assert_eq!(lightbox.current(), Some(i));
            }
        }
    }

    #[test]
    fn test_single_painting_stays_put() {
        let mut lightbox = Lightbox::new(1);
        lightbox.show(0);
        assert_eq!(lightbox.next(), LightboxState::Shown(0));
        assert_eq!(lightbox.prev(), LightboxState::Shown(0));
    }

    #[test]
    fn test_hide_releases_scroll() {
        let mut lightbox = Lightbox::new(2);
        lightbox.show(1);
        assert!(lightbox.scroll_locked());
        assert_eq!(lightbox.hide(), LightboxState::Hidden);
        assert!(!lightbox.scroll_locked());
        assert!(lightbox.current().is_none());
    }

    #[test]
    fn test_show_while_shown_jumps() {
        let mut lightbox = Lightbox::new(5);
        lightbox.show(1);
        assert_eq!(lightbox.show(4), LightboxState::Shown(4));
    }

    #[test]
    fn test_out_of_range_show_ignored() {
        let mut lightbox = Lightbox::new(2);
        assert_eq!(lightbox.show(2), LightboxState::Hidden);
        lightbox.show(1);
        assert_eq!(lightbox.show(9), LightboxState::Shown(1));
    }

    #[test]
    fn test_navigation_while_hidden_is_noop() {
        let mut lightbox = Lightbox::new(3);
        assert_eq!(lightbox.next(), LightboxState::Hidden);
        assert_eq!(lightbox.prev(), LightboxState::Hidden);
        assert_eq!(lightbox.hide(), LightboxState::Hidden);
    }

    #[test]
    fn test_empty_gallery_never_shows() {
        let mut lightbox = Lightbox::new(0);
        assert!(lightbox.is_empty());
        assert_eq!(lightbox.show(0), LightboxState::Hidden);
        assert_eq!(lightbox.next(), LightboxState::Hidden);
        assert_eq!(lightbox.prev(), LightboxState::Hidden);
    }

    #[test]
    fn test_apply_commands() {
        let mut lightbox = Lightbox::new(3);
        assert_eq!(lightbox.apply(Command::Show(1)), LightboxState::Shown(1));
        assert_eq!(lightbox.apply(Command::Prev), LightboxState::Shown(0));
        assert_eq!(lightbox.apply(Command::Next), LightboxState::Shown(1));
        assert_eq!(lightbox.apply(Command::Hide), LightboxState::Hidden);
    }
}
