//! メインアプリケーションコンポーネント

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;
use portfolio_common::{load_page, Gallery, GalleryPane, InputEvent, Key, Lightbox, Result, SiteData};
use crate::api::fetch::fetch_text;
use crate::components::{
    event_details::EventDetails,
    gallery::GalleryGrid,
    header::SiteHeader,
    lightbox::LightboxOverlay,
};

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // ロード後は読み取り専用
    let site = RwSignal::new(SiteData::default());
    let gallery = RwSignal::new(Gallery::default());
    let pane = RwSignal::new(GalleryPane::Loading);
    let lightbox = RwSignal::new(Lightbox::default());

    // 入力イベントはすべてここを通る
    let on_input = move |event: InputEvent| {
        lightbox.update(|lb| {
            lb.handle(event);
        });
    };

    spawn_local(async move {
        let load = load_page(|path| fetch_text(path)).await;

        if let Some(e) = &load.site_error {
            gloo::console::error!("Could not load site data:", e.to_string());
        }
        if let Some(data) = load.site {
            document().set_title(&data.page_title());
            site.set(data);
        }

        if let Err(e) = &load.gallery {
            gloo::console::error!("Could not load gallery data:", e.to_string());
        }
        let (next_pane, loaded) = settle_gallery(load.gallery);
        if let Some(loaded) = loaded {
            lightbox.set(Lightbox::for_gallery(&loaded));
            gallery.set(loaded);
            bind_keyboard(on_input);
        }
        pane.set(next_pane);
    });

    // 表示中はページのスクロールを止める
    Effect::new(move |was_locked: Option<bool>| {
        let locked = lightbox.with(Lightbox::scroll_locked);
        if let Some(overflow) = body_overflow(was_locked, locked) {
            set_body_overflow(overflow);
        }
        locked
    });

    view! {
        <SiteHeader site=site />
        <main class="container">
            <EventDetails site=site />
            <GalleryGrid pane=pane on_input=on_input />
        </main>
        <LightboxOverlay gallery=gallery lightbox=lightbox on_input=on_input />
    }
}

/// ロード結果 → ギャラリー欄の表示と、操作を受け付けるギャラリー
///
/// 失敗時はギャラリーを返さないので、ライトボックスもキーボードも用意されない。
fn settle_gallery(result: Result<Gallery>) -> (GalleryPane, Option<Gallery>) {
    let pane = GalleryPane::from_load(&result);
    (pane, result.ok())
}

/// body の overflow に書く値
///
/// 一度も表示していない間はページ側のCSSに任せる。
fn body_overflow(was_locked: Option<bool>, locked: bool) -> Option<&'static str> {
    match (was_locked, locked) {
        (_, true) => Some("hidden"),
        (Some(true), false) => Some("auto"),
        _ => None,
    }
}

/// ←/→/Escape をライトボックスに流す
fn bind_keyboard<F>(on_input: F)
where
    F: Fn(InputEvent) + 'static,
{
    // ページが存在する間は解除しない
    let _handle = window_event_listener(ev::keydown, move |ev| {
        on_input(InputEvent::KeyDown(Key::from_key_name(&ev.key())));
    });
}

fn set_body_overflow(value: &str) {
    let Some(body) = document().body() else {
        return;
    };
    if let Err(e) = body.style().set_property("overflow", value) {
        gloo::console::warn!("Could not set body overflow:", e);
    }
}
