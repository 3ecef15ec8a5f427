//! ライトボックスオーバーレイ

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use portfolio_common::{Gallery, InputEvent, Lightbox};
use web_sys::EventTarget;

/// 表示中の1枚の表示内容
#[derive(Clone, PartialEq)]
struct FrameText {
    src: String,
    title: String,
    caption: Option<String>,
    position: String,
}

/// クリック対象がリスナーを持つ要素そのものか
fn is_background_click(target: Option<EventTarget>, current: Option<EventTarget>) -> bool {
    target.is_some() && target == current
}

#[component]
pub fn LightboxOverlay<F>(
    gallery: RwSignal<Gallery>,
    lightbox: RwSignal<Lightbox>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(InputEvent) + 'static + Clone + Send,
{
    let frame = Memo::new(move |_| {
        gallery.with(|g| {
            lightbox.with(|lb| {
                lb.frame(g).map(|f| FrameText {
                    position: f.position_label(g.len()),
                    src: f.src,
                    title: f.painting.title.clone(),
                    caption: f.painting.caption(),
                })
            })
        })
    });

    // 画像の外側（オーバーレイ自身）がクリックされたときだけ閉じる
    let on_overlay_click = {
        let on_input = on_input.clone();
        move |ev: MouseEvent| {
            let on_background = is_background_click(ev.target(), ev.current_target());
            on_input(InputEvent::OverlayClick { on_background });
        }
    };

    let on_close = {
        let on_input = on_input.clone();
        move |_: MouseEvent| on_input(InputEvent::CloseClick)
    };
    let on_prev = {
        let on_input = on_input.clone();
        move |_: MouseEvent| on_input(InputEvent::PrevClick)
    };
    let on_next = move |_: MouseEvent| on_input(InputEvent::NextClick);

    view! {
        <div
            id="lightbox"
            class="lightbox"
            class:show=move || lightbox.with(Lightbox::is_shown)
            on:click=on_overlay_click
        >
            <span class="lightbox-close" on:click=on_close>"\u{00d7}"</span>
            <button class="lightbox-prev" on:click=on_prev>"\u{2039}"</button>
            <figure class="lightbox-content">
                <img
                    class="lightbox-img"
                    src=move || frame.with(|f| f.as_ref().map(|f| f.src.clone()).unwrap_or_default())
                    alt=move || frame.with(|f| f.as_ref().map(|f| f.title.clone()).unwrap_or_default())
                />
                <figcaption>
                    <p class="lightbox-title">
                        {move || frame.with(|f| f.as_ref().map(|f| f.title.clone()).unwrap_or_default())}
                    </p>
                    {move || frame.with(|f| {
                        f.as_ref().and_then(|f| f.caption.clone()).map(|caption| view! {
                            <p class="lightbox-caption">{caption}</p>
                        })
                    })}
                    <p class="lightbox-position">
                        {move || frame.with(|f| f.as_ref().map(|f| f.position.clone()).unwrap_or_default())}
                    </p>
                </figcaption>
            </figure>
            <button class="lightbox-next" on:click=on_next>"\u{203a}"</button>
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element(tag: &str) -> EventTarget {
        document()
            .create_element(tag)
            .expect("create_element failed")
            .unchecked_into::<EventTarget>()
    }

    #[wasm_bindgen_test]
    fn wasm_overlay_itself_is_background() {
        let overlay = element("div");
        assert!(is_background_click(Some(overlay.clone()), Some(overlay)));
    }

    #[wasm_bindgen_test]
    fn wasm_click_inside_content_is_not_background() {
        let overlay = element("div");
        let image = element("img");
        assert!(!is_background_click(Some(image), Some(overlay)));
    }

    #[wasm_bindgen_test]
    fn wasm_missing_target_is_not_background() {
        assert!(!is_background_click(None, None));
        assert!(!is_background_click(None, Some(element("div"))));
    }
}
