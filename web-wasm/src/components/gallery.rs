//! ギャラリーコンポーネント

use leptos::prelude::*;
use portfolio_common::{GalleryPane, InputEvent, SectionView, ThumbnailView};

#[component]
pub fn GalleryGrid<F>(pane: RwSignal<GalleryPane>, on_input: F) -> impl IntoView
where
    F: Fn(InputEvent) + 'static + Clone + Send,
{
    view! {
        <div id="gallery" class="gallery">
            {move || {
                let on_input = on_input.clone();
                match pane.get() {
                    GalleryPane::Loading => view! { <p class="loading">"Loading gallery..."</p> }.into_any(),
                    GalleryPane::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
                    GalleryPane::Ready(gallery) => gallery
                        .sections
                        .into_iter()
                        .map(|section| view! { <CollectionSection section=section on_input=on_input.clone() /> })
                        .collect_view()
                        .into_any(),
                }
            }}
        </div>
    }
}

#[component]
fn CollectionSection<F>(section: SectionView, on_input: F) -> impl IntoView
where
    F: Fn(InputEvent) + 'static + Clone + Send,
{
    view! {
        <h2 class="collection-title">{section.title}</h2>
        {section.description.map(|description| view! {
            <p class="collection-description">{description}</p>
        })}
        <div class="gallery-grid">
            {section
                .items
                .into_iter()
                .map(|item| view! { <Thumbnail item=item on_input=on_input.clone() /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn Thumbnail<F>(item: ThumbnailView, on_input: F) -> impl IntoView
where
    F: Fn(InputEvent) + 'static + Clone + Send,
{
    let index = item.index;
    view! {
        <div
            class="gallery-item"
            data-index=index.to_string()
            on:click=move |_| on_input(InputEvent::ThumbnailClick(index))
        >
            <img src=item.src alt=item.alt loading="lazy" />
        </div>
    }
}
