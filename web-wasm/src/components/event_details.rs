//! イベント情報コンポーネント

use leptos::prelude::*;
use portfolio_common::{NoteSegment, SiteData};

#[component]
pub fn EventDetails(site: RwSignal<SiteData>) -> impl IntoView {
    view! {
        <section class="event-details">
            <p><span class="label">"Location: "</span><span id="location">{move || site.with(|s| s.location.clone())}</span></p>
            <p><span class="label">"Date: "</span><span id="date">{move || site.with(|s| s.date.clone())}</span></p>
            <p><span class="label">"Time: "</span><span id="time">{move || site.with(|s| s.time.clone())}</span></p>
            <p id="note">
                {move || {
                    site.with(SiteData::note_segments)
                        .into_iter()
                        .map(note_segment)
                        .collect_view()
                }}
            </p>
        </section>
    }
}

/// メールアドレスは mailto リンク、それ以外はテキストのまま
fn note_segment(segment: NoteSegment) -> AnyView {
    match segment.href() {
        Some(href) => view! { <a href=href>{segment.as_str().to_string()}</a> }.into_any(),
        None => segment.as_str().to_string().into_any(),
    }
}
