//! ヘッダーコンポーネント（アーティスト名・連絡先・導入文）

use leptos::prelude::*;
use portfolio_common::SiteData;

#[component]
pub fn SiteHeader(site: RwSignal<SiteData>) -> impl IntoView {
    view! {
        <header class="header">
            <h1 id="artist_name">{move || site.with(|s| s.artist_name.clone())}</h1>
            <a class="contact" href=move || site.with(SiteData::contact_href)>
                <span id="contact_email">{move || site.with(|s| s.contact_email.clone())}</span>
            </a>
            <section class="intro">
                <h2 id="intro_title">{move || site.with(|s| s.intro_title.clone())}</h2>
                <p id="intro_subtitle">{move || site.with(|s| s.intro_subtitle.clone())}</p>
            </section>
        </header>
    }
}
