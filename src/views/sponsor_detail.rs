use crate::api::get_sponsor_detail;
use crate::query::{QueryCache, QueryState};
use crate::sponsor::{RenderState, SponsorDetail, SponsorId, load_sponsor_detail};
use crate::views::Loader;
use chrono::Utc;
use dioxus::prelude::*;

const SPONSOR_CSS: Asset = asset!("/assets/sponsor.css");

/// Cached sponsor detail for the route identifier.
///
/// Each identifier has its own cache entry, so navigating to another sponsor
/// fetches under the new key while earlier results stay cached. The fetch
/// policy itself lives in `load_sponsor_detail`.
pub fn use_sponsor_detail(id: ReadOnlySignal<String>) -> Memo<QueryState<SponsorDetail>> {
    let mut cache = use_context::<Signal<QueryCache<SponsorDetail>>>();

    // reruns whenever `id` changes
    let _fetch = use_resource(move || {
        let sponsor_id = SponsorId::parse(&id.read());
        async move {
            load_sponsor_detail(&mut cache, sponsor_id, Utc::now(), get_sponsor_detail).await;
        }
    });

    use_memo(move || match SponsorId::parse(&id.read()) {
        Some(sponsor_id) => cache.read().snapshot(&sponsor_id.cache_key()),
        None => QueryState::default(),
    })
}

#[component]
pub fn SponsorDetailPage(id: ReadOnlySignal<String>) -> Element {
    let query = use_sponsor_detail(id);
    let query = query.read();

    let sponsor = match RenderState::select(&query) {
        RenderState::Empty => return rsx! {},
        RenderState::Loading => return rsx! { Loader {} },
        RenderState::Content(sponsor) => sponsor.clone(),
    };

    rsx! {
        document::Link { rel: "stylesheet", href: SPONSOR_CSS }
        SponsorContent { sponsor }
    }
}

#[component]
pub fn SponsorContent(sponsor: SponsorDetail) -> Element {
    rsx! {
        div { class: "page-wrapper",
            h2 { class: "sponsor-name", "{sponsor.name}" }
            div { class: "sponsor-content",
                a { href: sponsor.href().to_string(),
                    div { class: "image-wrapper",
                        img {
                            src: sponsor.logo_src().to_string(),
                            alt: "{sponsor.name}",
                            width: "100%",
                        }
                    }
                }
                span { class: "description", {sponsor.description()} }
            }
        }
    }
}
