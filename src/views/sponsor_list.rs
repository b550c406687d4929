use crate::Route;
use crate::api::list_sponsors;
use crate::views::Loader;
use dioxus::prelude::*;

const SPONSOR_CSS: Asset = asset!("/assets/sponsor.css");

// sponsors as a grid of logo cards, each linking to its detail page
#[component]
pub fn SponsorList() -> Element {
    let sponsors = use_resource(|| async move { list_sponsors().await });

    rsx! {
        document::Link { rel: "stylesheet", href: SPONSOR_CSS }
        div { class: "page-wrapper",
            h2 { "후원사 목록" }

            match &*sponsors.read() {
                None => rsx! {
                    Loader {}
                },
                Some(Ok(entries)) => {
                    if entries.is_empty() {
                        rsx! {
                            p { "아직 등록된 후원사가 없습니다." }
                        }
                    } else {
                        rsx! {
                            ul { class: "sponsor-list",
                                for entry in entries.iter() {
                                    li { key: "{entry.id}", class: "sponsor-card",
                                        Link {
                                            to: Route::SponsorDetailPage {
                                                id: entry.id.clone(),
                                            },
                                            img {
                                                src: entry.detail.logo_src().to_string(),
                                                alt: "{entry.detail.name}",
                                            }
                                            span { "{entry.detail.name}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => {
                    log::error!("Failed to load sponsors: {}", e);
                    rsx! {
                        p { class: "error-message", "후원사 목록을 불러오지 못했습니다." }
                    }
                }
            }
        }
    }
}
