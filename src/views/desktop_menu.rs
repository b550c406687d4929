use crate::routes::RouteEntry;
use dioxus::prelude::*;

// dropdown opens on hover, or on click for touch screens
#[component]
pub fn DesktopMenuSection(label: &'static str, items: &'static [RouteEntry]) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            class: "menu-section",
            onmouseenter: move |_| open.set(true),
            onmouseleave: move |_| open.set(false),
            button { class: "menu-label", onclick: move |_| open.set(!open()), "{label}" }
            if open() {
                ul { class: "menu-dropdown",
                    for item in items.iter() {
                        li { key: "{item.route}",
                            Link { to: item.route, onclick: move |_| open.set(false), "{item.title}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn DesktopMenuLink(title: &'static str, route: &'static str) -> Element {
    rsx! {
        Link { class: "menu-link", to: route, "{title}" }
    }
}
