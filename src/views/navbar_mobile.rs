use crate::routes::{LINK_MENU, SECTION_MENU};
use dioxus::prelude::*;

#[component]
pub fn NavBarMobile() -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div { class: "nav-mobile",
            button {
                class: "hamburger",
                aria_label: "메뉴",
                onclick: move |_| open.set(!open()),
                if open() {
                    "✕"
                } else {
                    "☰"
                }
            }
            if open() {
                div { class: "mobile-menu",
                    for section in SECTION_MENU.iter() {
                        div { key: "{section.label}", class: "mobile-section",
                            h3 { "{section.label}" }
                            for item in section.items.iter() {
                                Link {
                                    key: "{item.route}",
                                    to: item.route,
                                    onclick: move |_| open.set(false),
                                    "{item.title}"
                                }
                            }
                        }
                    }
                    for menu in LINK_MENU.iter() {
                        Link {
                            key: "{menu.route}",
                            class: "mobile-link",
                            to: menu.route,
                            onclick: move |_| open.set(false),
                            "{menu.title}"
                        }
                    }
                }
            }
        }
    }
}
