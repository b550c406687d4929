use crate::routes::{ABOUT, SCHEDULE, SPONSOR_LIST};
use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        div { id: "home-page", class: "page-wrapper",
            header { class: "hero",
                h2 { "Conference" }
                p { "개발자들이 함께 만드는 연례 컨퍼런스" }
            }
            main { class: "home-links",
                Link { to: ABOUT.route, "{ABOUT.title}" }
                Link { to: SCHEDULE.route, "{SCHEDULE.title}" }
                Link { to: SPONSOR_LIST.route, "{SPONSOR_LIST.title}" }
            }
        }
    }
}
