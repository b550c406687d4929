use dioxus::prelude::*;

#[component]
pub fn Loader() -> Element {
    rsx! {
        div { class: "loader", role: "status",
            span { class: "spinner" }
            span { class: "visually-hidden", "Loading..." }
        }
    }
}
