use crate::Route;
use crate::routes::{HOME, LINK_MENU, MYPAGE, SECTION_MENU};
use crate::session::{self, shows_account_actions, use_session};
use crate::views::{DesktopMenuLink, DesktopMenuSection, NavBarMobile, ThemeSwitch};
use dioxus::prelude::*;

const NAVBAR_CSS: Asset = asset!("/assets/navbar.css");

/// Layout wrapping every page with the site navigation.
///
/// Account actions stay hidden until the login state has been observed and
/// is true.
#[component]
pub fn NavBar() -> Element {
    let mut store = use_session();
    let navigator = use_navigator();
    let mut is_logged_in = use_signal(|| None::<bool>);

    use_effect(move || is_logged_in.set(Some(store.is_logged_in())));

    let logout = move |_: MouseEvent| async move {
        let home = session::logout(&mut store, crate::api::sign_out()).await;
        navigator.push(home);
    };

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }

        nav { id: "navbar", class: "nav-area",
            Link { class: "brand", to: HOME.route,
                span { class: "brand-logo", "CONF" }
                h1 { class: "visually-hidden", {HOME.title} }
            }
            NavBarMobile {}
            div { class: "nav-container",
                div { class: "menu-box",
                    for section in SECTION_MENU.iter() {
                        DesktopMenuSection {
                            key: "{section.label}",
                            label: section.label,
                            items: section.items,
                        }
                    }
                    for menu in LINK_MENU.iter() {
                        DesktopMenuLink {
                            key: "{menu.route}",
                            title: menu.title,
                            route: menu.route,
                        }
                    }
                }
                div { class: "side-box",
                    ThemeSwitch {}
                    if shows_account_actions(is_logged_in()) {
                        Link { to: MYPAGE.route,
                            button { class: "solid-button", {MYPAGE.title} }
                        }
                        button { class: "solid-button", onclick: logout, "로그아웃" }
                    }
                }
            }
        }

        Outlet::<Route> {}
    }
}
