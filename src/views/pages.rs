use crate::routes::HOME;
use crate::session::use_session;
use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        div { id: "about-page", class: "page-wrapper",
            h2 { "행사 소개" }
            p { "커뮤니티가 준비하고 자원봉사자가 운영하는 비영리 개발자 컨퍼런스입니다." }
        }
    }
}

#[component]
pub fn CodeOfConduct() -> Element {
    rsx! {
        div { id: "coc-page", class: "page-wrapper",
            h2 { "행동 강령" }
            ul {
                li { "모든 참가자를 존중해 주세요." }
                li { "차별적이거나 공격적인 언행을 삼가 주세요." }
                li { "문제가 생기면 준비위원회에 바로 알려 주세요." }
            }
        }
    }
}

#[component]
pub fn Schedule() -> Element {
    rsx! {
        div { id: "schedule-page", class: "page-wrapper",
            h2 { "일정" }
            p { "발표 일정은 프로그램 확정 후 공개됩니다." }
        }
    }
}

#[component]
pub fn MyPage() -> Element {
    let store = use_session();

    rsx! {
        div { id: "my-page", class: "page-wrapper",
            h2 { "마이페이지" }
            match store.display_name() {
                Some(name) => rsx! {
                    p { "{name} 님, 환영합니다." }
                },
                None => rsx! {
                    p { "로그인이 필요합니다." }
                },
            }
        }
    }
}

#[component]
pub fn PageNotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    log::warn!("No page at /{}", path);

    rsx! {
        div { id: "not-found-page", class: "page-wrapper",
            h2 { "페이지를 찾을 수 없습니다" }
            p { "/{path}" }
            Link { to: HOME.route, "홈으로" }
        }
    }
}
