//! Static navigation table shared by the desktop and mobile menus.

/// A single navigation target: where it goes and what it is called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub route: &'static str,
    pub title: &'static str,
}

/// A labelled group of entries, shown as a dropdown on desktop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionMenu {
    pub label: &'static str,
    pub items: &'static [RouteEntry],
}

pub const HOME: RouteEntry = RouteEntry {
    route: "/",
    title: "Conference",
};

pub const ABOUT: RouteEntry = RouteEntry {
    route: "/about",
    title: "행사 소개",
};

pub const COC: RouteEntry = RouteEntry {
    route: "/coc",
    title: "행동 강령",
};

pub const SCHEDULE: RouteEntry = RouteEntry {
    route: "/schedule",
    title: "일정",
};

pub const SPONSOR_LIST: RouteEntry = RouteEntry {
    route: "/sponsor/list",
    title: "후원사 목록",
};

pub const MYPAGE: RouteEntry = RouteEntry {
    route: "/mypage",
    title: "마이페이지",
};

pub static SECTION_MENU: &[SectionMenu] = &[
    SectionMenu {
        label: "소개",
        items: &[ABOUT, COC],
    },
    SectionMenu {
        label: "후원",
        items: &[SPONSOR_LIST],
    },
];

pub static LINK_MENU: &[RouteEntry] = &[SCHEDULE];

/// Every entry reachable from the menus, sections first.
pub fn menu_entries() -> impl Iterator<Item = &'static RouteEntry> {
    SECTION_MENU
        .iter()
        .flat_map(|section| section.items.iter())
        .chain(LINK_MENU.iter())
}
