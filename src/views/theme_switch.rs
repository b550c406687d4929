use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value of the `data-theme` attribute on the app root
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Icon for the theme a click switches to
    fn icon(self) -> &'static str {
        match self {
            Theme::Light => "🌙",
            Theme::Dark => "☀️",
        }
    }
}

#[component]
pub fn ThemeSwitch() -> Element {
    let mut theme = use_context::<Signal<Theme>>();

    rsx! {
        button {
            id: "theme-toggle",
            class: "theme-button",
            onclick: move |_| {
                let next = theme().toggled();
                log::debug!("Switching theme to {}", next.as_str());
                theme.set(next);
            },
            {theme().icon()}
        }
    }
}
