//! Theme switcher component.

use dioxus::prelude::*;

use crate::app::theme::{use_theme, Theme};

/// Theme switcher with system, light and dark options. Persists through
/// the theme context.
#[component]
pub fn ThemeSwitcher() -> Element {
    let theme = use_theme();
    let current = theme.get();

    rsx! {
        div { class: "theme-switcher", role: "group", aria_label: "Theme",
            for option in [Theme::System, Theme::Light, Theme::Dark] {
                button {
                    class: if option == current { "active" },
                    onclick: move |_| theme.set(option),
                    {option.label()}
                }
            }
        }
    }
}
