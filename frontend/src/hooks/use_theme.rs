use gloo::utils::document_element;
use spinner_shared::storage::{persist_theme, restore_theme};
use spinner_shared::theme::Theme;
use yew::prelude::*;

use crate::storage::BrowserStorage;

#[derive(Clone, PartialEq)]
pub struct ThemeHandle {
    pub theme: Theme,
    pub toggle: Callback<MouseEvent>,
}

fn apply_theme(theme: Theme) {
    document_element().set_class_name(theme.as_str());
    persist_theme(&BrowserStorage, theme);
}

#[hook]
pub fn use_theme() -> ThemeHandle {
    let theme = use_state(|| restore_theme(&BrowserStorage));

    use_effect_with(*theme, |theme| {
        apply_theme(*theme);
        || ()
    });

    let toggle = {
        let theme = theme.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            theme.set(theme.toggled());
        })
    };

    ThemeHandle {
        theme: *theme,
        toggle,
    }
}
