use spinner_shared::theme::Theme;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub theme: Theme,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let title = format!("Switch to {} mode", props.theme.toggled().as_str());
    let icon = if props.theme.is_dark() {
        html! {
            <svg class="text-yellow-500" xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <circle cx="12" cy="12" r="4" />
                <path d="M12 2v2M12 20v2M4.93 4.93l1.41 1.41M17.66 17.66l1.41 1.41M2 12h2M20 12h2M6.34 17.66l-1.41 1.41M19.07 4.93l-1.41 1.41" />
            </svg>
        }
    } else {
        html! {
            <svg class="text-gray-700" xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                <path d="M12 3a6 6 0 0 0 9 9 9 9 0 1 1-9-9Z" />
            </svg>
        }
    };

    html! {
        <button
            onclick={props.onclick.clone()}
            class={styles::BUTTON_THEME}
            title={title.clone()}
            aria-label={title}
        >
            {icon}
        </button>
    }
}
