pub mod components;
pub mod hooks;
pub mod pages;
pub mod storage;
pub mod styles;

use gloo::utils::{document, head};
use yew::prelude::*;

use crate::components::ThemeToggle;
use crate::hooks::use_theme;
use crate::pages::DecisionSpinner;

const CUSTOM_CSS: &str = r#"
@keyframes fade-in {
    from { opacity: 0; transform: translateY(-10px); }
    to { opacity: 1; transform: translateY(0); }
}

.animate-fade-in {
    animation: fade-in 0.3s ease-out forwards;
}
"#;

#[function_component(App)]
pub fn app() -> Html {
    // Apply custom CSS
    use_effect_with((), move |_| {
        let style_element = document().create_element("style").ok();
        if let Some(style) = &style_element {
            style.set_text_content(Some(CUSTOM_CSS));
            let _ = head().append_child(style);
        }

        move || {
            if let Some(style) = style_element {
                style.remove();
            }
        }
    });

    let theme = use_theme();

    html! {
        <div class={styles::CONTAINER}>
            <ThemeToggle theme={theme.theme} onclick={theme.toggle.clone()} />
            <DecisionSpinner />
        </div>
    }
}
