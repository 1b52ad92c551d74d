use spinner_shared::option_list::OptionList;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct OptionPanelProps {
    pub options: OptionList,
    pub on_add: Callback<String>,
    pub on_remove: Callback<usize>,
    pub on_clear: Callback<()>,
}

#[function_component(OptionPanel)]
pub fn option_panel(props: &OptionPanelProps) -> Html {
    let new_option = use_state(String::new);

    let oninput = {
        let new_option = new_option.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            new_option.set(input.value());
        })
    };

    let onsubmit = {
        let new_option = new_option.clone();
        let options = props.options.clone();
        let on_add = props.on_add.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let trimmed = new_option.trim();
            // Rejected input stays in the field
            if trimmed.is_empty() || options.contains(trimmed) {
                return;
            }
            on_add.emit(trimmed.to_string());
            new_option.set(String::new());
        })
    };

    let onclear = {
        let on_clear = props.on_clear.clone();
        Callback::from(move |_: MouseEvent| on_clear.emit(()))
    };

    html! {
        <div class={styles::PANEL}>
            <div class={styles::PANEL_HEADER}>
                <h2 class={styles::PANEL_TITLE}>{"Options"}</h2>
                {
                    if !props.options.is_empty() {
                        html! {
                            <button onclick={onclear} class={styles::BUTTON_DANGER} title="Clear all options">
                                <svg xmlns="http://www.w3.org/2000/svg" width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                    <path d="M3 6h18" />
                                    <path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6" />
                                    <path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" />
                                </svg>
                                {"Clear All"}
                            </button>
                        }
                    } else {
                        html! {}
                    }
                }
            </div>
            <form {onsubmit} class={styles::FORM}>
                <input
                    type="text"
                    value={(*new_option).clone()}
                    {oninput}
                    placeholder="Add an option..."
                    class={styles::INPUT}
                />
                <button type="submit" class={styles::BUTTON_PRIMARY} disabled={new_option.trim().is_empty()}>
                    {"Add"}
                </button>
            </form>
            <ul class={styles::OPTION_LIST}>
                { for props.options.iter().enumerate().map(|(index, option)| {
                    let on_remove = props.on_remove.clone();
                    let onclick = Callback::from(move |_: MouseEvent| on_remove.emit(index));
                    html! {
                        <li key={index} class={styles::OPTION_ROW}>
                            <span class="truncate">{option}</span>
                            <button {onclick} class={styles::BUTTON_REMOVE} title="Remove option">
                                <svg xmlns="http://www.w3.org/2000/svg" width="18" height="18" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                                    <path d="M18 6 6 18" />
                                    <path d="m6 6 12 12" />
                                </svg>
                            </button>
                        </li>
                    }
                }) }
                if props.options.is_empty() {
                    <p class={styles::TEXT_EMPTY}>{"Add some options to get started!"}</p>
                }
            </ul>
        </div>
    }
}
