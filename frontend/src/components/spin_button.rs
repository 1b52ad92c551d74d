use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinButtonProps {
    pub is_spinning: bool,
    pub can_spin: bool,
    pub onclick: Callback<MouseEvent>,
}

#[function_component(SpinButton)]
pub fn spin_button(props: &SpinButtonProps) -> Html {
    let button_text = if props.is_spinning { "Spinning..." } else { "Spin!" };

    html! {
        <button
            onclick={props.onclick.clone()}
            disabled={!props.can_spin}
            class={styles::BUTTON_SPIN}
        >
            {button_text}
        </button>
    }
}
