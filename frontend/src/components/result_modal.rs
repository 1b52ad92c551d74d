use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct ResultModalProps {
    pub result: Option<String>,
    pub on_close: Callback<()>,
}

/// Overlay announcing the winner. Closing only clears the result.
#[function_component(ResultModal)]
pub fn result_modal(props: &ResultModalProps) -> Html {
    let Some(result) = props.result.as_ref() else {
        return html! {};
    };

    let onclick = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::MODAL_OVERLAY}>
            <div class={styles::MODAL_CARD}>
                <h3 class={styles::MODAL_HEADING}>{"The winner is..."}</h3>
                <p class={styles::MODAL_RESULT}>{result.clone()}</p>
                <button {onclick} class={styles::BUTTON_SECONDARY}>{"Close"}</button>
            </div>
        </div>
    }
}
