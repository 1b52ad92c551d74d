use yew::prelude::*;

use crate::components::{OptionPanel, ResultModal, SpinButton, SpinnerWheel};
use crate::hooks::use_spinner;
use crate::styles;

#[function_component(DecisionSpinner)]
pub fn decision_spinner() -> Html {
    let spinner = use_spinner();
    let state = &spinner.state;

    let on_spin_click = {
        let on_spin = spinner.on_spin.clone();
        Callback::from(move |_: MouseEvent| on_spin.emit(()))
    };

    html! {
        <>
            <div class={styles::HEADER}>
                <h1 class={styles::TEXT_H1}>{"Decision Spinner"}</h1>
                <p class={styles::TEXT_SUBTITLE}>{"Add your options and let fate decide!"}</p>
            </div>

            <div class={styles::LAYOUT_GRID}>
                <OptionPanel
                    options={state.options.clone()}
                    on_add={spinner.on_add.clone()}
                    on_remove={spinner.on_remove.clone()}
                    on_clear={spinner.on_clear.clone()}
                />

                <div class={styles::WHEEL_PANEL}>
                    <SpinnerWheel options={state.options.clone()} rotation={state.rotation} />
                    <SpinButton
                        is_spinning={state.is_spinning()}
                        can_spin={state.can_spin()}
                        onclick={on_spin_click}
                    />
                </div>
            </div>

            <ResultModal result={state.result.clone()} on_close={spinner.on_dismiss.clone()} />
        </>
    }
}
