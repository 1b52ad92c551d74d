use spinner_shared::constants::SPIN_DURATION_MS;
use spinner_shared::option_list::OptionList;
use spinner_shared::wheel::{segments, wheel_background};
use yew::prelude::*;

use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SpinnerWheelProps {
    pub options: OptionList,
    pub rotation: f64,
}

#[function_component(SpinnerWheel)]
pub fn spinner_wheel(props: &SpinnerWheelProps) -> Html {
    let segments = segments(props.options.iter());
    let transform = format!(
        "transform: rotate({}deg); transition-duration: {}ms;",
        props.rotation, SPIN_DURATION_MS
    );
    let disc_style = format!("{} background: {};", transform, wheel_background(&segments));

    html! {
        <div class={styles::WHEEL_FRAME}>
            // Pointer, fixed at the top
            <div class={styles::WHEEL_POINTER} style="filter: drop-shadow(0 2px 3px rgba(0,0,0,0.5));">
                <svg class="rotate-90" xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2">
                    <path d="m6 17 5-5-5-5" />
                    <path d="m13 17 5-5-5-5" />
                </svg>
            </div>

            <div class="w-full h-full relative">
                <div class={styles::WHEEL_DISC} style={disc_style} />

                // Labels rotate with the disc
                <div class={styles::WHEEL_LABELS} style={transform}>
                    { for segments.iter().map(|segment| html! {
                        <div
                            key={segment.index}
                            class={styles::WHEEL_LABEL_SLOT}
                            style={format!("transform: rotate({}deg);", segment.label_angle)}
                        >
                            <span class={styles::WHEEL_LABEL} style="text-shadow: 1px 1px 2px rgba(0,0,0,0.7);">
                                {segment.label.clone()}
                            </span>
                        </div>
                    }) }
                </div>
            </div>
        </div>
    }
}
